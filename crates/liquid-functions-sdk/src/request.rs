//! HTTP Request representation for functions

use crate::error::HandlerError;
use serde::Deserialize;
use std::collections::HashMap;

/// Represents an incoming HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, ...)
    pub method: String,

    /// Request path (e.g., "/api/LiquidFunction")
    pub path: String,

    /// Query parameters
    pub query: HashMap<String, String>,

    /// HTTP headers
    pub headers: HashMap<String, String>,

    /// Request body as text. `None` when the client sent no bytes.
    pub body: Option<String>,

    /// Request ID for tracing
    pub request_id: String,
}

impl Request {
    /// Create a request with the given method and path and nothing else.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter (builder pattern).
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parse the body as JSON into a typed struct.
    ///
    /// A missing body is parsed as JSON `null`, so only types that accept
    /// `null` succeed on it. A leading UTF-8 byte-order mark is skipped.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Input { name: Option<String> }
    ///
    /// let input: Input = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        let body = self.body.as_deref().unwrap_or("null");
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);
        serde_json::from_str(body)
            .map_err(|e| HandlerError::BadRequest(format!("Invalid JSON: {}", e)))
    }

    /// Get a query parameter as a string slice.
    ///
    /// # Example
    /// ```ignore
    /// // URL: /api/LiquidFunction?name=Ada
    /// let name = req.query_param("name"); // Some("Ada")
    /// ```
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Check if request method matches (case-insensitive).
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }

    /// Get the Content-Type header value.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: None,
            request_id: String::new(),
        }
    }
}
