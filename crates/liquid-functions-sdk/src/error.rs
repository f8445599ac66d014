//! Error types for Liquid Functions handlers

use thiserror::Error;

/// Errors that can occur while a function processes a request
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            HandlerError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            serde_json::json!({
                "error": self.to_string()
            }),
        )
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Response;

    #[test]
    fn test_status_codes() {
        assert_eq!(HandlerError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(HandlerError::NotFound("x".into()).status_code(), 404);
        assert_eq!(HandlerError::Internal("x".into()).status_code(), 500);

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HandlerError = parse_err.into();
        assert!(matches!(err, HandlerError::Serialization(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_handler_error_conversion() {
        let err = HandlerError::NotFound("function 'Nope'".to_string());
        let response: Response = err.into();
        assert_eq!(response.status, 404);
        assert_eq!(
            response.body.as_deref(),
            Some(r#"{"error":"Not found: function 'Nope'"}"#)
        );
    }
}
