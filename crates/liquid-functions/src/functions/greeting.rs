//! `LiquidFunction`: greets the caller by name.
//!
//! The name comes from the `name` query parameter, or failing that from a
//! `name` field in a JSON request body. Neither being present is not an
//! error; the function answers 200 either way.

use std::sync::Arc;

use liquid_functions_sdk::prelude::*;

/// Route name of the greeting function.
pub const FUNCTION_NAME: &str = "LiquidFunction";

/// Body returned when no name could be resolved.
pub const FALLBACK_MESSAGE: &str = "This HTTP triggered function executed successfully. \
     Pass a name in the query string or in the request body for a personalized response.";

/// Optional fields accepted in a JSON request body.
#[derive(Debug, Default, Deserialize)]
pub struct GreetingInput {
    #[serde(default)]
    pub name: Option<String>,
}

pub struct GreetingHandler {
    logger: Arc<dyn Logger>,
}

impl GreetingHandler {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Resolve the name to greet. A non-empty query value wins over the
    /// body; an unreadable body counts as no name at all.
    pub fn resolve_name(req: &Request) -> Option<String> {
        if let Some(name) = req.query_param("name").filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }

        req.json::<GreetingInput>()
            .ok()
            .and_then(|input| input.name)
            .filter(|n| !n.is_empty())
    }
}

/// Build the greeting body for an optional name.
pub fn greeting_message(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            format!("Hello, {}. This HTTP triggered function executed successfully.", name)
        }
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

impl Handler for GreetingHandler {
    fn name(&self) -> &str {
        FUNCTION_NAME
    }

    fn handle(&self, req: Request) -> Response {
        self.logger.info("HTTP trigger function processed a request.");

        let name = Self::resolve_name(&req);
        Response::text(200, greeting_message(name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    fn handler() -> (GreetingHandler, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        (GreetingHandler::new(logger.clone()), logger)
    }

    fn body(resp: &Response) -> &str {
        resp.body.as_deref().unwrap_or_default()
    }

    #[test]
    fn test_query_name() {
        let (h, _) = handler();
        let resp = h.handle(Request::new("GET", "/").with_query("name", "Ada"));
        assert_eq!(resp.status, 200);
        assert_eq!(body(&resp), "Hello, Ada. This HTTP triggered function executed successfully.");
    }

    #[test]
    fn test_body_name() {
        let (h, _) = handler();
        let resp = h.handle(Request::new("POST", "/").with_body(r#"{"name":"Grace"}"#));
        assert_eq!(resp.status, 200);
        assert_eq!(body(&resp), "Hello, Grace. This HTTP triggered function executed successfully.");
    }

    #[test]
    fn test_no_name_anywhere() {
        let (h, _) = handler();
        let resp = h.handle(Request::new("GET", "/"));
        assert_eq!(resp.status, 200);
        assert_eq!(body(&resp), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_query_takes_precedence_over_body() {
        let (h, _) = handler();
        let req = Request::new("POST", "/")
            .with_query("name", "Ada")
            .with_body(r#"{"name":"Grace"}"#);
        assert_eq!(
            body(&h.handle(req)),
            "Hello, Ada. This HTTP triggered function executed successfully."
        );
    }

    #[test]
    fn test_empty_query_falls_back_to_body() {
        let (h, _) = handler();
        let req = Request::new("POST", "/")
            .with_query("name", "")
            .with_body(r#"{"name":"Grace"}"#);
        assert_eq!(
            body(&h.handle(req)),
            "Hello, Grace. This HTTP triggered function executed successfully."
        );

        let resp = h.handle(Request::new("GET", "/").with_query("name", ""));
        assert_eq!(body(&resp), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_unusable_bodies_give_fallback() {
        let (h, _) = handler();
        for raw in ["{not json", "[1,2,3]", "\"Grace\"", "null", r#"{"name":42}"#, r#"{"name":null}"#, r#"{"name":""}"#, r#"{"other":"x"}"#] {
            let resp = h.handle(Request::new("POST", "/").with_body(raw));
            assert_eq!(resp.status, 200, "body {raw}");
            assert_eq!(body(&resp), FALLBACK_MESSAGE, "body {raw}");
        }
    }

    #[test]
    fn test_duplicate_body_name_gives_fallback() {
        let (h, _) = handler();
        let resp = h.handle(Request::new("POST", "/").with_body(r#"{"name":"A","name":"B"}"#));
        assert_eq!(resp.status, 200);
        assert_eq!(body(&resp), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_name_is_not_escaped() {
        let (h, _) = handler();
        let resp = h.handle(Request::new("GET", "/").with_query("name", "<b>O'Brien</b> & co"));
        assert_eq!(
            body(&resp),
            "Hello, <b>O'Brien</b> & co. This HTTP triggered function executed successfully."
        );
    }

    #[test]
    fn test_plain_text_content_type() {
        let (h, _) = handler();
        let resp = h.handle(Request::default());
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_logs_once_per_request() {
        let (h, logger) = handler();
        h.handle(Request::default());
        h.handle(Request::new("GET", "/").with_query("name", "Ada"));
        assert_eq!(logger.lines.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_greeting_message() {
        assert_eq!(greeting_message(None), FALLBACK_MESSAGE);
        assert_eq!(greeting_message(Some("")), FALLBACK_MESSAGE);
        assert_eq!(
            greeting_message(Some("Linus")),
            "Hello, Linus. This HTTP triggered function executed successfully."
        );
    }
}
