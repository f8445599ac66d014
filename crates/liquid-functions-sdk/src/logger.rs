//! Logging capability injected into functions
//!
//! Functions receive a [`Logger`] when they are constructed instead of
//! reaching for global state. The host hands out [`TracingLogger`]s; tests
//! can hand out anything that records messages.

/// Sink for a function's informational messages.
pub trait Logger: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &str);
}

/// [`Logger`] that forwards to `tracing`, tagging each event with the
/// function it belongs to.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    function: String,
}

impl TracingLogger {
    pub fn new(function: impl Into<String>) -> Self {
        Self { function: function.into() }
    }

    /// Name of the function this logger is attached to.
    pub fn function(&self) -> &str {
        &self.function
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(function = %self.function, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: logging must be a no-op, not a panic.
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("LiquidFunction"));
        logger.info("request received");
    }

    #[test]
    fn test_tracing_logger_function_name() {
        let logger = TracingLogger::new("LiquidFunction");
        assert_eq!(logger.function(), "LiquidFunction");
    }
}
