//! Functions hosted by the gateway and the registry that names them.

pub mod greeting;

use std::collections::HashMap;
use std::sync::Arc;

use liquid_functions_sdk::{Handler, TracingLogger};

pub use greeting::GreetingHandler;

/// Maps route names to handlers. Built once at startup and shared read-only.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in function, each given its own logger.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let logger = Arc::new(TracingLogger::new(greeting::FUNCTION_NAME));
        registry.register(Arc::new(GreetingHandler::new(logger)));
        registry
    }

    /// Register a handler under its own name, replacing any previous one.
    pub fn register(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
