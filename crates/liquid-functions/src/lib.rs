//! Liquid Functions host
//!
//! Serves HTTP-triggered functions written against `liquid-functions-sdk`:
//! - Parses query strings and bodies into SDK requests
//! - Routes `/{prefix}/{function}` to registered handlers
//! - Converts SDK responses back into HTTP responses

pub mod config;
pub mod functions;
pub mod router;

use crate::config::AppConfig;
use crate::functions::FunctionRegistry;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub functions: FunctionRegistry,
}

impl AppState {
    pub fn new(config: AppConfig, functions: FunctionRegistry) -> Self {
        Self { config, functions }
    }
}
