//! Liquid Functions SDK - Types and utilities for writing HTTP-triggered functions
//!
//! This crate provides the core types and traits that functions use to talk
//! to the Liquid Functions host.

pub mod request;
pub mod response;
pub mod handler;
pub mod logger;
pub mod error;

pub mod prelude {
    //! Common imports for Liquid Functions handlers
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use crate::handler::Handler;
    pub use crate::logger::{Logger, TracingLogger};
    pub use crate::error::HandlerError;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use request::Request;
pub use response::Response;
pub use handler::Handler;
pub use logger::{Logger, TracingLogger};
pub use error::HandlerError;
