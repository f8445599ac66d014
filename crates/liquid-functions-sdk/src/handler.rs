//! The function handler contract
//!
//! A function is anything that turns one [`Request`] into one [`Response`].
//! The host reads the whole request body before calling [`Handler::handle`],
//! so handlers are plain synchronous code.
//!
//! # Example
//!
//! ```ignore
//! use liquid_functions_sdk::prelude::*;
//!
//! struct Echo;
//!
//! impl Handler for Echo {
//!     fn name(&self) -> &str {
//!         "Echo"
//!     }
//!
//!     fn handle(&self, req: Request) -> Response {
//!         Response::text(200, req.body.unwrap_or_default())
//!     }
//! }
//! ```

use crate::{Request, Response};

/// A function the host can dispatch requests to.
///
/// Implementations must be stateless across invocations; the host may call
/// `handle` from many tasks at once.
pub trait Handler: Send + Sync + 'static {
    /// Function name, used as the last route segment.
    fn name(&self) -> &str;

    /// Process one request.
    fn handle(&self, req: Request) -> Response;
}
