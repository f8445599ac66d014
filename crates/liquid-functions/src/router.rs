//! Function router - turns HTTP requests into SDK requests and back
//!
//! The router plays the part of the function host: it owns routing, body
//! reading and request ids. Functions only ever see a fully read
//! [`liquid_functions_sdk::Request`].

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use liquid_functions_sdk::HandlerError;

use crate::AppState;

/// Header carrying the id assigned to each function invocation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the router that serves every registered function
///
/// Functions answer GET and POST only; axum replies 405 to anything else.
/// The `code` function-key parameter is passed through untouched.
pub fn create_router(state: Arc<AppState>) -> Router {
    let function_route = state.config.function_route();

    Router::new()
        .route("/health", get(health_check))
        .route(&function_route, get(handle_function_request).post(handle_function_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Dispatch one request to the named function
async fn handle_function_request(
    State(state): State<Arc<AppState>>,
    Path(function): Path<String>,
    request: Request<Body>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("function", %function, %request_id);

    dispatch(state, function, request, request_id).instrument(span).await
}

async fn dispatch(
    state: Arc<AppState>,
    function: String,
    request: Request<Body>,
    request_id: String,
) -> Response {
    let Some(handler) = state.functions.get(&function) else {
        tracing::debug!("No function registered under {}", function);
        let not_found = HandlerError::NotFound(format!("function '{}'", function));
        return into_http_response(not_found.into(), &request_id);
    };

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = parse_query(request.uri().query());

    let headers: HashMap<String, String> = request.headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    // The whole body is read before the function runs
    let body_bytes = match axum::body::to_bytes(request.into_body(), state.config.max_body_bytes).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to read body: {}", e);
            let bad_request = HandlerError::BadRequest("Failed to read body".to_string());
            return into_http_response(bad_request.into(), &request_id);
        }
    };

    let body = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    let sdk_request = liquid_functions_sdk::Request {
        method,
        path,
        query,
        headers,
        body,
        request_id: request_id.clone(),
    };

    tracing::debug!(method = %sdk_request.method, "Invoking function");
    let sdk_response = handler.handle(sdk_request);
    tracing::debug!(status = sdk_response.status, "Function completed");

    into_http_response(sdk_response, &request_id)
}

/// Decode a raw query string. For repeated keys the first value wins.
pub fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    let mut query = HashMap::new();
    if let Some(raw) = raw {
        for (k, v) in url::form_urlencoded::parse(raw.as_bytes()) {
            query.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }
    query
}

/// Convert an SDK response into an HTTP response, stamping the request id.
/// The host's request id replaces any `x-request-id` the function set.
fn into_http_response(sdk_response: liquid_functions_sdk::Response, request_id: &str) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in sdk_response.headers {
        builder = builder.header(key, value);
    }

    let mut response = match builder.body(Body::from(sdk_response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to build response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
