use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::config::Config;
use crate::error::AppError;

/// Header carrying the society's shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reads pass through untouched.
pub fn is_read_only(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Gate every mutating request on the shared secret.
///
/// Installed once on the whole router, so handlers never check it themselves.
pub async fn require_api_key(
    State(config): State<Config>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_read_only(req.method()) {
        return Ok(next.run(req).await);
    }

    let supplied = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if supplied != config.api_key {
        tracing::warn!("Rejected {} {}: bad api key", req.method(), req.uri().path());
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
