use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{Method, StatusCode};

/// Middleware answering `GET`/`HEAD` on the health path before routing
///
/// Application routes never shadow it, and it cannot clash with them.
pub async fn health_middleware(path: Arc<str>, request: Request, next: Next) -> Response {
    let method = request.method();
    if (method == Method::GET || method == Method::HEAD) && request.uri().path() == &*path {
        return (StatusCode::OK, "ok").into_response();
    }

    next.run(request).await
}
