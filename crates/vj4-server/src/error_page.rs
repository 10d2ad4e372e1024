use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use http::{HeaderMap, header};
use vj4_config::{ErrorsConfig, ResponseFormat};
use vj4_error::{Error, HttpError};

use crate::response::{client_message, json_response};

/// Body format chosen for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

/// Pick the error body format for a request
///
/// A forced format in the configuration wins. Otherwise JSON is chosen for
/// XHR requests and for clients that list `application/json` in `Accept`.
pub fn negotiate(configured: ResponseFormat, headers: &HeaderMap) -> Format {
    match configured {
        ResponseFormat::Html => Format::Html,
        ResponseFormat::Json => Format::Json,
        ResponseFormat::Auto if is_xhr(headers) || accepts_json(headers) => Format::Json,
        ResponseFormat::Auto => Format::Html,
    }
}

fn is_xhr(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|range| range.split(';').next())
        .any(|media| media.trim().eq_ignore_ascii_case("application/json"))
}

/// Middleware that logs raised errors and renders them for the client
///
/// Responses without a stored [`Error`] pass through untouched.
pub async fn error_page_middleware(config: ErrorsConfig, request: Request, next: Next) -> Response {
    let format = negotiate(config.format, request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;
    let Some(error) = response.extensions_mut().remove::<Error>() else {
        return response;
    };

    match &error {
        Error::UserFacing(e) => {
            tracing::debug!(%method, %path, kind = e.kind().name(), status = e.http_status().as_u16(), "{e}");
        }
        Error::Internal(e) => {
            tracing::error!(%method, %path, name = e.name(), "{e}");
        }
    }

    match format {
        Format::Json => json_response(&error, config.expose_internal_details),
        Format::Html => html_response(&error, config.expose_internal_details),
    }
}

fn html_response(error: &Error, expose_internal_details: bool) -> Response {
    let status = error.status_code();
    let message = client_message(error, expose_internal_details);
    let title = status.canonical_reason().unwrap_or("Error");

    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{code} {title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<p class=\"error\" data-name=\"{name}\">{message}</p>\n</body>\n</html>\n",
        code = status.as_u16(),
        name = escape(error.error_type()),
        message = escape(&message),
    );

    (status, Html(page)).into_response()
}

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
