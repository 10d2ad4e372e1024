use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use vj4_error::{Error, ErrorArg, HttpError, UserFacingError};

/// Handler result whose error side renders through the error boundary
pub type HandlerResult<T> = Result<T, ErrorResponse>;

/// Error raised by a handler
///
/// Converts into a JSON response on its own. The error is also stored in the
/// response extensions, where the error page middleware picks it up to log it
/// and re-render it in the negotiated format.
#[derive(Debug)]
pub struct ErrorResponse(pub Error);

impl<E> From<E> for ErrorResponse
where
    E: Into<Error>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

/// Body of a JSON error response
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: ErrorDetails<'a>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails<'a> {
    pub name: &'a str,
    pub args: &'a [ErrorArg],
    pub message: String,
}

/// Message shown to the client for `error`
pub fn client_message(error: &Error, expose_internal_details: bool) -> String {
    match error {
        Error::Internal(internal) if expose_internal_details => internal.to_string(),
        _ => error.client_message(),
    }
}

pub fn json_response(error: &Error, expose_internal_details: bool) -> Response {
    let args = error.as_user_facing().map(UserFacingError::args).unwrap_or_default();
    let body = ErrorBody {
        error: ErrorDetails {
            name: error.error_type(),
            args,
            message: client_message(error, expose_internal_details),
        },
    };

    (error.status_code(), Json(body)).into_response()
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = json_response(&self.0, false);
        response.extensions_mut().insert(self.0);
        response
    }
}
