use http::StatusCode;

/// Template every error page is rendered with
pub const DEFAULT_TEMPLATE: &str = "error.html";

/// Trait for errors that can be converted to HTTP responses
///
/// Implemented by the error taxonomy. The server layer converts these
/// into actual HTTP responses, keeping domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error name (e.g. `DocumentNotFoundError`)
    fn error_type(&self) -> &str;

    /// Name of the page template used to render this error
    fn template_name(&self) -> &str {
        DEFAULT_TEMPLATE
    }

    /// Message safe to expose to end users
    fn client_message(&self) -> String;
}
