use serde::Deserialize;

/// How raised errors are written to the response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Pick per request from `Accept` and `X-Requested-With`
    #[default]
    Auto,
    /// Always render the error page
    Html,
    /// Always return the structured `{"error": {"name", "args", "message"}}` body
    Json,
}

/// Error boundary configuration
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    #[serde(default)]
    pub format: ResponseFormat,
    /// Show internal error messages to clients instead of the generic one
    ///
    /// Meant for development deployments only.
    #[serde(default)]
    pub expose_internal_details: bool,
}
