//! Errors at the cart API boundary.

use serde::Deserialize;

/// Error body returned by the cart endpoints on rejection,
/// e.g. `{"status": 422, "description": "Out of stock"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    #[serde(default)]
    pub description: String,
}

/// Failure of a cart API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("network failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint rejected the request with an error body.
    #[error("{description}")]
    Application { status: u16, description: String },

    /// A success response carried a payload we could not decode.
    #[error("malformed response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// The shopper-facing message for this failure, suitable for the
    /// `cart-error` payload.
    pub fn description(&self) -> String {
        match self {
            ApiError::Application { description, .. } => description.clone(),
            ApiError::Transport(_) => "Something went wrong. Please try again.".to_string(),
            ApiError::Decode(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    pub(crate) fn from_error_body(body: ErrorBody) -> Self {
        ApiError::Application {
            status: body.status,
            description: body.description,
        }
    }
}
