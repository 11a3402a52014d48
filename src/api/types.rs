//! API request and response types

use serde::{Deserialize, Serialize};

/// Request to select an option in the simulated chat
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub option_id: String,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
