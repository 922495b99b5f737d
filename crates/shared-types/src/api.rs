use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Response envelope used by every backend endpoint.
///
/// The backend reports failures both through the HTTP status and through
/// `success: false` with an `error` message; either one marks the call as
/// failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope, honoring the HTTP status the body arrived with.
    pub fn into_result(self, status: u16) -> Result<T, AppError> {
        if !(200..300).contains(&status) || !self.success {
            return Err(AppError::from_status(status, self.error));
        }
        self.data
            .ok_or_else(|| AppError::internal("Response envelope carried no data"))
    }
}
