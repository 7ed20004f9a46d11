use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod attendance;
pub mod employee;

/// Acknowledgment and error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee added successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
