use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

use crate::api::MessageResponse;

pub type HrmsResult<T> = Result<T, HrmsError>;

#[derive(Debug, Error)]
pub enum HrmsError {
    #[error("{0}")]
    Validation(String),

    #[error("Employee ID already exists")]
    DuplicateKey,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Employee not found")]
    NotFound,

    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Attendance already marked for this date")]
    DuplicateRecord,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl HrmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        HrmsError::Validation(message.into())
    }
}

impl ResponseError for HrmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            HrmsError::Validation(_)
            | HrmsError::DuplicateKey
            | HrmsError::DuplicateEmail
            | HrmsError::DuplicateRecord => StatusCode::BAD_REQUEST,
            HrmsError::NotFound | HrmsError::EmployeeNotFound => StatusCode::NOT_FOUND,
            HrmsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            HrmsError::Database(e) => {
                // never leak sql details to the client
                error!(error = %e, "Storage failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}
