use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{HrmsError, HrmsResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "emp_id": "E001",
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[serde(rename = "emp_id")]
    #[sqlx(rename = "emp_id")]
    #[schema(example = "E001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    #[serde(rename = "emp_id", alias = "employee_id")]
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl NewEmployee {
    /// Structural checks only; uniqueness is decided by the store.
    pub fn validate(&self) -> HrmsResult<()> {
        require("emp_id", &self.employee_id)?;
        require("name", &self.name)?;
        if !is_valid_email(&self.email) {
            return Err(HrmsError::validation("email is not a valid email address"));
        }
        require("department", &self.department)?;
        Ok(())
    }
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Employee {
            employee_id: new.employee_id,
            name: new.name,
            email: new.email,
            department: new.department,
        }
    }
}

fn require(field: &str, value: &str) -> HrmsResult<()> {
    if value.trim().is_empty() {
        return Err(HrmsError::validation(format!("Required field: {field}")));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
