use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::error::HrmsError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn parse(raw: &str) -> Result<Self, HrmsError> {
        AttendanceStatus::from_str(raw)
            .map_err(|_| HrmsError::validation("Status must be 'Present' or 'Absent'"))
    }
}

impl TryFrom<String> for AttendanceStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AttendanceStatus::from_str(&value)
    }
}

/// Primary key of an attendance row. Encodes the one-record-per-employee-per-day
/// rule: a second mark for the same day collides on this key.
pub fn record_key(employee_id: &str, date: NaiveDate) -> String {
    format!("{employee_id}-{}", date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[serde(rename = "id")]
    #[sqlx(rename = "id")]
    #[schema(example = "E001-2024-01-15")]
    pub record_id: String,

    #[serde(rename = "emp_id")]
    #[sqlx(rename = "emp_id")]
    #[schema(example = "E001")]
    pub employee_id: String,

    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewAttendance {
    #[serde(rename = "emp_id", alias = "employee_id")]
    #[schema(example = "E001")]
    pub employee_id: String,

    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,

    /// Checked against `Present` / `Absent` when the record is marked
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceRange {
    /// Inclusive lower bound (YYYY-MM-DD), unbounded when omitted
    #[param(value_type = Option<String>, example = "2024-01-10")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound (YYYY-MM-DD), unbounded when omitted
    #[param(value_type = Option<String>, example = "2024-01-20")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceSummary {
    #[schema(example = "E001")]
    pub employee_id: String,
    /// Empty when the employee was deleted after attendance was marked
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 20)]
    pub total_days: i64,
    #[schema(example = 18)]
    pub present_days: i64,
}
