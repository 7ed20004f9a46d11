use chrono::NaiveDate;
use sqlx::Sqlite;
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    Date(NaiveDate),
}

/// ===============================
/// WHERE clause builder
/// ===============================
#[derive(Debug, Default)]
pub struct WhereClause {
    conditions: Vec<String>,
    values: Vec<SqlValue>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column op ?`, bound to `value`
    pub fn and(mut self, column: &str, op: &str, value: SqlValue) -> Self {
        self.conditions.push(format!("{column} {op} ?"));
        self.values.push(value);
        self
    }

    /// Adds the condition only when a value is present
    pub fn and_opt(self, column: &str, op: &str, value: Option<SqlValue>) -> Self {
        match value {
            Some(v) => self.and(column, op, v),
            None => self,
        }
    }

    pub fn sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

/// ===============================
/// Bind values in order
/// ===============================
pub fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
        };
    }
    query
}
