use tracing::debug;

use crate::error::{HrmsError, HrmsResult};
use crate::model::attendance::{AttendanceRange, AttendanceRecord, AttendanceSummary};
use crate::store::RecordStore;
use crate::utils::db_utils::{SqlValue, WhereClause, bind_values};

/// Read-side questions about attendance, answered on top of the record store.
#[derive(Clone, Debug)]
pub struct AttendanceQueryService {
    store: RecordStore,
}

impl AttendanceQueryService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Records for one employee whose date lies in the inclusive range.
    /// A missing bound leaves that side open.
    pub async fn filter_attendance(
        &self,
        employee_id: &str,
        range: &AttendanceRange,
    ) -> HrmsResult<Vec<AttendanceRecord>> {
        if !self.store.employee_exists(employee_id).await? {
            return Err(HrmsError::EmployeeNotFound);
        }

        let clause = WhereClause::new()
            .and("emp_id", "=", SqlValue::String(employee_id.to_string()))
            .and_opt("date", ">=", range.start_date.map(SqlValue::Date))
            .and_opt("date", "<=", range.end_date.map(SqlValue::Date));

        let sql = format!(
            "SELECT id, emp_id, date, status FROM attendance {} ORDER BY date",
            clause.sql()
        );
        debug!(sql = %sql, bindings = ?clause.values(), "Filtering attendance");

        let query = bind_values(sqlx::query_as::<_, AttendanceRecord>(&sql), clause.into_values());
        let records = query.fetch_all(self.store.pool()).await?;

        Ok(records)
    }

    /// One row per employee id present in the attendance table, ordered by id.
    ///
    /// Employees without attendance are omitted; attendance whose employee has
    /// since been deleted is reported with an empty name and department.
    pub async fn summarize_attendance(&self) -> HrmsResult<Vec<AttendanceSummary>> {
        let summary = sqlx::query_as::<_, AttendanceSummary>(
            r#"
            SELECT
                a.emp_id                                  AS employee_id,
                COALESCE(e.name, '')                      AS name,
                COALESCE(e.department, '')                AS department,
                COUNT(*)                                  AS total_days,
                COALESCE(SUM(a.status = 'Present'), 0)    AS present_days
            FROM attendance a
            LEFT JOIN employees e ON e.emp_id = a.emp_id
            GROUP BY a.emp_id
            ORDER BY a.emp_id
            "#,
        )
        .fetch_all(self.store.pool())
        .await?;

        Ok(summary)
    }
}
