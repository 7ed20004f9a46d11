use tracing::{info, instrument, warn};

use super::{RecordStore, unique_violation};
use crate::error::{HrmsError, HrmsResult};
use crate::model::attendance::{
    AttendanceRecord, AttendanceStatus, NewAttendance, record_key,
};

impl RecordStore {
    #[instrument(skip(self, new_attendance), fields(emp_id = %new_attendance.employee_id, date = %new_attendance.date))]
    pub async fn mark_attendance(&self, new_attendance: NewAttendance) -> HrmsResult<AttendanceRecord> {
        // an unknown employee wins over an invalid status
        if !self.employee_exists(&new_attendance.employee_id).await? {
            warn!("Attendance for unknown employee");
            return Err(HrmsError::EmployeeNotFound);
        }

        let status = AttendanceStatus::parse(&new_attendance.status)?;
        let record = AttendanceRecord {
            record_id: record_key(&new_attendance.employee_id, new_attendance.date),
            employee_id: new_attendance.employee_id,
            date: new_attendance.date,
            status,
        };

        let already_marked = sqlx::query_scalar::<_, String>("SELECT id FROM attendance WHERE id = ?")
            .bind(&record.record_id)
            .fetch_optional(&self.pool)
            .await?
            .is_some();
        if already_marked {
            warn!("Attendance already marked for this date");
            return Err(HrmsError::DuplicateRecord);
        }

        self.insert_record(&record).await?;
        info!(status = %record.status, "Attendance marked");

        Ok(record)
    }

    async fn insert_record(&self, record: &AttendanceRecord) -> HrmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO attendance (id, emp_id, date, status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.record_id)
        .bind(&record.employee_id)
        .bind(record.date)
        .bind(record.status.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(_) => HrmsError::DuplicateRecord,
            None => HrmsError::Database(e),
        })?;

        Ok(())
    }

    pub async fn list_attendance(&self, employee_id: &str) -> HrmsResult<Vec<AttendanceRecord>> {
        if !self.employee_exists(employee_id).await? {
            return Err(HrmsError::EmployeeNotFound);
        }

        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, emp_id, date, status
            FROM attendance
            WHERE emp_id = ?
            ORDER BY date
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
