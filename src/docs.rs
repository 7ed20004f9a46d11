use crate::api::MessageResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small record-keeping service for employees and their daily attendance.

### 🔹 Key Features
- **Employee Management**
  - Add, list and delete employees (ID and email are unique)
- **Attendance Management**
  - Mark one `Present` / `Absent` record per employee per day
  - View attendance history, optionally within a date range
  - Per-employee totals of recorded and present days

### 📦 Response Format
- JSON bodies; every acknowledgment and error carries a `message`
- Creation returns `201`, unknown employees `404`, invalid input or duplicates `400`

---
Built with **Rust**, **Actix Web**, **SQLx** (SQLite), and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::add_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::filter_attendance,
        crate::api::attendance::attendance_summary
    ),
    components(
        schemas(
            MessageResponse,
            Employee,
            NewEmployee,
            AttendanceStatus,
            AttendanceRecord,
            NewAttendance,
            AttendanceSummary
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/employee",
            "/employees",
            "/employee/{emp_id}",
            "/attendance",
            "/attendance/{emp_id}",
            "/attendance/{emp_id}/filter",
            "/summary",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
