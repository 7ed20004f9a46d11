use actix_web::{HttpResponse, Responder, web};

use crate::api::MessageResponse;
use crate::error::HrmsResult;
use crate::model::attendance::{AttendanceRange, AttendanceRecord, AttendanceSummary, NewAttendance};
use crate::service::AttendanceQueryService;
use crate::store::RecordStore;

/// Mark attendance for one employee and day
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = MessageResponse, example = json!({
            "message": "Attendance marked"
        })),
        (status = 400, description = "Invalid status or already marked for this date", body = MessageResponse, example = json!({
            "message": "Attendance already marked for this date"
        })),
        (status = 404, description = "Employee not found", body = MessageResponse, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<RecordStore>,
    payload: web::Json<NewAttendance>,
) -> HrmsResult<impl Responder> {
    store.mark_attendance(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Attendance marked")))
}

/// Attendance history of an employee
#[utoipa::path(
    get,
    path = "/attendance/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records ordered by date", body = [AttendanceRecord]),
        (status = 404, description = "Employee not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> HrmsResult<impl Responder> {
    let records = store.list_attendance(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance of an employee within an inclusive date range
#[utoipa::path(
    get,
    path = "/attendance/{emp_id}/filter",
    params(
        ("emp_id", Path, description = "Employee ID"),
        AttendanceRange
    ),
    responses(
        (status = 200, description = "Matching attendance records ordered by date", body = [AttendanceRecord]),
        (status = 400, description = "Malformed date", body = MessageResponse),
        (status = 404, description = "Employee not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Attendance"
)]
pub async fn filter_attendance(
    queries: web::Data<AttendanceQueryService>,
    path: web::Path<String>,
    range: web::Query<AttendanceRange>,
) -> HrmsResult<impl Responder> {
    let records = queries.filter_attendance(&path.into_inner(), &range).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Per-employee attendance totals
#[utoipa::path(
    get,
    path = "/summary",
    responses(
        (status = 200, description = "One row per employee with attendance", body = [AttendanceSummary]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    queries: web::Data<AttendanceQueryService>,
) -> HrmsResult<impl Responder> {
    let summary = queries.summarize_attendance().await?;
    Ok(HttpResponse::Ok().json(summary))
}
