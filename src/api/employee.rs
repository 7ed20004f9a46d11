use actix_web::{HttpResponse, Responder, web};

use crate::api::MessageResponse;
use crate::error::HrmsResult;
use crate::model::employee::{Employee, NewEmployee};
use crate::store::RecordStore;

/// Add Employee
#[utoipa::path(
    post,
    path = "/employee",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee added", body = MessageResponse, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 400, description = "Invalid field, duplicate ID or duplicate email", body = MessageResponse, example = json!({
            "message": "Employee ID already exists"
        })),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    store: web::Data<RecordStore>,
    payload: web::Json<NewEmployee>,
) -> HrmsResult<impl Responder> {
    store.add_employee(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Employee added successfully")))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<RecordStore>) -> HrmsResult<impl Responder> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
///
/// Attendance already recorded for the employee is kept.
#[utoipa::path(
    delete,
    path = "/employee/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse, example = json!({
            "message": "Employee deleted"
        })),
        (status = 404, description = "Employee not found", body = MessageResponse, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> HrmsResult<impl Responder> {
    let employee_id = path.into_inner();
    store.delete_employee(&employee_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee deleted")))
}
