use actix_web::{delete, get, patch, post, put, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::employee::{employee_shape, EmployeeView, REmployee};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::shape::Action;

#[get("/")]
pub async fn list_employees(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<EmployeeView>> {
    let employees = db.list_employees().await?;
    Ok(ApiResponse::Ok(employees.into_iter().map(employee_shape(Action::List)).collect()))
}

#[post("/")]
pub async fn create_employee(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<REmployee>,
) -> ApiResult<EmployeeView> {
    let record = db.create_employee(body.into_inner()).await?;
    Ok(ApiResponse::Created(employee_shape(Action::Create)(record)))
}

#[get("/{id}/")]
pub async fn get_employee(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<EmployeeView> {
    let record = db.get_employee_record(path.into_inner()).await?;
    Ok(ApiResponse::Ok(employee_shape(Action::Retrieve)(record)))
}

#[put("/{id}/")]
pub async fn update_employee(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<REmployee>,
) -> ApiResult<EmployeeView> {
    let current = db.get_employee(path.into_inner()).await?;
    let record = db.update_employee(current, body.into_inner()).await?;
    Ok(ApiResponse::Ok(employee_shape(Action::Update)(record)))
}

#[patch("/{id}/")]
pub async fn patch_employee(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<REmployee>,
) -> ApiResult<EmployeeView> {
    let current = db.get_employee(path.into_inner()).await?;
    let payload = body.into_inner().merged_with(&current);
    let record = db.update_employee(current, payload).await?;
    Ok(ApiResponse::Ok(employee_shape(Action::Update)(record)))
}

#[delete("/{id}/")]
pub async fn delete_employee(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<()> {
    db.delete_employee(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
