use actix_web::{delete, get, patch, post, put, web};
use entity::person::Model as PersonModel;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::person::RPerson;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
pub async fn list_persons(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<PersonModel>> {
    Ok(ApiResponse::Ok(db.list_persons().await?))
}

#[post("/")]
pub async fn create_person(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RPerson>,
) -> ApiResult<PersonModel> {
    let data = body.into_inner().validated()?;
    Ok(ApiResponse::Created(db.create_person(data).await?))
}

#[get("/{id}/")]
pub async fn get_person(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<PersonModel> {
    Ok(ApiResponse::Ok(db.get_person(path.into_inner()).await?))
}

#[put("/{id}/")]
pub async fn update_person(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RPerson>,
) -> ApiResult<PersonModel> {
    let current = db.get_person(path.into_inner()).await?;
    let data = body.into_inner().validated()?;
    Ok(ApiResponse::Ok(db.update_person(current, data).await?))
}

#[patch("/{id}/")]
pub async fn patch_person(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RPerson>,
) -> ApiResult<PersonModel> {
    let current = db.get_person(path.into_inner()).await?;
    let data = body.into_inner().merged_with(&current).validated()?;
    Ok(ApiResponse::Ok(db.update_person(current, data).await?))
}

/// Employments of the person go with it.
#[delete("/{id}/")]
pub async fn delete_person(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<()> {
    db.delete_person(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
