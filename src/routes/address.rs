use actix_web::{delete, get, patch, post, put, web};
use entity::address::Model as AddressModel;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::address::RAddress;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
pub async fn list_addresses(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<AddressModel>> {
    Ok(ApiResponse::Ok(db.list_addresses().await?))
}

#[post("/")]
pub async fn create_address(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RAddress>,
) -> ApiResult<AddressModel> {
    let data = body.into_inner().validated()?;
    Ok(ApiResponse::Created(db.create_address(data).await?))
}

#[get("/{id}/")]
pub async fn get_address(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<AddressModel> {
    Ok(ApiResponse::Ok(db.get_address(path.into_inner()).await?))
}

#[put("/{id}/")]
pub async fn update_address(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RAddress>,
) -> ApiResult<AddressModel> {
    let current = db.get_address(path.into_inner()).await?;
    let data = body.into_inner().validated()?;
    Ok(ApiResponse::Ok(db.update_address(current, data).await?))
}

#[patch("/{id}/")]
pub async fn patch_address(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RAddress>,
) -> ApiResult<AddressModel> {
    let current = db.get_address(path.into_inner()).await?;
    let data = body.into_inner().merged_with(&current).validated()?;
    Ok(ApiResponse::Ok(db.update_address(current, data).await?))
}

/// Restaurants at the address go with it.
#[delete("/{id}/")]
pub async fn delete_address(db: web::Data<Arc<DatabaseService>>, path: web::Path<i32>) -> ApiResult<()> {
    db.delete_address(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
