use actix_web::{delete, get, patch, post, put, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::{restaurant_shape, RRestaurant, RestaurantView};
use crate::types::shape::Action;

// Restaurants are addressed by name, not id.

#[get("/")]
pub async fn list_restaurants(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<RestaurantView>> {
    let shape = restaurant_shape(Action::List);
    let restaurants = db.list_restaurants().await?;
    Ok(ApiResponse::Ok(restaurants.into_iter().map(shape).collect()))
}

/// Must be registered before the `/{name}/` routes.
#[get("/get_random_restaurant/")]
pub async fn get_random_restaurant(db: web::Data<Arc<DatabaseService>>) -> ApiResult<RestaurantView> {
    let record = db.random_restaurant().await?;
    Ok(ApiResponse::Ok(restaurant_shape(Action::Random)(record)))
}

#[post("/")]
pub async fn create_restaurant(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RRestaurant>,
) -> ApiResult<RestaurantView> {
    let record = db.create_restaurant(body.into_inner()).await?;
    Ok(ApiResponse::Created(restaurant_shape(Action::Create)(record)))
}

#[get("/{name}/")]
pub async fn get_restaurant(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<RestaurantView> {
    let record = db.get_restaurant_record(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(restaurant_shape(Action::Retrieve)(record)))
}

#[put("/{name}/")]
pub async fn update_restaurant(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<RRestaurant>,
) -> ApiResult<RestaurantView> {
    let current = db.get_restaurant_by_name(&path.into_inner()).await?;
    let record = db.update_restaurant(current, body.into_inner()).await?;
    Ok(ApiResponse::Ok(restaurant_shape(Action::Update)(record)))
}

#[patch("/{name}/")]
pub async fn patch_restaurant(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<RRestaurant>,
) -> ApiResult<RestaurantView> {
    let current = db.get_restaurant_by_name(&path.into_inner()).await?;
    let payload = body.into_inner().merged_with(&current);
    let record = db.update_restaurant(current, payload).await?;
    Ok(ApiResponse::Ok(restaurant_shape(Action::Update)(record)))
}

#[delete("/{name}/")]
pub async fn delete_restaurant(db: web::Data<Arc<DatabaseService>>, path: web::Path<String>) -> ApiResult<()> {
    db.delete_restaurant(&path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
