use actix_web::{get, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub persons: String,
    pub address: String,
    pub restaurants: String,
    pub employees: String,
}

#[get("/")]
pub async fn api_root(req: HttpRequest) -> ApiResult<Response> {
    let info = req.connection_info();
    let base = format!("{}://{}", info.scheme(), info.host());

    Ok(ApiResponse::Ok(Response {
        persons: format!("{}/persons/", base),
        address: format!("{}/address/", base),
        restaurants: format!("{}/restaurants/", base),
        employees: format!("{}/employees/", base),
    }))
}
