use crate::types::error::{AppError, ValidationErrors, NON_FIELD_ERRORS};
use crate::utils::webutils::require_session;
use actix_web::{error::JsonPayloadError, middleware::from_fn, web, HttpRequest};

pub mod address;
pub mod auth;
pub mod employees;
pub mod persons;
pub mod restaurants;
pub mod root;

/// Broken JSON is a bad request; well-formed JSON that is not an object is
/// reported like any other validation failure.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Deserialize(e) if e.is_data() => AppError::Validation(ValidationErrors::single(
            NON_FIELD_ERRORS,
            "Invalid data. Expected a dictionary.",
        ))
        .into(),
        other => AppError::BadRequest(other.to_string()).into(),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));

    cfg.service(
        web::scope("/persons")
            .wrap(from_fn(require_session))
            .service(persons::list_persons)
            .service(persons::create_person)
            .service(persons::get_person)
            .service(persons::update_person)
            .service(persons::patch_person)
            .service(persons::delete_person),
    );
    cfg.service(
        web::scope("/address")
            .wrap(from_fn(require_session))
            .service(address::list_addresses)
            .service(address::create_address)
            .service(address::get_address)
            .service(address::update_address)
            .service(address::patch_address)
            .service(address::delete_address),
    );
    cfg.service(
        web::scope("/restaurants")
            .wrap(from_fn(require_session))
            .service(restaurants::list_restaurants)
            .service(restaurants::get_random_restaurant)
            .service(restaurants::create_restaurant)
            .service(restaurants::get_restaurant)
            .service(restaurants::update_restaurant)
            .service(restaurants::patch_restaurant)
            .service(restaurants::delete_restaurant),
    );
    cfg.service(
        web::scope("/employees")
            .wrap(from_fn(require_session))
            .service(employees::list_employees)
            .service(employees::create_employee)
            .service(employees::get_employee)
            .service(employees::update_employee)
            .service(employees::patch_employee)
            .service(employees::delete_employee),
    );
    cfg.service(web::scope("/api-auth").service(auth::login).service(auth::logout));
    cfg.service(root::api_root);
}
