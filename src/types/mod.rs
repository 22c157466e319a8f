pub mod address;
pub mod employee;
pub mod error;
pub mod field;
pub mod person;
pub mod response;
pub mod restaurant;
pub mod shape;
pub mod user;

use validator::Validate;

use crate::types::error::ValidationErrors;

/// Runs the declarative field rules of a payload.
pub fn check<T: Validate>(payload: &T) -> ValidationErrors {
    match payload.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e.into(),
    }
}
