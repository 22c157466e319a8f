pub mod address;
pub mod database_service;
pub mod employee;
pub mod person;
pub mod restaurant;
pub mod session;
pub mod user;
