pub mod address;
pub mod country;
pub mod employee;
pub mod person;
pub mod restaurant;
pub mod session;
pub mod user;

/*
 A restaurant optionally sits at one address and is deleted with it.
 People are linked to restaurants through employee rows: one position per
 (restaurant, person) pair, removed when either side goes away.
 Users and sessions only back the login flow.
 */
