pub mod token;
pub mod validators;
pub mod webutils;
