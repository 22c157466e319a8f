use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

/// Optional leading `+`, optional extra digit, then 9 to 15 digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d?\d{9,15}$").expect("phone pattern compiles"));

pub const RATING_MAX_VALUE: i64 = 100;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn invalid_choice(value: impl std::fmt::Display) -> ValidationError {
    error("invalid_choice", format!("\"{}\" is not a valid choice.", value))
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field may not be blank."));
    }
    Ok(())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn valid_date(value: &str) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(error(
            "invalid",
            "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.",
        )),
    }
}

pub fn valid_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(value) {
        return Ok(());
    }
    Err(error(
        "invalid_phone",
        "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed.",
    ))
}

pub fn valid_country(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if entity::country::is_valid(value) {
        return Ok(());
    }
    Err(invalid_choice(value))
}

pub fn valid_position(value: i64) -> Result<(), ValidationError> {
    match i32::try_from(value).ok().and_then(entity::employee::Position::from_code) {
        Some(_) => Ok(()),
        None => Err(invalid_choice(value)),
    }
}

pub fn rating_bounds(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(error("min_value", "Ensure this value is greater than or equal to 0."));
    }
    if value > RATING_MAX_VALUE {
        return Err(error(
            "max_value",
            format!("Ensure this value is less than or equal to {}.", RATING_MAX_VALUE),
        ));
    }
    Ok(())
}

pub fn invalid_pk(id: i64) -> String {
    format!("Invalid pk \"{}\" - object does not exist.", id)
}
