use chrono::NaiveDate;
use entity::person::Model as PersonModel;
use serde::Deserialize;
use validator::Validate;

use crate::types::error::AppError;
use crate::types::field::{Field, FieldReader};
use crate::utils::validators::{not_blank, parse_date, valid_date, valid_phone, DATE_FORMAT};

/// Person body for create/update. Fields are read leniently so a missing or
/// mistyped one becomes a field error instead of a parse error.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RPerson {
    pub firstname: Field,
    pub surname: Field,
    pub patronymic: Field,
    pub date_of_birth: Field,
    pub phone: Field,
}

/// Trimmed values the declarative rules run on.
#[derive(Validate, Debug, Default)]
struct PersonFields {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    firstname: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    surname: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    patronymic: Option<String>,
    #[validate(custom(function = "valid_date"))]
    date_of_birth: Option<String>,
    #[validate(custom(function = "valid_phone"))]
    phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PersonData {
    pub firstname: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl RPerson {
    pub fn validated(self) -> Result<PersonData, AppError> {
        let mut reader = FieldReader::new();
        let fields = PersonFields {
            firstname: reader.text("firstname", &self.firstname, true),
            surname: reader.text("surname", &self.surname, true),
            patronymic: reader.text("patronymic", &self.patronymic, false),
            date_of_birth: reader.text("date_of_birth", &self.date_of_birth, false),
            phone: reader.text("phone", &self.phone, false),
        };
        reader.finish(&fields).into_result()?;

        Ok(PersonData {
            firstname: fields.firstname.unwrap_or_default(),
            surname: fields.surname.unwrap_or_default(),
            patronymic: fields.patronymic,
            date_of_birth: fields.date_of_birth.as_deref().and_then(parse_date),
            phone: fields.phone,
        })
    }

    /// PATCH: absent fields keep their stored value.
    pub fn merged_with(self, current: &PersonModel) -> Self {
        Self {
            firstname: self.firstname.or_stored(current.firstname.clone()),
            surname: self.surname.or_stored(current.surname.clone()),
            patronymic: self.patronymic.or_stored(current.patronymic.clone()),
            date_of_birth: self
                .date_of_birth
                .or_stored(current.date_of_birth.map(|d| d.format(DATE_FORMAT).to_string())),
            phone: self.phone.or_stored(current.phone.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::ValidationErrors;
    use serde_json::json;

    fn payload() -> RPerson {
        RPerson {
            firstname: "Test".into(),
            surname: "Test".into(),
            patronymic: "Test".into(),
            date_of_birth: "2010-10-10".into(),
            phone: "+199945645670".into(),
        }
    }

    fn field_errors(payload: RPerson) -> ValidationErrors {
        match payload.validated() {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn valid_payload_is_cleaned() {
        let data = RPerson { patronymic: "  ".into(), firstname: " Test ".into(), ..payload() }
            .validated()
            .unwrap();
        assert_eq!(data.firstname, "Test");
        assert_eq!(data.patronymic, None);
        assert_eq!(data.date_of_birth, NaiveDate::from_ymd_opt(2010, 10, 10));
    }

    #[test]
    fn missing_null_and_blank_names() {
        let errors = field_errors(RPerson { firstname: Field::Missing, surname: " ".into(), ..payload() });
        assert_eq!(errors.get("firstname").unwrap(), ["This field is required."]);
        assert_eq!(errors.get("surname").unwrap(), ["This field may not be blank."]);

        let errors = field_errors(RPerson { firstname: Field::Null, ..payload() });
        assert_eq!(errors.get("firstname").unwrap(), ["This field may not be null."]);
    }

    #[test]
    fn length_is_checked_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(100));
        let data = RPerson { surname: padded.into(), ..payload() }.validated().unwrap();
        assert_eq!(data.surname.len(), 100);

        let errors = field_errors(RPerson { surname: "a".repeat(101).into(), ..payload() });
        assert!(errors.has("surname"));
    }

    #[test]
    fn bad_phone_and_date() {
        let errors = field_errors(RPerson {
            phone: "12-34".into(),
            date_of_birth: "10/10/2010".into(),
            ..payload()
        });
        assert!(errors.has("phone"));
        assert_eq!(
            errors.get("date_of_birth").unwrap(),
            ["Date has wrong format. Use one of these formats instead: YYYY-MM-DD."]
        );
    }

    #[test]
    fn patch_keeps_stored_fields() {
        let current = PersonModel {
            id: 1,
            firstname: "Ivan".into(),
            surname: "Petrov".into(),
            patronymic: None,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 2),
            phone: Some("+79990001122".into()),
        };
        let body: RPerson = serde_json::from_value(json!({"phone": null})).unwrap();
        let data = body.merged_with(&current).validated().unwrap();
        assert_eq!(data.surname, "Petrov");
        assert_eq!(data.date_of_birth, current.date_of_birth);
        assert_eq!(data.phone, None);
    }
}
