use entity::address::Model as AddressModel;
use serde::Deserialize;
use validator::Validate;

use crate::types::error::AppError;
use crate::types::field::{Field, FieldReader};
use crate::utils::validators::{not_blank, valid_country};

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RAddress {
    pub country: Field,
    pub province: Field,
    pub city: Field,
    pub street: Field,
    pub house: Field,
    pub zip_code: Field,
}

#[derive(Validate, Debug, Default)]
struct AddressFields {
    #[validate(custom(function = "valid_country"))]
    country: Option<String>,
    #[validate(custom(function = "not_blank"))]
    province: Option<String>,
    #[validate(custom(function = "not_blank"))]
    city: Option<String>,
    #[validate(custom(function = "not_blank"))]
    street: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "Ensure this field has no more than 50 characters.")
    )]
    house: Option<String>,
    #[validate(length(max = 5, message = "Ensure this field has no more than 5 characters."))]
    zip_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddressData {
    pub country: String,
    pub province: String,
    pub city: String,
    pub street: String,
    pub house: String,
    pub zip_code: Option<String>,
}

impl RAddress {
    pub fn validated(self) -> Result<AddressData, AppError> {
        let mut reader = FieldReader::new();
        let fields = AddressFields {
            country: reader.text("country", &self.country, true),
            province: reader.text("province", &self.province, true),
            city: reader.text("city", &self.city, true),
            street: reader.text("street", &self.street, true),
            house: reader.text("house", &self.house, true),
            zip_code: reader.text("zip_code", &self.zip_code, false),
        };
        reader.finish(&fields).into_result()?;

        Ok(AddressData {
            country: fields.country.unwrap_or_default(),
            province: fields.province.unwrap_or_default(),
            city: fields.city.unwrap_or_default(),
            street: fields.street.unwrap_or_default(),
            house: fields.house.unwrap_or_default(),
            zip_code: fields.zip_code,
        })
    }

    pub fn merged_with(self, current: &AddressModel) -> Self {
        Self {
            country: self.country.or_stored(current.country.clone()),
            province: self.province.or_stored(current.province.clone()),
            city: self.city.or_stored(current.city.clone()),
            street: self.street.or_stored(current.street.clone()),
            house: self.house.or_stored(current.house.clone()),
            zip_code: self.zip_code.or_stored(current.zip_code.clone()),
        }
    }
}
