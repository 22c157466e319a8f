use entity::{address, person, restaurant};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{error::ValidationErrors, field::{Field, FieldReader}, shape::Action};
use crate::utils::validators::{not_blank, rating_bounds, valid_phone};

pub const NAME_TAKEN: &str = "restaurant with this Title already exists.";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RRestaurant {
    pub name: Field,
    pub address: Field,
    pub phone: Field,
    pub cuisine: Field,
    pub rating: Field,
}

/// Trimmed and typed restaurant values. The store-backed rules (unique name,
/// existing address) are run on these by the service.
#[derive(Validate, Debug, Default, Clone)]
pub struct RestaurantFields {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name: Option<String>,
    pub address: Option<i64>,
    #[validate(custom(function = "valid_phone"))]
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    #[validate(custom(function = "rating_bounds"))]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct RestaurantData {
    pub name: String,
    pub address_id: Option<i32>,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<i32>,
}

impl RRestaurant {
    /// Field rules only; the returned errors still lack the store checks.
    pub fn read(&self) -> (RestaurantFields, ValidationErrors) {
        let mut reader = FieldReader::new();
        let fields = RestaurantFields {
            name: reader.text("name", &self.name, true),
            address: reader.integer("address", &self.address, false),
            phone: reader.text("phone", &self.phone, false),
            cuisine: reader.text("cuisine", &self.cuisine, false),
            rating: reader.integer("rating", &self.rating, false),
        };
        let errors = reader.finish(&fields);
        (fields, errors)
    }

    pub fn merged_with(self, current: &restaurant::Model) -> Self {
        Self {
            name: self.name.or_stored(current.name.clone()),
            address: self.address.or_stored(current.address_id),
            phone: self.phone.or_stored(current.phone.clone()),
            cuisine: self.cuisine.or_stored(current.cuisine.clone()),
            rating: self.rating.or_stored(current.rating),
        }
    }
}

impl RestaurantFields {
    /// `None` unless every field passed its checks.
    pub fn into_data(self) -> Option<RestaurantData> {
        Some(RestaurantData {
            name: self.name?,
            address_id: self.address.map(i32::try_from).transpose().ok()?,
            phone: self.phone,
            cuisine: self.cuisine,
            rating: self.rating.map(i32::try_from).transpose().ok()?,
        })
    }
}

/// A restaurant with its address and staff loaded.
#[derive(Debug, Clone)]
pub struct RestaurantRecord {
    pub restaurant: restaurant::Model,
    pub address: Option<address::Model>,
    pub staff: Vec<person::Model>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RestaurantRes {
    pub id: i32,
    pub name: String,
    pub address: Option<i32>,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<i32>,
    pub employees: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RestaurantFullInfo {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<i32>,
    pub full_address: Option<String>,
    pub employees: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RestaurantView {
    Plain(RestaurantRes),
    FullInfo(RestaurantFullInfo),
}

fn plain(record: RestaurantRecord) -> RestaurantView {
    let r = record.restaurant;
    RestaurantView::Plain(RestaurantRes {
        id: r.id,
        name: r.name,
        address: r.address_id,
        phone: r.phone,
        cuisine: r.cuisine,
        rating: r.rating,
        employees: record.staff.iter().map(|p| p.id).collect(),
    })
}

fn full_info(record: RestaurantRecord) -> RestaurantView {
    let r = record.restaurant;
    RestaurantView::FullInfo(RestaurantFullInfo {
        id: r.id,
        name: r.name,
        phone: r.phone,
        cuisine: r.cuisine,
        rating: r.rating,
        full_address: record.address.as_ref().map(address::Model::full_address),
        employees: record.staff.iter().map(person::Model::person_name).collect(),
    })
}

/// Picks the output mapping for a restaurant read or write.
pub fn restaurant_shape(action: Action) -> fn(RestaurantRecord) -> RestaurantView {
    if action.full_info() { full_info } else { plain }
}
