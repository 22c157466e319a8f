use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::country;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub country: String, // ISO 3166-1 alpha-2
    pub province: String,
    pub city: String,
    pub street: String,
    pub house: String,
    pub zip_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::restaurant::Entity")]
    Restaurant,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Country name, province, city, street, house and zip joined by spaces.
    /// A missing zip still contributes an (empty) last element.
    pub fn full_address(&self) -> String {
        let country = country::name(&self.country).unwrap_or(self.country.as_str());
        [
            country,
            self.province.as_str(),
            self.city.as_str(),
            self.street.as_str(),
            self.house.as_str(),
            self.zip_code.as_deref().unwrap_or(""),
        ]
        .join(" ")
    }
}
