use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String, // lookup key for detail routes
    pub address_id: Option<i32>, // FK -> address.id (nullable)
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to   = "super::address::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Address,
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee::Relation::Restaurant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
