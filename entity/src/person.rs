use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub surname: String,
    pub patronymic: Option<String>, // father's name
    pub date_of_birth: Option<Date>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

// Person <-> Restaurant through the employee join table
impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee::Relation::Restaurant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Display name, surname first.
    pub fn person_name(&self) -> String {
        format!("{} {}", self.surname, self.firstname)
    }
}
