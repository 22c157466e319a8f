use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub restaurant_id: i32, // FK -> restaurant.id, unique together with person_id
    pub person_id: i32,     // FK -> person.id
    pub position: i32,      // Position code
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to   = "super::restaurant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Restaurant,

    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to   = "super::person::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Person,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef { Relation::Person.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Director = 1,
    Manager = 2,
    Cook = 3,
    Waiter = 4,
}

impl Position {
    pub const ALL: [Position; 4] = [Self::Director, Self::Manager, Self::Cook, Self::Waiter];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Manager => "Manager",
            Self::Cook => "Cook",
            Self::Waiter => "Waiter",
        }
    }
}

impl Model {
    /// Human readable position; unknown codes fall back to the raw number.
    pub fn position_name(&self) -> String {
        Position::from_code(self.position)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| self.position.to_string())
    }
}
