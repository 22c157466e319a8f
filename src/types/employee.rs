use entity::{employee, person, restaurant};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{error::ValidationErrors, field::{Field, FieldReader}, shape::Action};
use crate::utils::validators::valid_position;

pub const PAIR_TAKEN: &str = "The fields restaurant, person must make a unique set.";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct REmployee {
    pub restaurant: Field,
    pub person: Field,
    pub position: Field,
}

#[derive(Validate, Debug, Default, Clone, Copy)]
pub struct EmployeeFields {
    pub restaurant: Option<i64>,
    pub person: Option<i64>,
    #[validate(custom(function = "valid_position"))]
    pub position: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeData {
    pub restaurant_id: i32,
    pub person_id: i32,
    pub position: i32,
}

impl REmployee {
    pub fn read(&self) -> (EmployeeFields, ValidationErrors) {
        let mut reader = FieldReader::new();
        let fields = EmployeeFields {
            restaurant: reader.integer("restaurant", &self.restaurant, true),
            person: reader.integer("person", &self.person, true),
            position: reader.integer("position", &self.position, true),
        };
        let errors = reader.finish(&fields);
        (fields, errors)
    }

    pub fn merged_with(self, current: &employee::Model) -> Self {
        Self {
            restaurant: self.restaurant.or_stored(current.restaurant_id),
            person: self.person.or_stored(current.person_id),
            position: self.position.or_stored(current.position),
        }
    }
}

impl EmployeeFields {
    /// `None` while a required field is missing or out of range.
    pub fn data(&self) -> Option<EmployeeData> {
        Some(EmployeeData {
            restaurant_id: i32::try_from(self.restaurant?).ok()?,
            person_id: i32::try_from(self.person?).ok()?,
            position: i32::try_from(self.position?).ok()?,
        })
    }
}

/// An employee row with both parents loaded.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub employee: employee::Model,
    pub restaurant: restaurant::Model,
    pub person: person::Model,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeRes {
    pub id: i32,
    pub restaurant: i32,
    pub person: i32,
    pub position: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeFullInfo {
    pub id: i32,
    pub employee_name: String,
    pub restaurant_name: String,
    pub position_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EmployeeView {
    Plain(EmployeeRes),
    FullInfo(EmployeeFullInfo),
}

fn plain(record: EmployeeRecord) -> EmployeeView {
    let e = record.employee;
    EmployeeView::Plain(EmployeeRes {
        id: e.id,
        restaurant: e.restaurant_id,
        person: e.person_id,
        position: e.position,
    })
}

fn full_info(record: EmployeeRecord) -> EmployeeView {
    EmployeeView::FullInfo(EmployeeFullInfo {
        id: record.employee.id,
        employee_name: record.person.person_name(),
        restaurant_name: record.restaurant.name,
        position_name: record.employee.position_name(),
    })
}

pub fn employee_shape(action: Action) -> fn(EmployeeRecord) -> EmployeeView {
    if action.full_info() { full_info } else { plain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::employee::Position;

    fn record() -> EmployeeRecord {
        EmployeeRecord {
            employee: employee::Model {
                id: 5,
                restaurant_id: 1,
                person_id: 2,
                position: Position::Cook.code(),
            },
            restaurant: restaurant::Model {
                id: 1,
                name: "Russian wolf".into(),
                address_id: None,
                phone: None,
                cuisine: None,
                rating: None,
            },
            person: person::Model {
                id: 2,
                firstname: "Test".into(),
                surname: "Tester".into(),
                patronymic: None,
                date_of_birth: None,
                phone: None,
            },
        }
    }

    #[test]
    fn full_info_replaces_keys_with_names() {
        let json = serde_json::to_value(employee_shape(Action::List)(record())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "employee_name": "Tester Test",
                "restaurant_name": "Russian wolf",
                "position_name": "Cook",
            })
        );
    }

    #[test]
    fn plain_keeps_keys() {
        let json = serde_json::to_value(employee_shape(Action::Create)(record())).unwrap();
        assert_eq!(json, serde_json::json!({"id": 5, "restaurant": 1, "person": 2, "position": 3}));
    }

    #[test]
    fn position_must_be_a_choice() {
        let payload = REmployee { restaurant: 1.into(), person: 2.into(), position: 9.into() };
        let (_, errors) = payload.read();
        assert_eq!(errors.get("position").unwrap(), ["\"9\" is not a valid choice."]);

        let (fields, missing) = REmployee::default().read();
        assert!(missing.has("restaurant") && missing.has("person") && missing.has("position"));
        assert!(fields.data().is_none());
    }

    #[test]
    fn keys_are_read_leniently() {
        let payload: REmployee = serde_json::from_value(serde_json::json!({
            "restaurant": "1",
            "person": null,
            "position": "cook",
        }))
        .unwrap();
        let (_, errors) = payload.read();
        assert!(!errors.has("restaurant"));
        assert_eq!(errors.get("person").unwrap(), ["This field may not be null."]);
        assert_eq!(errors.get("position").unwrap(), ["A valid integer is required."]);
    }
}
