use crate::db::database_service::{unique_violation, DatabaseService};
use crate::types::employee::{EmployeeData, EmployeeRecord, REmployee, PAIR_TAKEN};
use crate::types::error::{AppError, ValidationErrors, NON_FIELD_ERRORS};
use crate::utils::validators::invalid_pk;
use entity::employee::{self, ActiveModel as EmployeeActive, Entity as Employee, Model as EmployeeModel};
use entity::person::Entity as Person;
use entity::restaurant::Entity as Restaurant;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

impl DatabaseService {
    pub async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, AppError> {
        let employees = Employee::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        self.employee_records(employees).await
    }

    pub async fn get_employee(&self, id: i32) -> Result<EmployeeModel, AppError> {
        Ok(Employee::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee does not exist".into()))?)
    }

    pub async fn get_employee_record(&self, id: i32) -> Result<EmployeeRecord, AppError> {
        let employee = self.get_employee(id).await?;
        self.employee_record(employee).await
    }

    pub async fn count_employees(&self) -> Result<u64, AppError> {
        Ok(Employee::find().count(&self.db).await?)
    }

    pub async fn create_employee(&self, payload: REmployee) -> Result<EmployeeRecord, AppError> {
        let data = self.validate_employee(&payload, None).await?;

        let created = EmployeeActive {
            restaurant_id: Set(data.restaurant_id),
            person_id: Set(data.person_id),
            position: Set(data.position),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_violation(e, NON_FIELD_ERRORS, PAIR_TAKEN))?;

        info!(
            "Person {} hired at restaurant {} as {}",
            created.person_id,
            created.restaurant_id,
            created.position_name()
        );
        self.employee_record(created).await
    }

    pub async fn update_employee(
        &self,
        current: EmployeeModel,
        payload: REmployee,
    ) -> Result<EmployeeRecord, AppError> {
        let data = self.validate_employee(&payload, Some(current.id)).await?;

        let mut am: EmployeeActive = current.into();
        am.restaurant_id = Set(data.restaurant_id);
        am.person_id = Set(data.person_id);
        am.position = Set(data.position);
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| unique_violation(e, NON_FIELD_ERRORS, PAIR_TAKEN))?;

        self.employee_record(updated).await
    }

    pub async fn delete_employee(&self, id: i32) -> Result<(), AppError> {
        let res = Employee::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        info!("Deleted employee {}", id);
        Ok(())
    }

    /// Field rules and references first; the (restaurant, person) pair is
    /// only checked once those pass.
    async fn validate_employee(&self, payload: &REmployee, current_id: Option<i32>) -> Result<EmployeeData, AppError> {
        let (fields, mut errors) = payload.read();

        if let (Some(restaurant_id), false) = (fields.restaurant, errors.has("restaurant")) {
            let exists = match i32::try_from(restaurant_id) {
                Ok(id) => self.restaurant_exists(id).await?,
                Err(_) => false,
            };
            if !exists {
                errors.add("restaurant", invalid_pk(restaurant_id));
            }
        }
        if let (Some(person_id), false) = (fields.person, errors.has("person")) {
            let exists = match i32::try_from(person_id) {
                Ok(id) => self.person_exists(id).await?,
                Err(_) => false,
            };
            if !exists {
                errors.add("person", invalid_pk(person_id));
            }
        }
        errors.into_result()?;

        let data = fields
            .data()
            .ok_or_else(|| AppError::Internal("employee payload incomplete after validation".into()))?;

        let mut same_pair = Employee::find()
            .filter(employee::Column::RestaurantId.eq(data.restaurant_id))
            .filter(employee::Column::PersonId.eq(data.person_id));
        if let Some(id) = current_id {
            same_pair = same_pair.filter(employee::Column::Id.ne(id));
        }
        if same_pair.count(&self.db).await? > 0 {
            return Err(AppError::Validation(ValidationErrors::single(NON_FIELD_ERRORS, PAIR_TAKEN)));
        }

        Ok(data)
    }

    async fn employee_record(&self, employee: EmployeeModel) -> Result<EmployeeRecord, AppError> {
        self.employee_records(vec![employee])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("employee record lost while loading parents".into()))
    }

    async fn employee_records(&self, employees: Vec<EmployeeModel>) -> Result<Vec<EmployeeRecord>, AppError> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }
        let persons = employees.load_one(Person, &self.db).await?;
        let restaurants = employees.load_one(Restaurant, &self.db).await?;

        employees
            .into_iter()
            .zip(persons)
            .zip(restaurants)
            .map(|((employee, person), restaurant)| match (person, restaurant) {
                (Some(person), Some(restaurant)) => Ok(EmployeeRecord { employee, restaurant, person }),
                _ => Err(AppError::Internal(format!("employee {} has a dangling reference", employee.id))),
            })
            .collect()
    }
}
