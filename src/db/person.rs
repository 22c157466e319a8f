use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, person::PersonData};
use entity::person::{self, ActiveModel as PersonActive, Entity as Person, Model as PersonModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tracing::info;

impl DatabaseService {
    pub async fn list_persons(&self) -> Result<Vec<PersonModel>, AppError> {
        Ok(Person::find()
            .order_by_asc(person::Column::Surname)
            .order_by_asc(person::Column::Firstname)
            .all(&self.db)
            .await?)
    }

    pub async fn get_person(&self, id: i32) -> Result<PersonModel, AppError> {
        Ok(Person::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Person does not exist".into()))?)
    }

    pub async fn count_persons(&self) -> Result<u64, AppError> {
        Ok(Person::find().count(&self.db).await?)
    }

    pub async fn person_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Person::find_by_id(id).one(&self.db).await?.is_some())
    }

    pub async fn create_person(&self, data: PersonData) -> Result<PersonModel, AppError> {
        let created = PersonActive {
            firstname: Set(data.firstname),
            surname: Set(data.surname),
            patronymic: Set(data.patronymic),
            date_of_birth: Set(data.date_of_birth),
            phone: Set(data.phone),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        info!("Created person {}", created.id);
        Ok(created)
    }

    /// Full replacement of every stored field.
    pub async fn update_person(&self, current: PersonModel, data: PersonData) -> Result<PersonModel, AppError> {
        let mut am: PersonActive = current.into();
        am.firstname = Set(data.firstname);
        am.surname = Set(data.surname);
        am.patronymic = Set(data.patronymic);
        am.date_of_birth = Set(data.date_of_birth);
        am.phone = Set(data.phone);
        Ok(am.update(&self.db).await?)
    }

    /// Employee rows of the person go with it (FK cascade).
    pub async fn delete_person(&self, id: i32) -> Result<(), AppError> {
        let res = Person::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        info!("Deleted person {}", id);
        Ok(())
    }
}
