use crate::db::database_service::DatabaseService;
use crate::types::{address::AddressData, error::AppError};
use entity::address::{self, ActiveModel as AddressActive, Entity as Address, Model as AddressModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tracing::info;

impl DatabaseService {
    pub async fn list_addresses(&self) -> Result<Vec<AddressModel>, AppError> {
        Ok(Address::find()
            .order_by_asc(address::Column::Country)
            .order_by_asc(address::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get_address(&self, id: i32) -> Result<AddressModel, AppError> {
        Ok(Address::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Address does not exist".into()))?)
    }

    pub async fn count_addresses(&self) -> Result<u64, AppError> {
        Ok(Address::find().count(&self.db).await?)
    }

    pub async fn address_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Address::find_by_id(id).one(&self.db).await?.is_some())
    }

    pub async fn create_address(&self, data: AddressData) -> Result<AddressModel, AppError> {
        let created = AddressActive {
            country: Set(data.country),
            province: Set(data.province),
            city: Set(data.city),
            street: Set(data.street),
            house: Set(data.house),
            zip_code: Set(data.zip_code),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        info!("Created address {}", created.id);
        Ok(created)
    }

    pub async fn update_address(&self, current: AddressModel, data: AddressData) -> Result<AddressModel, AppError> {
        let mut am: AddressActive = current.into();
        am.country = Set(data.country);
        am.province = Set(data.province);
        am.city = Set(data.city);
        am.street = Set(data.street);
        am.house = Set(data.house);
        am.zip_code = Set(data.zip_code);
        Ok(am.update(&self.db).await?)
    }

    /// Takes the restaurant at this address (and its staff rows) with it.
    pub async fn delete_address(&self, id: i32) -> Result<(), AppError> {
        let res = Address::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        info!("Deleted address {}", id);
        Ok(())
    }
}
