use std::collections::HashMap;

use crate::db::database_service::{unique_violation, DatabaseService};
use crate::types::error::AppError;
use crate::types::restaurant::{RRestaurant, RestaurantData, RestaurantRecord, NAME_TAKEN};
use crate::utils::validators::invalid_pk;
use entity::address::{Entity as Address, Model as AddressModel};
use entity::employee::{self, Entity as Employee};
use entity::person::{Entity as Person, Model as PersonModel};
use entity::restaurant::{self, ActiveModel as RestaurantActive, Entity as Restaurant, Model as RestaurantModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

impl DatabaseService {
    /// All restaurants by name, address and staff loaded in two extra queries.
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantRecord>, AppError> {
        let rows = Restaurant::find()
            .find_also_related(Address)
            .order_by_asc(restaurant::Column::Name)
            .all(&self.db)
            .await?;
        self.attach_staff(rows).await
    }

    /// One restaurant picked uniformly at random; `NotFound` on an empty table.
    pub async fn random_restaurant(&self) -> Result<RestaurantRecord, AppError> {
        let row = Restaurant::find()
            .find_also_related(Address)
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("No restaurants".into()))?;
        self.single_record(row).await
    }

    pub async fn get_restaurant_by_name(&self, name: &str) -> Result<RestaurantModel, AppError> {
        Ok(Restaurant::find()
            .filter(restaurant::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Restaurant does not exist".into()))?)
    }

    pub async fn get_restaurant_record(&self, name: &str) -> Result<RestaurantRecord, AppError> {
        let restaurant = self.get_restaurant_by_name(name).await?;
        self.restaurant_record(restaurant.id).await
    }

    pub async fn restaurant_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Restaurant::find_by_id(id).one(&self.db).await?.is_some())
    }

    pub async fn count_restaurants(&self) -> Result<u64, AppError> {
        Ok(Restaurant::find().count(&self.db).await?)
    }

    pub async fn create_restaurant(&self, payload: RRestaurant) -> Result<RestaurantRecord, AppError> {
        let data = self.validate_restaurant(&payload, None).await?;

        let created = RestaurantActive {
            name: Set(data.name),
            address_id: Set(data.address_id),
            phone: Set(data.phone),
            cuisine: Set(data.cuisine),
            rating: Set(data.rating),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_violation(e, "name", NAME_TAKEN))?;

        info!("Created restaurant {} ({})", created.name, created.id);
        self.restaurant_record(created.id).await
    }

    /// Full replacement of `current` with the payload.
    pub async fn update_restaurant(
        &self,
        current: RestaurantModel,
        payload: RRestaurant,
    ) -> Result<RestaurantRecord, AppError> {
        let data = self.validate_restaurant(&payload, Some(current.id)).await?;

        let mut am: RestaurantActive = current.into();
        am.name = Set(data.name);
        am.address_id = Set(data.address_id);
        am.phone = Set(data.phone);
        am.cuisine = Set(data.cuisine);
        am.rating = Set(data.rating);
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| unique_violation(e, "name", NAME_TAKEN))?;

        self.restaurant_record(updated.id).await
    }

    /// Staff rows go with the restaurant (FK cascade).
    pub async fn delete_restaurant(&self, name: &str) -> Result<(), AppError> {
        let res = Restaurant::delete_many()
            .filter(restaurant::Column::Name.eq(name))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        info!("Deleted restaurant {}", name);
        Ok(())
    }

    /// Field rules plus the store-backed ones: unique name (ignoring the
    /// row being updated) and an existing address.
    async fn validate_restaurant(
        &self,
        payload: &RRestaurant,
        current_id: Option<i32>,
    ) -> Result<RestaurantData, AppError> {
        let (fields, mut errors) = payload.read();

        if let (Some(name), false) = (&fields.name, errors.has("name")) {
            let mut same_name = Restaurant::find().filter(restaurant::Column::Name.eq(name.as_str()));
            if let Some(id) = current_id {
                same_name = same_name.filter(restaurant::Column::Id.ne(id));
            }
            if same_name.count(&self.db).await? > 0 {
                errors.add("name", NAME_TAKEN);
            }
        }

        if let (Some(address_id), false) = (fields.address, errors.has("address")) {
            let exists = match i32::try_from(address_id) {
                Ok(id) => self.address_exists(id).await?,
                Err(_) => false,
            };
            if !exists {
                errors.add("address", invalid_pk(address_id));
            }
        }

        errors.into_result()?;
        fields
            .into_data()
            .ok_or_else(|| AppError::Internal("restaurant payload incomplete after validation".into()))
    }

    async fn restaurant_record(&self, id: i32) -> Result<RestaurantRecord, AppError> {
        let row = Restaurant::find_by_id(id)
            .find_also_related(Address)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Restaurant does not exist".into()))?;
        self.single_record(row).await
    }

    async fn single_record(&self, row: (RestaurantModel, Option<AddressModel>)) -> Result<RestaurantRecord, AppError> {
        self.attach_staff(vec![row])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("restaurant record lost while loading staff".into()))
    }

    /// Loads the people employed at each restaurant in one query, hire order.
    async fn attach_staff(
        &self,
        rows: Vec<(RestaurantModel, Option<AddressModel>)>,
    ) -> Result<Vec<RestaurantRecord>, AppError> {
        let ids: Vec<i32> = rows.iter().map(|(r, _)| r.id).collect();
        let mut staff: HashMap<i32, Vec<PersonModel>> = HashMap::new();

        if !ids.is_empty() {
            let links = Employee::find()
                .filter(employee::Column::RestaurantId.is_in(ids))
                .find_also_related(Person)
                .order_by_asc(employee::Column::Id)
                .all(&self.db)
                .await?;
            for (link, person) in links {
                if let Some(person) = person {
                    staff.entry(link.restaurant_id).or_default().push(person);
                }
            }
        }

        Ok(rows
            .into_iter()
            .map(|(restaurant, address)| RestaurantRecord {
                staff: staff.remove(&restaurant.id).unwrap_or_default(),
                restaurant,
                address,
            })
            .collect())
    }
}
