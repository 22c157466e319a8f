use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::verify_password;
use chrono::Utc;
use entity::user::{self, ActiveModel as UserActive, Entity as User, Model as UserModel};
use tracing::{info, warn};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};

impl DatabaseService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Provision a login user. Hash the password before calling.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        let txn = self.db.begin().await?;

        let created = UserActive {
            username: Set(payload.username),
            password_hash: Set(payload.password_hash),
            is_active: Set(true),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!("Created user {} ({})", created.username, created.id);
        Ok(created.id)
    }

    /// Checks a username/password pair. Unknown users, wrong passwords and
    /// deactivated accounts all come back as `Unauthorized`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserModel, AppError> {
        let user = match self.get_user_by_username(username).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };

        let matches = verify_password(password, &user.password_hash).map_err(|e| {
            warn!("Stored hash of user {} is unreadable: {}", user.id, e);
            AppError::Internal("password hash unreadable".into())
        })?;
        if !matches || !user.is_active {
            return Err(AppError::Unauthorized);
        }
        Ok(user)
    }

    pub async fn set_user_active(&self, user_id: i32, active: bool) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.is_active = Set(active);
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
