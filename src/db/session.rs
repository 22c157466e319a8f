use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::new_session_key;
use chrono::{Duration, Utc};
use entity::session::{self, ActiveModel as SessionActive, Entity as Session};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::debug;

impl DatabaseService {
    /// Opens a session for the user and returns its key. Expired sessions
    /// of the same user are dropped on the way.
    pub async fn create_session(&self, user_id: i32, ttl_secs: i64) -> Result<String, AppError> {
        let now = Utc::now();

        let purged = Session::delete_many()
            .filter(session::Column::UserId.eq(user_id))
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await?;
        if purged.rows_affected > 0 {
            debug!("Purged {} expired sessions of user {}", purged.rows_affected, user_id);
        }

        let key = new_session_key();
        SessionActive {
            key: Set(key.clone()),
            user_id: Set(user_id),
            expires_at: Set(now + Duration::seconds(ttl_secs)),
            created_at: Set(now),
        }
        .insert(&self.db)
        .await?;
        Ok(key)
    }

    /// User behind a live session; `Forbidden` for unknown, expired or
    /// inactive ones.
    pub async fn authenticate_session(&self, key: &str) -> Result<UserModel, AppError> {
        let found = Session::find_by_id(key.to_string())
            .find_also_related(User)
            .one(&self.db)
            .await?;

        match found {
            Some((session, Some(user))) if session.expires_at > Utc::now() && user.is_active => Ok(user),
            _ => Err(AppError::Forbidden),
        }
    }

    pub async fn delete_session(&self, key: &str) -> Result<(), AppError> {
        Session::delete_by_id(key.to_string()).exec(&self.db).await?;
        Ok(())
    }
}
