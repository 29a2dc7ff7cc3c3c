use crate::db::service::DbService;
use crate::types::{error::AppError, user::NewUser};
use crate::utils::password;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};
use tracing::debug;
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration: hash the password, store the hash, never the plaintext.
    /// The unique index on username is the backstop; the exists check gives
    /// callers a typed error instead of a constraint violation.
    pub async fn create_user(&self, payload: NewUser) -> Result<Uuid, AppError> {
        for (field, value) in [
            ("name", &payload.name),
            ("surname", &payload.surname),
            ("username", &payload.username),
            ("password", &payload.password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be empty")));
            }
        }
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }

        let hash = password::hash(&payload.password)
            .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;
        let uid = Uuid::new_v4();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            surname: Set(payload.surname),
            username: Set(payload.username),
            password_hash: Set(hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }

    /// Unknown username and wrong password both come back as `Unauthorized`;
    /// callers cannot tell the two apart.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserModel, AppError> {
        let user = match self.get_user_by_username(username).await {
            Ok(user) => user,
            Err(AppError::NotFound) => {
                debug!(username, "authentication failed: unknown username");
                return Err(AppError::Unauthorized);
            }
            Err(e) => return Err(e),
        };

        let valid = password::verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("stored hash unreadable: {e}")))?;
        if !valid {
            debug!(username, "authentication failed: bad password");
            return Err(AppError::Unauthorized);
        }
        Ok(user)
    }
}
