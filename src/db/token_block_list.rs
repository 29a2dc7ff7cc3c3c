use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::token_block_list::{ActiveModel as BlockActive, Entity as TokenBlockList};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn token_is_revoked(&self, jti: &str) -> Result<bool, AppError> {
        Ok(TokenBlockList::find()
            .filter(entity::token_block_list::Column::Jti.eq(jti))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Record a jti as revoked (logout). Revoking a jti twice is a no-op;
    /// the block list's only contract is membership.
    pub async fn revoke_token(&self, jti: &str) -> Result<(), AppError> {
        if jti.is_empty() || jti.len() > 36 {
            return Err(AppError::Validation("jti must be 1..=36 chars".into()));
        }
        if self.token_is_revoked(jti).await? {
            return Ok(());
        }

        TokenBlockList::insert(BlockActive {
            id: Set(Uuid::new_v4()),
            jti: Set(jti.to_owned()),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(())
    }
}
