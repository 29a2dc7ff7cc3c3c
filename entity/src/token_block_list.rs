use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Revoked JWT identifiers. Rows are written on logout and only ever read
/// back for membership checks; retention/pruning is an external concern.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "token_block_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub jti: String, // at most 36 chars, a uuid string
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
