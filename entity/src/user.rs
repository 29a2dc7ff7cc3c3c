use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub username: String, // unique, enforced by uk_user_username
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar::Relation::User.def().rev() // User has_many Calendars via calendar.user_id
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event::Relation::Owner.def().rev() // User has_many Events via event.owner
    }
}

impl ActiveModelBehavior for ActiveModel {}
