use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::event::{ActiveModel as EventActive, Entity as Event, Model as EventModel};
use entity::event_users::{ActiveModel as EventUserActive, Entity as EventUsers};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn create_event(
        &self,
        owner: Uuid,
        title: String,
        date: DateTime<Utc>,
    ) -> Result<Uuid, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        // owner must exist, surfaced as a typed error rather than an FK violation
        self.get_user_by_id(&owner).await?;

        let eid = Uuid::new_v4();
        let now = Utc::now();
        Event::insert(EventActive {
            id: Set(eid),
            title: Set(title),
            date: Set(date),
            owner: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(eid)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<EventModel, AppError> {
        Ok(Event::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Event does not exist".into()))?)
    }

    pub async fn list_events_for_owner(&self, owner: Uuid) -> Result<Vec<EventModel>, AppError> {
        Ok(Event::find()
            .filter(entity::event::Column::Owner.eq(owner))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn event_has_member(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        Ok(EventUsers::find_by_id((event_id, user_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Membership is separate from ownership; the owner only appears in
    /// event_users if explicitly added like anyone else.
    pub async fn add_event_member(&self, event_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.get_event(event_id).await?;
        self.get_user_by_id(&user_id).await?;
        if self.event_has_member(event_id, user_id).await? {
            return Err(AppError::AlreadyExists);
        }

        EventUsers::insert(EventUserActive {
            event_id: Set(event_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn remove_event_member(&self, event_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let row = EventUsers::find_by_id((event_id, user_id))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User is not a member of this event".into()))?;
        row.delete(&self.database_connection).await?;
        Ok(())
    }

    pub async fn list_event_members(&self, event_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let links = EventUsers::find()
            .filter(entity::event_users::Column::EventId.eq(event_id))
            .all(&self.database_connection)
            .await?;
        let user_ids: Vec<Uuid> = links.into_iter().map(|l| l.user_id).collect();
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_events_for_member(&self, user_id: Uuid) -> Result<Vec<EventModel>, AppError> {
        let links = EventUsers::find()
            .filter(entity::event_users::Column::UserId.eq(user_id))
            .all(&self.database_connection)
            .await?;
        let event_ids: Vec<Uuid> = links.into_iter().map(|l| l.event_id).collect();
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .all(&self.database_connection)
            .await?)
    }
}
