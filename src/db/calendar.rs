use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::calendar::{ActiveModel as CalendarActive, Entity as Calendar, Model as CalendarModel};
use entity::calendar_events::{ActiveModel as CalendarEventActive, Entity as CalendarEvents};
use entity::event::{Entity as Event, Model as EventModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn create_calendar(&self, user_id: Uuid, title: String) -> Result<Uuid, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        // owner must exist, surfaced as a typed error rather than an FK violation
        self.get_user_by_id(&user_id).await?;

        let cid = Uuid::new_v4();
        let now = Utc::now();
        Calendar::insert(CalendarActive {
            id: Set(cid),
            title: Set(title),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(cid)
    }

    pub async fn get_calendar(&self, id: Uuid) -> Result<CalendarModel, AppError> {
        Ok(Calendar::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Calendar does not exist".into()))?)
    }

    pub async fn list_calendars_for_user(&self, user_id: Uuid) -> Result<Vec<CalendarModel>, AppError> {
        Ok(Calendar::find()
            .filter(entity::calendar::Column::UserId.eq(user_id))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn calendar_has_event(&self, calendar_id: Uuid, event_id: Uuid) -> Result<bool, AppError> {
        Ok(CalendarEvents::find_by_id((calendar_id, event_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Pin an event onto a calendar. PK(calendar_id, event_id) keeps the
    /// pair unique; the exists check turns a replay into `AlreadyExists`.
    pub async fn add_event_to_calendar(&self, calendar_id: Uuid, event_id: Uuid) -> Result<(), AppError> {
        self.get_calendar(calendar_id).await?;
        self.get_event(event_id).await?;
        if self.calendar_has_event(calendar_id, event_id).await? {
            return Err(AppError::AlreadyExists);
        }

        CalendarEvents::insert(CalendarEventActive {
            calendar_id: Set(calendar_id),
            event_id: Set(event_id),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn remove_event_from_calendar(&self, calendar_id: Uuid, event_id: Uuid) -> Result<(), AppError> {
        let row = CalendarEvents::find_by_id((calendar_id, event_id))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Event is not on this calendar".into()))?;
        row.delete(&self.database_connection).await?;
        Ok(())
    }

    pub async fn list_events_on_calendar(&self, calendar_id: Uuid) -> Result<Vec<EventModel>, AppError> {
        let links = CalendarEvents::find()
            .filter(entity::calendar_events::Column::CalendarId.eq(calendar_id))
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

    pub async fn list_calendars_for_event(&self, event_id: Uuid) -> Result<Vec<CalendarModel>, AppError> {
        let links = CalendarEvents::find()
            .filter(entity::calendar_events::Column::EventId.eq(event_id))
            .all(&self.database_connection)
            .await?;
        let calendar_ids: Vec<Uuid> = links.into_iter().map(|l| l.calendar_id).collect();
        if calendar_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Calendar::find()
            .filter(entity::calendar::Column::Id.is_in(calendar_ids))
            .all(&self.database_connection)
            .await?)
    }
}
