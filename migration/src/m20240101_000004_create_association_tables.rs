use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Calendar {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EventUsers {
    Table,
    EventId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CalendarEvents {
    Table,
    CalendarId,
    EventId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // event membership, PK(event_id, user_id) keeps pairs unique
        m.create_table(
            Table::create()
                .table(EventUsers::Table)
                .col(ColumnDef::new(EventUsers::EventId).uuid().not_null())
                .col(ColumnDef::new(EventUsers::UserId).uuid().not_null())
                .col(ColumnDef::new(EventUsers::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_event_users")
                        .col(EventUsers::EventId)
                        .col(EventUsers::UserId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_event_users_event")
                        .from(EventUsers::Table, EventUsers::EventId)
                        .to(Event::Table, Event::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_event_users_user")
                        .from(EventUsers::Table, EventUsers::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_event_users_user")
                .table(EventUsers::Table)
                .col(EventUsers::UserId)
                .to_owned(),
        ).await?;

        // calendar placement, PK(calendar_id, event_id) keeps pairs unique
        m.create_table(
            Table::create()
                .table(CalendarEvents::Table)
                .col(ColumnDef::new(CalendarEvents::CalendarId).uuid().not_null())
                .col(ColumnDef::new(CalendarEvents::EventId).uuid().not_null())
                .col(ColumnDef::new(CalendarEvents::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_calendar_events")
                        .col(CalendarEvents::CalendarId)
                        .col(CalendarEvents::EventId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_calendar_events_calendar")
                        .from(CalendarEvents::Table, CalendarEvents::CalendarId)
                        .to(Calendar::Table, Calendar::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_calendar_events_event")
                        .from(CalendarEvents::Table, CalendarEvents::EventId)
                        .to(Event::Table, Event::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_calendar_events_event")
                .table(CalendarEvents::Table)
                .col(CalendarEvents::EventId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(CalendarEvents::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(EventUsers::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
