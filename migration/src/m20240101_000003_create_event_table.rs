use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    Title,
    Date,
    Owner,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Event::Table)
                .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Event::Title).string_len(100).not_null())
                .col(ColumnDef::new(Event::Date).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Event::Owner).uuid().not_null())
                .col(ColumnDef::new(Event::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Event::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_event_owner")
                        .from(Event::Table, Event::Owner)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_event_owner")
                .table(Event::Table)
                .col(Event::Owner)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Event::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
