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
    Title,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Calendar::Table)
                .col(ColumnDef::new(Calendar::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Calendar::Title).string_len(100).not_null())
                .col(ColumnDef::new(Calendar::UserId).uuid().not_null())
                .col(ColumnDef::new(Calendar::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Calendar::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_calendar_user")
                        .from(Calendar::Table, Calendar::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_calendar_user")
                .table(Calendar::Table)
                .col(Calendar::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Calendar::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
