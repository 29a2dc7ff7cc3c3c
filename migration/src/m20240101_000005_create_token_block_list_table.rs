use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TokenBlockList {
    Table,
    Id,
    Jti,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(TokenBlockList::Table)
                .col(ColumnDef::new(TokenBlockList::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(TokenBlockList::Jti).string_len(36).not_null())
                .col(ColumnDef::new(TokenBlockList::CreatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // lookups are always by jti
        m.create_index(
            Index::create()
                .name("idx_token_block_list_jti")
                .table(TokenBlockList::Table)
                .col(TokenBlockList::Jti)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(TokenBlockList::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
