use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tip::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tip::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tip::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Tip::Content).text().not_null())
                    .col(ColumnDef::new(Tip::Category).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Tip::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tip::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tip {
    Table,
    Id,
    Title,
    Content,
    Category,
    IsActive,
    CreatedAt,
}
