use sea_orm_migration::prelude::*;

/// Creates the `wellness_resource` table (articles, breathing exercises, meditations).
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum WellnessResource {
    Table,
    Id,
    Title,
    Content,
    ResourceType,
    MoodCategory,
    IsActive,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WellnessResource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WellnessResource::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WellnessResource::Title)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WellnessResource::Content).text().not_null())
                    .col(
                        ColumnDef::new(WellnessResource::ResourceType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WellnessResource::MoodCategory)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WellnessResource::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(WellnessResource::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WellnessResource::Table).to_owned())
            .await
    }
}
