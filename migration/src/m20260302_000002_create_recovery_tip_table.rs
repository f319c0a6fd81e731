use sea_orm_migration::prelude::*;

/// Creates the `recovery_tip` table. `recovery_stage` holds `Early`, `Mid` or `Late`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RecoveryTip {
    Table,
    Id,
    Title,
    Content,
    RecoveryStage,
    IsActive,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecoveryTip::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecoveryTip::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecoveryTip::Title).string_len(100).not_null())
                    .col(ColumnDef::new(RecoveryTip::Content).text().not_null())
                    .col(
                        ColumnDef::new(RecoveryTip::RecoveryStage)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecoveryTip::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(RecoveryTip::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecoveryTip::Table).to_owned())
            .await
    }
}
