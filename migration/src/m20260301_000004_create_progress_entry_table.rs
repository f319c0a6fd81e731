use sea_orm_migration::prelude::*;

/// Creates the `progress_entry` table.
///
/// `exercise_id` has no foreign key. Entries outlive an admin deleting the exercise they reference.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ProgressEntry {
    Table,
    Id,
    UserId,
    ExerciseId,
    PerformanceRating,
    EnergyLevel,
    DifficultyFelt,
    Notes,
    DateRecorded,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressEntry::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressEntry::UserId).integer().not_null())
                    .col(ColumnDef::new(ProgressEntry::ExerciseId).integer().not_null())
                    .col(
                        ColumnDef::new(ProgressEntry::PerformanceRating)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProgressEntry::EnergyLevel).integer().not_null())
                    .col(
                        ColumnDef::new(ProgressEntry::DifficultyFelt)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProgressEntry::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProgressEntry::DateRecorded)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_entry_user_id")
                            .from(ProgressEntry::Table, ProgressEntry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_progress_entry_user_id")
                    .table(ProgressEntry::Table)
                    .col(ProgressEntry::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressEntry::Table).to_owned())
            .await
    }
}
