use sea_orm_migration::prelude::*;

/// Creates the `wellness_entry` table for mood, stress and sleep check-ins.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum WellnessEntry {
    Table,
    Id,
    UserId,
    MoodRating,
    StressLevel,
    SleepHours,
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
                    .table(WellnessEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WellnessEntry::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WellnessEntry::UserId).integer().not_null())
                    .col(ColumnDef::new(WellnessEntry::MoodRating).integer().not_null())
                    .col(ColumnDef::new(WellnessEntry::StressLevel).integer().not_null())
                    .col(ColumnDef::new(WellnessEntry::SleepHours).double().null())
                    .col(
                        ColumnDef::new(WellnessEntry::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(WellnessEntry::DateRecorded)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wellness_entry_user_id")
                            .from(WellnessEntry::Table, WellnessEntry::UserId)
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
                    .name("idx_wellness_entry_user_id")
                    .table(WellnessEntry::Table)
                    .col(WellnessEntry::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WellnessEntry::Table).to_owned())
            .await
    }
}
