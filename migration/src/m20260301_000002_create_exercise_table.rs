use sea_orm_migration::prelude::*;

/// Creates the `exercise` table for logged workouts.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Exercise {
    Table,
    Id,
    UserId,
    ExerciseType,
    Duration,
    DateCompleted,
    Notes,
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
                    .table(Exercise::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercise::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exercise::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Exercise::ExerciseType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exercise::Duration).integer().not_null())
                    .col(
                        ColumnDef::new(Exercise::DateCompleted)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exercise::Notes).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_user_id")
                            .from(Exercise::Table, Exercise::UserId)
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
                    .name("idx_exercise_user_id")
                    .table(Exercise::Table)
                    .col(Exercise::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercise::Table).to_owned())
            .await
    }
}
