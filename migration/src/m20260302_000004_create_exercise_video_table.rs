use sea_orm_migration::prelude::*;

/// Creates the `exercise_video` table. Videos are matched to logged exercises by `exercise_type`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ExerciseVideo {
    Table,
    Id,
    ExerciseType,
    Title,
    VideoUrl,
    Description,
    DifficultyLevel,
    Duration,
    IsActive,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExerciseVideo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExerciseVideo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExerciseVideo::ExerciseType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExerciseVideo::Title).string_len(150).not_null())
                    .col(
                        ColumnDef::new(ExerciseVideo::VideoUrl)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExerciseVideo::Description).text().null())
                    .col(
                        ColumnDef::new(ExerciseVideo::DifficultyLevel)
                            .string_len(20)
                            .not_null()
                            .default("Beginner"),
                    )
                    .col(ColumnDef::new(ExerciseVideo::Duration).integer().null())
                    .col(
                        ColumnDef::new(ExerciseVideo::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ExerciseVideo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exercise_video_exercise_type")
                    .table(ExerciseVideo::Table)
                    .col(ExerciseVideo::ExerciseType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExerciseVideo::Table).to_owned())
            .await
    }
}
