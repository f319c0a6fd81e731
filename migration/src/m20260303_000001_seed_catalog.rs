use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

/// Seeds the starter content catalog: monthly mental tips, staged recovery tips, exercise
/// videos and wellness resources.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[rustfmt::skip]
const MENTAL_TIPS: &[(i32, &str)] = &[
    (0,  "Welcome to motherhood! It's normal to feel overwhelmed. Take it one day at a time."),
    (1,  "Your body is recovering. Focus on rest, nutrition, and gentle movement when you feel ready."),
    (2,  "Sleep deprivation is tough. Rest when baby rests and ask for help with household tasks."),
    (3,  "You're adjusting to new routines. Be patient with yourself as you find your rhythm."),
    (6,  "You may be returning to work or establishing new routines. Self-care remains important."),
    (12, "Your baby is becoming more active. Make time for activities that bring you joy."),
];

/// `(stage, title, content)`
#[rustfmt::skip]
const RECOVERY_TIPS: &[(&str, &str, &str)] = &[
    ("Early", "Gentle Recovery",       "Focus on healing and rest. Listen to your body's needs."),
    ("Early", "Nutrition Focus",       "Eat nutrient-dense foods to support healing and energy."),
    ("Mid",   "Building Strength",     "Gradually increase activity levels as your body allows."),
    ("Mid",   "Sleep Strategies",      "Develop healthy sleep habits for you and your family."),
    ("Late",  "Maintaining Wellness",  "Focus on long-term health and wellness practices."),
    ("Late",  "Active Lifestyle",      "Incorporate regular exercise that you enjoy."),
];

struct Video {
    exercise_type: &'static str,
    title: &'static str,
    url: &'static str,
    description: &'static str,
    level: &'static str,
    minutes: i32,
}

#[rustfmt::skip]
const VIDEOS: &[Video] = &[
    Video { exercise_type: "Prenatal Yoga",          title: "Gentle Prenatal Flow",     url: "https://example.com/prenatal-yoga",   description: "Gentle yoga for expecting mothers",  level: "Beginner",     minutes: 20 },
    Video { exercise_type: "Postnatal Yoga",         title: "Postpartum Recovery Yoga", url: "https://example.com/postpartum-yoga", description: "Restorative yoga for new mothers",   level: "Beginner",     minutes: 15 },
    Video { exercise_type: "Walking",                title: "Walking for New Mothers",  url: "https://example.com/walking-guide",   description: "Tips for walking with your baby",    level: "Beginner",     minutes: 10 },
    Video { exercise_type: "Pilates",                title: "Core Recovery Pilates",    url: "https://example.com/core-pilates",    description: "Gentle core strengthening",          level: "Intermediate", minutes: 25 },
    Video { exercise_type: "Pelvic Floor Exercises", title: "Pelvic Floor Basics",      url: "https://example.com/pelvic-floor",    description: "Essential pelvic floor exercises",   level: "Beginner",     minutes: 10 },
];

/// `(title, content, resource_type, mood_category)`
#[rustfmt::skip]
const RESOURCES: &[(&str, &str, &str, &str)] = &[
    ("Breathing Exercise", "Take 5 minutes to focus on deep breathing...",   "Exercise",   "Anxiety"),
    ("Self-Care Article",  "Simple ways to care for yourself each day...",   "Article",    "General"),
    ("Meditation Guide",   "Brief meditation practices for busy mothers...", "Meditation", "Stress"),
];

/// Creation timestamp expression. `SQLite` stores timestamps as RFC 3339 text.
fn now_expr(backend: DatabaseBackend) -> SimpleExpr {
    if backend == DatabaseBackend::Sqlite {
        Expr::cust("strftime('%Y-%m-%dT%H:%M:%SZ', 'now')")
    } else {
        Expr::current_timestamp().into()
    }
}

fn build_err(err: impl std::fmt::Display) -> DbErr {
    DbErr::Custom(format!("Failed to build seed statement: {err}"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        for (month, content) in MENTAL_TIPS {
            let mut insert = Query::insert();
            insert
                .into_table(MentalTip::Table)
                .columns([
                    MentalTip::MonthRelation,
                    MentalTip::TipContent,
                    MentalTip::DateCreated,
                ])
                .values([(*month).into(), (*content).into(), now_expr(backend)])
                .map_err(build_err)?;
            manager.exec_stmt(insert).await?;
        }

        for (stage, title, content) in RECOVERY_TIPS {
            let mut insert = Query::insert();
            insert
                .into_table(RecoveryTip::Table)
                .columns([
                    RecoveryTip::RecoveryStage,
                    RecoveryTip::Title,
                    RecoveryTip::Content,
                    RecoveryTip::CreatedAt,
                ])
                .values([
                    (*stage).into(),
                    (*title).into(),
                    (*content).into(),
                    now_expr(backend),
                ])
                .map_err(build_err)?;
            manager.exec_stmt(insert).await?;
        }

        for video in VIDEOS {
            let mut insert = Query::insert();
            insert
                .into_table(ExerciseVideo::Table)
                .columns([
                    ExerciseVideo::ExerciseType,
                    ExerciseVideo::Title,
                    ExerciseVideo::VideoUrl,
                    ExerciseVideo::Description,
                    ExerciseVideo::DifficultyLevel,
                    ExerciseVideo::Duration,
                    ExerciseVideo::CreatedAt,
                ])
                .values([
                    video.exercise_type.into(),
                    video.title.into(),
                    video.url.into(),
                    video.description.into(),
                    video.level.into(),
                    video.minutes.into(),
                    now_expr(backend),
                ])
                .map_err(build_err)?;
            manager.exec_stmt(insert).await?;
        }

        for (title, content, resource_type, mood_category) in RESOURCES {
            let mut insert = Query::insert();
            insert
                .into_table(WellnessResource::Table)
                .columns([
                    WellnessResource::Title,
                    WellnessResource::Content,
                    WellnessResource::ResourceType,
                    WellnessResource::MoodCategory,
                    WellnessResource::CreatedAt,
                ])
                .values([
                    (*title).into(),
                    (*content).into(),
                    (*resource_type).into(),
                    (*mood_category).into(),
                    now_expr(backend),
                ])
                .map_err(build_err)?;
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(MentalTip::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(RecoveryTip::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(ExerciseVideo::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(WellnessResource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MentalTip {
    Table,
    MonthRelation,
    TipContent,
    DateCreated,
}

#[derive(DeriveIden)]
enum RecoveryTip {
    Table,
    Title,
    Content,
    RecoveryStage,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExerciseVideo {
    Table,
    ExerciseType,
    Title,
    VideoUrl,
    Description,
    DifficultyLevel,
    Duration,
    CreatedAt,
}

#[derive(DeriveIden)]
enum WellnessResource {
    Table,
    Title,
    Content,
    ResourceType,
    MoodCategory,
    CreatedAt,
}
