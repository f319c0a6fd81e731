pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_exercise_table;
mod m20260301_000003_create_wellness_entry_table;
mod m20260301_000004_create_progress_entry_table;
mod m20260302_000001_create_mental_tip_table;
mod m20260302_000002_create_recovery_tip_table;
mod m20260302_000003_create_wellness_resource_table;
mod m20260302_000004_create_exercise_video_table;
mod m20260302_000005_create_tip_table;
mod m20260303_000001_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_exercise_table::Migration),
            Box::new(m20260301_000003_create_wellness_entry_table::Migration),
            Box::new(m20260301_000004_create_progress_entry_table::Migration),
            Box::new(m20260302_000001_create_mental_tip_table::Migration),
            Box::new(m20260302_000002_create_recovery_tip_table::Migration),
            Box::new(m20260302_000003_create_wellness_resource_table::Migration),
            Box::new(m20260302_000004_create_exercise_video_table::Migration),
            Box::new(m20260302_000005_create_tip_table::Migration),
            Box::new(m20260303_000001_seed_catalog::Migration),
        ]
    }
}
