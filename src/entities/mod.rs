//! `SeaORM` entities for accounts, the activity log and the content catalog.

pub mod exercise;
pub mod exercise_video;
pub mod mental_tip;
pub mod progress_entry;
pub mod recovery_stage;
pub mod recovery_tip;
pub mod tip;
pub mod user;
pub mod wellness_entry;
pub mod wellness_resource;

pub use recovery_stage::RecoveryStage;
