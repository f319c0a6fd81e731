pub mod activity_service;
pub mod admin_service;
pub mod catalog_service;
pub mod identity_service;
pub mod wellness_service;

pub use activity_service::ActivityService;
pub use admin_service::AdminService;
pub use catalog_service::CatalogService;
pub use identity_service::IdentityService;
pub use wellness_service::WellnessService;
