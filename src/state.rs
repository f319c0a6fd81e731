use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::services::{ActivityService, AdminService, IdentityService, WellnessService};
use crate::sessions::SessionStore;

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.db.clone())
    }

    #[must_use]
    pub fn activity(&self) -> ActivityService {
        ActivityService::new(self.db.clone())
    }

    #[must_use]
    pub fn wellness(&self) -> WellnessService {
        WellnessService::new(self.db.clone())
    }

    #[must_use]
    pub fn admin(&self) -> AdminService {
        AdminService::new(self.db.clone())
    }
}
