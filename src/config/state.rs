// Application state module
// Shared per-process state: configuration plus the injected services

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::auth::{CredentialValidator, MockCredentialValidator};
use crate::projects::{MockProjectDirectory, ProjectDirectory};

/// Application state shared by every connection
pub struct AppState {
    pub config: Config,
    /// Login capability, mock-backed
    pub credentials: Arc<dyn CredentialValidator>,
    /// Project listing capability, mock-backed
    pub projects: Arc<dyn ProjectDirectory>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` with the mock services built from config
    pub fn new(config: &Config) -> Self {
        Self::with_services(
            config,
            Arc::new(MockCredentialValidator::new(&config.auth)),
            Arc::new(MockProjectDirectory),
        )
    }

    /// Create `AppState` with explicit service implementations
    pub fn with_services(
        config: &Config,
        credentials: Arc<dyn CredentialValidator>,
        projects: Arc<dyn ProjectDirectory>,
    ) -> Self {
        Self {
            config: config.clone(),
            credentials,
            projects,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
