// Application state module
// Owns everything a request handler may read or append to

use std::time::Instant;

use super::types::Config;
use crate::contact::SubmissionStore;
use crate::content::Catalog;
use crate::logger::Logger;

/// Application state
///
/// Built once at startup and shared by every connection task. Handlers get
/// the logger and the submission store from here instead of from globals.
pub struct AppState {
    pub config: Config,
    pub logger: Logger,
    pub catalog: Catalog,
    pub submissions: SubmissionStore,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, logger: Logger) -> Self {
        Self {
            config,
            logger,
            catalog: Catalog::build(),
            submissions: SubmissionStore::new(),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
