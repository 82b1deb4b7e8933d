use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use portfolio_core_moderation_contracts::{ModerationService, ModerationState};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ModerationServiceImpl {
    config: ModerationServiceConfig,
    logged_in: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct ModerationServiceConfig {
    pub passphrase: Arc<str>,
}

impl ModerationServiceImpl {
    pub fn new(config: ModerationServiceConfig) -> Self {
        Self {
            config,
            logged_in: Default::default(),
        }
    }
}

impl ModerationService for ModerationServiceImpl {
    fn authenticate(&self, candidate: &str) -> bool {
        if candidate != &*self.config.passphrase {
            debug!("Moderation view denied");
            return false;
        }

        if !self.logged_in.swap(true, Ordering::SeqCst) {
            info!("Switched to moderation view");
        }
        true
    }

    fn logout(&self) {
        if self.logged_in.swap(false, Ordering::SeqCst) {
            info!("Left moderation view");
        }
    }

    fn state(&self) -> ModerationState {
        if self.logged_in.load(Ordering::SeqCst) {
            ModerationState::LoggedIn
        } else {
            ModerationState::LoggedOut
        }
    }
}
