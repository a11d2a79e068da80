use std::sync::Arc;

use crate::config::Config;
use crate::profile::cosmic::DailyRng;
use crate::storage::{IdGenerator, ProfileSessionStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ProfileSessionStore,
    /// Element-bonus roller. Default: `SeededDailyRng`, a pure function of
    /// (date, sign); tests substitute fixed rolls.
    pub rng: Arc<dyn DailyRng>,
    /// Session id minting seam, swappable in tests.
    pub ids: Arc<dyn IdGenerator>,
    pub config: Config,
}
