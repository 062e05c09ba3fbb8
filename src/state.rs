//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the configuration loaded at startup and the transport used for
//! every upstream call. Nothing in here is mutated after startup; per-request
//! auth lives in `AuthContext`, not here.

use std::sync::Arc;

use crate::api::ApiTransport;
use crate::config::ConsoleConfig;
use crate::session::CookiePolicy;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConsoleConfig>,
    pub api: Arc<dyn ApiTransport>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ConsoleConfig, api: Arc<dyn ApiTransport>) -> Self {
        Self { config: Arc::new(config), api }
    }

    #[must_use]
    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy { secure: self.config.cookie_secure, max_age_secs: self.config.session_max_age_secs }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
