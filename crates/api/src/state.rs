use std::sync::Arc;

use tokio::sync::RwLock;

use detailworks_cms::CmsClient;
use detailworks_core::rate_limit::RateLimiter;
use detailworks_core::store::ContentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The held content store. Admin imports mutate it in memory; the
    /// on-disk document is never written by the server.
    pub store: Arc<RwLock<ContentStore>>,
    /// Immutable snapshot of the store as loaded at startup. The new-only
    /// import preview filters against this, not the held store.
    pub original: Arc<ContentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Contact endpoint rate limiter.
    pub limiter: Arc<RateLimiter>,
    /// External blog CMS client.
    pub cms: Arc<CmsClient>,
}

impl AppState {
    /// Build state from a loaded content store and configuration. The rate
    /// limiter and CMS client are derived from the config.
    pub fn new(store: ContentStore, config: ServerConfig) -> Self {
        let limiter = RateLimiter::in_memory(
            config.contact_rate_limit,
            config.contact_rate_window_secs,
        );
        let cms = CmsClient::new(config.cms_base_url.clone());

        Self {
            original: Arc::new(store.clone()),
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            cms: Arc::new(cms),
        }
    }
}
