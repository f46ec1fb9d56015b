// Application state module
// Per-process state shared by every connection

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::upstream::{self, UpstreamClient};

/// Application state
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    /// Notified once on SIGINT/SIGTERM; the accept loop stops on it
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> upstream::Result<Self> {
        Ok(Self {
            config: config.clone(),
            upstream: UpstreamClient::new(&config.upstream)?,
            shutdown: Arc::new(Notify::new()),
        })
    }
}
