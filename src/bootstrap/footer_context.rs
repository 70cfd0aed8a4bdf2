use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::document_endpoint::DocumentEndpoint;
use crate::application::ports::version_store::VersionStore;
use crate::application::use_cases::versions::restore_version::RestoreVersion;
use crate::bootstrap::config::Config;
use crate::infrastructure::cache::memory_store::MemoryVersionStore;
use crate::infrastructure::http::document_api_reqwest::ReqwestDocumentApi;
use crate::presentation::viewport::Viewport;

/// Wires the store and endpoint adapters the footer is built from. Both stay
/// swappable for tests through [`FooterContext::new`].
#[derive(Clone)]
pub struct FooterContext {
    pub cfg: Config,
    store: Arc<dyn VersionStore>,
    endpoint: Arc<dyn DocumentEndpoint>,
}

impl FooterContext {
    pub fn new(
        cfg: Config,
        store: Arc<dyn VersionStore>,
        endpoint: Arc<dyn DocumentEndpoint>,
    ) -> Self {
        Self {
            cfg,
            store,
            endpoint,
        }
    }

    pub fn from_config(cfg: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build http client: {e}"))?;
        let endpoint = Arc::new(ReqwestDocumentApi::with_client(
            client,
            cfg.api_base_url.clone(),
        ));
        Ok(Self::new(cfg, Arc::new(MemoryVersionStore::new()), endpoint))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_config(Config::from_env()?)
    }

    pub fn store(&self) -> Arc<dyn VersionStore> {
        self.store.clone()
    }

    pub fn endpoint(&self) -> Arc<dyn DocumentEndpoint> {
        self.endpoint.clone()
    }

    pub fn restore_version(&self) -> RestoreVersion {
        RestoreVersion::new(self.store.clone(), self.endpoint.clone())
    }

    pub fn viewport(&self, width: f32) -> Viewport {
        Viewport::with_breakpoint(width, self.cfg.compact_breakpoint)
    }
}
