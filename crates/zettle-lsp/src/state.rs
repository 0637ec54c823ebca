use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::lsp_types::Url;
use zettle_core::vfs::FileSystem;
use zettle_core::{CompletionEngine, ZettleConfig};

/// Global state for LSP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// Current settings; `didChangeConfiguration` replaces them wholesale
    pub config: Arc<RwLock<ZettleConfig>>,
    /// Full text of open documents
    pub document_cache: Arc<RwLock<HashMap<Url, String>>>,
    pub engine: Arc<CompletionEngine>,
    pub fs: Arc<dyn FileSystem>,
}

impl GlobalState {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config: Arc::new(RwLock::new(ZettleConfig::default())),
            document_cache: Arc::new(RwLock::new(HashMap::new())),
            engine: Arc::new(CompletionEngine::new(fs.clone())),
            fs,
        }
    }

    /// Snapshot of the settings, so no lock is held across awaits.
    pub async fn config(&self) -> ZettleConfig {
        self.config.read().await.clone()
    }
}
