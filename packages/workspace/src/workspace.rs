use crate::broadcast::ChangeChannel;
use crate::error::WorkspaceResult;
use crate::file_store::FileStore;
use crate::host::StorefrontHost;
use shelf_editor::BuilderSession;
use shelf_model::ComponentRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared state for one data directory: the file store, the component
/// registry and the channel publish events go out on.
pub struct Workspace {
    store: Arc<FileStore>,
    registry: Arc<ComponentRegistry>,
    changes: ChangeChannel,
}

impl Workspace {
    pub fn open(data_dir: impl Into<PathBuf>) -> WorkspaceResult<Self> {
        Self::with_registry(data_dir, ComponentRegistry::builtin())
    }

    pub fn with_registry(
        data_dir: impl Into<PathBuf>,
        registry: ComponentRegistry,
    ) -> WorkspaceResult<Self> {
        let store = FileStore::open(data_dir)?;
        info!(data_dir = %store.root().display(), "Opened workspace");
        Ok(Self {
            store: Arc::new(store),
            registry: Arc::new(registry),
            changes: ChangeChannel::new(),
        })
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn changes(&self) -> &ChangeChannel {
        &self.changes
    }

    /// Editing session for `store_id` whose publish events reach
    /// [`changes`](Self::changes)
    pub fn session(&self, store_id: &str, max_history: usize) -> BuilderSession {
        let mut session = BuilderSession::new(store_id, self.registry.clone(), self.store.clone())
            .with_max_history(max_history);
        session.subscribe(Box::new(self.changes.clone()));
        session
    }

    /// [`session`](Self::session) picking up where the last edit left off:
    /// the saved draft if there is one, else the published document
    pub fn resume_session(
        &self,
        store_id: &str,
        max_history: usize,
    ) -> WorkspaceResult<BuilderSession> {
        let mut session = self.session(store_id, max_history);
        let source = session.resume_draft()?;
        debug!(store_id, ?source, "Resumed session");
        Ok(session)
    }

    pub fn host(&self) -> StorefrontHost {
        StorefrontHost::new(self.store.clone(), self.registry.clone())
    }
}
