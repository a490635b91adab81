//! Per-request data loader
//!
//! One loader is created for each request. It memoises reactable loads for
//! the lifetime of the request and carries the operation id stamped on every
//! event the request publishes. Writes must clear the entry they touched so
//! later reads in the same request see the new state.

use dashmap::DashMap;
use tracing::trace;
use uuid::Uuid;

use retro_core::{Reactable, ReactableKind, ReactableStore, RepoResult};

type LoaderKey = (ReactableKind, String);

/// Request-scoped cache of loaded entities
#[derive(Debug)]
pub struct DataLoader {
    operation_id: String,
    reactables: DashMap<LoaderKey, Reactable>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            operation_id: Uuid::new_v4().to_string(),
            reactables: DashMap::new(),
        }
    }

    /// Id shared by every event emitted while handling this request
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Load through the cache. Misses are not cached.
    pub async fn load_reactable(
        &self,
        store: &dyn ReactableStore,
        kind: ReactableKind,
        id: &str,
    ) -> RepoResult<Option<Reactable>> {
        let key = (kind, id.to_string());
        if let Some(hit) = self.reactables.get(&key) {
            trace!(%kind, id, "Loader hit");
            return Ok(Some(hit.value().clone()));
        }

        let loaded = store.load(kind, id).await?;
        if let Some(reactable) = &loaded {
            self.reactables.insert(key, reactable.clone());
        }
        Ok(loaded)
    }

    /// Whether an entry is currently cached
    pub fn is_cached(&self, kind: ReactableKind, id: &str) -> bool {
        self.reactables.contains_key(&(kind, id.to_string()))
    }

    /// Drop a cached entry after a write
    pub fn clear(&self, kind: ReactableKind, id: &str) {
        self.reactables.remove(&(kind, id.to_string()));
    }
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}
