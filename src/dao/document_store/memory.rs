use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;

use crate::dao::{
    document_store::DocumentBackend,
    storage::{StorageError, StorageResult},
};
use crate::state::tournament::Document;

/// In-memory backend used by tests.
///
/// The document round-trips through the same JSON serialization as the
/// file store, so anything that would not survive persistence fails here
/// too.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemoryStore {
    /// Empty store: the first load reports no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized payload, if any. Handy for asserting on the format.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().expect("memory store lock").clone()
    }
}

impl DocumentBackend for InMemoryStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Document>>> {
        let slot = Arc::clone(&self.slot);
        Box::pin(async move {
            let guard = slot.lock().expect("memory store lock");
            match guard.as_deref() {
                Some(payload) => {
                    let document =
                        serde_json::from_str(payload).map_err(StorageError::Malformed)?;
                    Ok(Some(document))
                }
                None => Ok(None),
            }
        })
    }

    fn save(&self, document: Document) -> BoxFuture<'static, StorageResult<()>> {
        let slot = Arc::clone(&self.slot);
        Box::pin(async move {
            let payload =
                serde_json::to_string_pretty(&document).map_err(StorageError::Encode)?;
            *slot.lock().expect("memory store lock") = Some(payload);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
