pub mod file;
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::storage::StorageResult;
use crate::state::tournament::Document;

/// Abstraction over the persistence layer for the tournament document.
///
/// The document is persisted wholesale: there is no partial-update
/// protocol, callers always hand over (or receive) the complete state.
pub trait DocumentBackend: Send + Sync {
    /// Load the persisted document, `None` when nothing was saved yet.
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Document>>>;
    /// Overwrite the persisted document.
    fn save(&self, document: Document) -> BoxFuture<'static, StorageResult<()>>;
    /// Cheap probe that the backend can accept writes.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
