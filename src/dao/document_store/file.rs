use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::debug;

use crate::dao::{
    document_store::DocumentBackend,
    storage::{StorageError, StorageResult},
};
use crate::state::tournament::Document;

/// Flat-file backend storing the document as pretty-printed JSON.
///
/// The format matches what the rest of the tooling expects: 2-space
/// indentation, UTF-8 with non-ASCII characters kept verbatim.
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
}

impl JsonFileStore {
    /// Create a store writing to `path`. The file does not need to exist
    /// yet; the first save creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Sibling path the document is staged at before the rename.
    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        path.with_file_name(name)
    }

    /// Directory the backing file lives in, `.` for bare filenames.
    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl DocumentBackend for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Document>>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            let contents = match fs::read_to_string(path.as_path()).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
                Err(source) => return Err(StorageError::io("reading", path.as_path(), source)),
            };

            let document = serde_json::from_str(&contents).map_err(StorageError::Malformed)?;
            debug!(path = %path.display(), "loaded tournament document");
            Ok(Some(document))
        })
    }

    fn save(&self, document: Document) -> BoxFuture<'static, StorageResult<()>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            let payload =
                serde_json::to_string_pretty(&document).map_err(StorageError::Encode)?;

            // Stage next to the target and rename into place so a crash
            // mid-write cannot leave a truncated document behind.
            let staging = Self::staging_path(&path);
            fs::write(&staging, payload.as_bytes())
                .await
                .map_err(|source| StorageError::io("writing", staging.clone(), source))?;
            fs::rename(&staging, path.as_path())
                .await
                .map_err(|source| StorageError::io("renaming", path.as_path(), source))?;

            debug!(path = %path.display(), "persisted tournament document");
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            let dir = Self::parent_dir(&path);
            fs::metadata(dir)
                .await
                .map_err(|source| StorageError::io("probing", dir, source))?;
            Ok(())
        })
    }
}
