use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::codec::{decode_store, encode_store};
use crate::error::StoreResult;
use crate::store::Store;
use crate::traits::StoreBackend;

/// Store backed by a single flat file of fixed-width records.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store at `path`. The file is not touched until the first load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for FileStore {
    fn load(&self) -> StoreResult<Store> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file; starting empty");
                return Ok(Store::new());
            }
            Err(e) => return Err(e.into()),
        };
        let store = decode_store(&data)?;
        debug!(path = %self.path.display(), records = store.len(), "store loaded");
        Ok(store)
    }

    fn save(&self, store: &Store) -> StoreResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let bytes = encode_store(store);
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(&bytes)?;
        temp.as_file().sync_all()?;
        // Keep an existing store's permissions; the temp file starts at 0600.
        if let Ok(meta) = fs::metadata(&self.path) {
            temp.as_file().set_permissions(meta.permissions())?;
        }
        temp.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            path = %self.path.display(),
            records = store.len(),
            bytes = bytes.len(),
            "store saved"
        );
        Ok(())
    }
}
