//! Byte blob frames: how uploaded artifacts are stored and resolved.
//!
//! An uploaded artifact lives in the store as a frame of byte columns. A
//! well-formed artifact frame has exactly one non-empty column; enforcing
//! that is the ingestion driver's job, the store only reports what it holds.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::info;

use super::Key;

/// Immutable artifact bytes. Cheap to clone; the ingested model keeps one
/// of these alive for scoring.
#[derive(Debug, Clone)]
pub struct Blob {
    bytes: Arc<[u8]>,
}

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read stream over the blob contents.
    pub fn open_stream(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.bytes)
    }
}

/// A frame of byte columns under one key.
#[derive(Debug, Clone, Default)]
pub struct BlobFrame {
    columns: Vec<Blob>,
}

impl BlobFrame {
    pub fn single(blob: Blob) -> Self {
        Self { columns: vec![blob] }
    }

    pub fn from_columns(columns: Vec<Blob>) -> Self {
        Self { columns }
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, idx: usize) -> &Blob {
        &self.columns[idx]
    }
}

/// Import failure: the filesystem path could not be turned into exactly one
/// stored blob.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to import '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("importing '{}' produced {n_found} blobs, expected exactly one", path.display())]
    NotSingular { path: PathBuf, n_found: usize },
}

/// In-process key-value store of blob frames.
///
/// Stands in for the platform's distributed storage layer: `resolve` is
/// read-only, `upload`/`import_path` write exactly the frames they document.
#[derive(Debug, Default)]
pub struct BlobStore {
    frames: RwLock<HashMap<Key, BlobFrame>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes as a single-column frame under `key`.
    pub fn upload(&self, key: Key, bytes: Vec<u8>) -> Key {
        self.upload_frame(key, BlobFrame::single(Blob::new(bytes)))
    }

    /// Store an arbitrary frame under `key`.
    pub fn upload_frame(&self, key: Key, frame: BlobFrame) -> Key {
        self.frames
            .write()
            .expect("blob store lock poisoned")
            .insert(key.clone(), frame);
        key
    }

    /// Resolve a frame by key. Read-only; the returned frame shares bytes
    /// with the stored one.
    pub fn resolve(&self, key: &Key) -> Option<BlobFrame> {
        self.frames
            .read()
            .expect("blob store lock poisoned")
            .get(key)
            .cloned()
    }

    /// Import a filesystem path, one blob per regular file.
    ///
    /// A file imports as one keyed blob; a directory imports every directly
    /// contained file (sorted by name, so key order is deterministic).
    /// Returns the keys of all blobs written.
    pub fn import_path(&self, path: &Path) -> Result<Vec<Key>, ImportError> {
        let io_err = |source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        if path.is_dir() {
            for entry in std::fs::read_dir(path).map_err(io_err)? {
                let entry = entry.map_err(io_err)?;
                if entry.path().is_file() {
                    files.push(entry.path());
                }
            }
            files.sort();
        } else {
            files.push(path.to_path_buf());
        }

        let mut keys = Vec::with_capacity(files.len());
        for file in files {
            let bytes = std::fs::read(&file).map_err(io_err)?;
            let key = Key::new(file.to_string_lossy());
            info!(key = %key, bytes = bytes.len(), "imported file into blob store");
            keys.push(self.upload(key, bytes));
        }
        Ok(keys)
    }

    /// Import a path that must expand to exactly one blob.
    pub fn import_single(&self, path: &Path) -> Result<Key, ImportError> {
        let mut keys = self.import_path(path)?;
        if keys.len() != 1 {
            return Err(ImportError::NotSingular {
                path: path.to_path_buf(),
                n_found: keys.len(),
            });
        }
        Ok(keys.remove(0))
    }
}
