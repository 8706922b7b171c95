//! In-process stand-in for the platform's distributed key-value layer.
//!
//! Two stores live here: [`BlobStore`] holds immutable artifact byte frames,
//! [`ModelStore`] holds committed native models behind a per-key write
//! reservation. The real platform backs both with cluster storage.

mod blob;
mod model;

pub use blob::{Blob, BlobFrame, BlobStore, ImportError};
pub use model::{ModelStore, WriteGuard};

use std::fmt;

/// A store key. Keys name blob frames and committed models alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
