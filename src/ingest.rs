//! Ingestion driver: from artifact bytes to a committed native model.
//!
//! One invocation is one unit of work: resolve or import the artifact,
//! deserialize it, check the kind allow-list, build the output, commit
//! under the destination key. Every failure aborts the whole ingestion
//! with nothing committed; retrying is the caller's decision.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::artifact::{read_portable_model, ArtifactKind};
use crate::model::GenericModel;
use crate::output::{build_output, ReconstructError};
use crate::store::{Blob, BlobStore, ImportError, Key, ModelStore};

/// Parameters of one ingestion.
///
/// Exactly one of `path` and `model_key` must be set: either the artifact
/// still lives on the filesystem, or it was already uploaded as a blob
/// frame. Validated before any I/O.
#[derive(Debug, Clone)]
pub struct IngestParams {
    pub path: Option<PathBuf>,
    pub model_key: Option<Key>,
    /// Key the committed model becomes visible under.
    pub destination: Key,
}

impl IngestParams {
    pub fn from_path(path: impl Into<PathBuf>, destination: Key) -> Self {
        Self {
            path: Some(path.into()),
            model_key: None,
            destination,
        }
    }

    pub fn from_key(model_key: Key, destination: Key) -> Self {
        Self {
            path: None,
            model_key: Some(model_key),
            destination,
        }
    }
}

/// Why a resolved artifact frame cannot be ingested.
#[derive(Debug, Error)]
pub enum InvalidArtifact {
    #[error("no artifact frame found under key '{0}'; incorrect key provided?")]
    Missing(Key),
    #[error(
        "artifact frame '{key}' should contain only one column of artifact bytes, \
         {n_cols} columns found; incorrect key provided?"
    )]
    Ambiguous { key: Key, n_cols: usize },
    #[error("artifact frame '{0}' is empty (0 bytes); provide a non-empty artifact")]
    Empty(Key),
}

/// Terminal ingestion failures. None of these are retried automatically and
/// none leave a model at the destination key.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("exactly one of artifact path or uploaded artifact key must be specified")]
    Usage,
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    InvalidArtifact(#[from] InvalidArtifact),
    /// The frame resolved but its bytes could not be read back. The blob was
    /// addressable moments ago, so this is storage inconsistency, not bad
    /// user input.
    #[error("unreachable artifact '{key}'")]
    UnreachableArtifact {
        key: Key,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported artifact kind '{}'", kind.name())]
    UnsupportedArtifact { kind: ArtifactKind },
    #[error("corrupt artifact '{key}'")]
    CorruptArtifact {
        key: Key,
        #[source]
        source: ReconstructError,
    },
}

/// Ingest one portable model artifact and commit it under
/// `params.destination`.
///
/// On success exactly one model is visible at the destination key; on any
/// failure the key is left absent or unchanged. Readers of the destination
/// key block while the commit is in flight.
pub fn ingest(
    params: &IngestParams,
    blobs: &BlobStore,
    models: &ModelStore<GenericModel>,
) -> Result<Arc<GenericModel>, IngestError> {
    let artifact_key = match (&params.path, &params.model_key) {
        (Some(path), None) => {
            info!(path = %path.display(), "importing artifact from path");
            blobs.import_single(path)?
        }
        (None, Some(key)) => key.clone(),
        _ => return Err(IngestError::Usage),
    };

    let blob = resolve_artifact(blobs, &artifact_key)?;

    let portable = read_portable_model(blob.open_stream(), true).map_err(|source| {
        IngestError::UnreachableArtifact {
            key: artifact_key.clone(),
            source,
        }
    })?;
    info!(key = %artifact_key, kind = portable.kind.name(), "deserialized portable model");

    if !portable.kind.is_supported() {
        return Err(IngestError::UnsupportedArtifact {
            kind: portable.kind,
        });
    }

    let output = build_output(&portable.descriptor, portable.attributes.as_ref()).map_err(
        |source| IngestError::CorruptArtifact {
            key: artifact_key.clone(),
            source,
        },
    )?;

    let guard = models.write_lock(params.destination.clone());
    let model = GenericModel::new(params.destination.clone(), output, portable, blob);
    Ok(guard.commit(model))
}

/// Enforce the single-column and non-empty invariants on a resolved frame.
fn resolve_artifact(blobs: &BlobStore, key: &Key) -> Result<Blob, InvalidArtifact> {
    let frame = blobs
        .resolve(key)
        .ok_or_else(|| InvalidArtifact::Missing(key.clone()))?;
    if frame.n_cols() > 1 {
        return Err(InvalidArtifact::Ambiguous {
            key: key.clone(),
            n_cols: frame.n_cols(),
        });
    }
    let blob = match frame.n_cols() {
        1 => frame.column(0).clone(),
        _ => return Err(InvalidArtifact::Empty(key.clone())),
    };
    if blob.is_empty() {
        return Err(InvalidArtifact::Empty(key.clone()));
    }
    Ok(blob)
}
