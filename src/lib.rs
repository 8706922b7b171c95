//! modelport: portable model artifact ingestion for a model-serving platform.
//!
//! Loads a previously-trained, serialized model artifact produced outside the
//! current process and exposes it through the platform's native model types,
//! without retraining and without understanding the producing algorithm.
//!
//! # Key Types
//!
//! - [`ingest`] / [`IngestParams`] - The ingestion driver
//! - [`GenericModel`] - The committed, scorable native model
//! - [`ModelOutput`] - Descriptive view reconstructed from the artifact
//! - [`BlobStore`] / [`ModelStore`] - Storage collaborators
//!
//! # Ingesting an Artifact
//!
//! Upload or import the artifact bytes, then run [`ingest`]. On success the
//! model is atomically visible in the [`ModelStore`] under the destination
//! key; on any failure nothing is committed. See the [`ingest`] module for
//! the error taxonomy.
//!
//! # Artifact vs. Native Types
//!
//! The [`artifact`] module mirrors what the artifact format writes and is
//! used only for parsing; the [`output`] module owns the platform-native
//! shapes. The two families evolve independently and meet only in the
//! output builder.

pub mod artifact;
pub mod ingest;
pub mod model;
pub mod output;
pub mod store;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// The ingestion entry point
pub use ingest::{ingest, IngestError, IngestParams, InvalidArtifact};

// The native model and its descriptive output
pub use model::GenericModel;
pub use output::{ModelMetrics, ModelOutput, TwoDimTable};

// Artifact-side types callers commonly inspect
pub use artifact::{ArtifactKind, ModelCategory, PortableModel, SUPPORTED_KINDS};

// Storage collaborators
pub use store::{BlobStore, Key, ModelStore};
