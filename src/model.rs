//! The native generic model: a scorable wrapper around an ingested artifact.

use crate::artifact::{ArtifactKind, ModelCategory, PortableModel};
use crate::output::ModelOutput;
use crate::store::{Blob, Key};

/// A platform-native model reconstructed from a portable artifact.
///
/// Holds the assembled output, the parsed portable model and a reference to
/// the immutable artifact bytes used for scoring. Read-only after
/// construction; the model store hands out shared references.
#[derive(Debug)]
pub struct GenericModel {
    key: Key,
    output: ModelOutput,
    portable: PortableModel,
    artifact: Blob,
}

impl GenericModel {
    pub fn new(key: Key, output: ModelOutput, portable: PortableModel, artifact: Blob) -> Self {
        Self {
            key,
            output,
            portable,
            artifact,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn output(&self) -> &ModelOutput {
        &self.output
    }

    pub fn kind(&self) -> ArtifactKind {
        self.portable.kind
    }

    pub fn category(&self) -> ModelCategory {
        self.output.category
    }

    pub fn portable(&self) -> &PortableModel {
        &self.portable
    }

    /// The raw artifact bytes the model scores with. Never mutated.
    pub fn artifact(&self) -> &Blob {
        &self.artifact
    }
}
