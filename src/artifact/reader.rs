//! Portable model reader.
//!
//! Deserializes artifact bytes into the parsed [`PortableModel`] graph. The
//! concrete kind tag is opaque to everything but the supported-kind check:
//! this crate never looks inside the algorithm payload, it only decides
//! whether the platform is allowed to score it.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::attributes::ModelAttributes;
use super::descriptor::ModelDescriptor;

/// Concrete kind of the algorithm that produced an artifact.
///
/// The artifact universe is wider than what the platform scores; kinds
/// outside [`SUPPORTED_KINDS`] deserialize fine and are rejected afterwards.
/// Supporting a new kind means adding it to the allow-list deliberately,
/// not probing capabilities at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Glm,
    Gbm,
    Drf,
    IsolationForest,
    #[serde(rename = "kmeans")]
    KMeans,
    DeepLearning,
    StackedEnsemble,
    #[serde(rename = "word2vec")]
    Word2Vec,
    Glrm,
    Pca,
}

/// Kinds the platform knows how to score.
pub const SUPPORTED_KINDS: [ArtifactKind; 5] = [
    ArtifactKind::Glm,
    ArtifactKind::Gbm,
    ArtifactKind::IsolationForest,
    ArtifactKind::Drf,
    ArtifactKind::KMeans,
];

impl ArtifactKind {
    pub fn name(self) -> &'static str {
        match self {
            ArtifactKind::Glm => "glm",
            ArtifactKind::Gbm => "gbm",
            ArtifactKind::Drf => "drf",
            ArtifactKind::IsolationForest => "isolation_forest",
            ArtifactKind::KMeans => "kmeans",
            ArtifactKind::DeepLearning => "deep_learning",
            ArtifactKind::StackedEnsemble => "stacked_ensemble",
            ArtifactKind::Word2Vec => "word2vec",
            ArtifactKind::Glrm => "glrm",
            ArtifactKind::Pca => "pca",
        }
    }

    pub fn is_supported(self) -> bool {
        SUPPORTED_KINDS.contains(&self)
    }
}

/// A fully parsed portable model: kind tag, mandatory descriptor, optional
/// attributes. The algorithm-specific scoring payload stays in the raw
/// artifact bytes and is not represented here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortableModel {
    pub kind: ArtifactKind,
    pub descriptor: ModelDescriptor,
    #[serde(default)]
    pub attributes: Option<ModelAttributes>,
}

/// Deserialize a portable model from a byte stream.
///
/// With `load_attributes` false the attributes section is dropped after
/// parsing, leaving a descriptor-only model. Parse failures surface as
/// [`std::io::ErrorKind::InvalidData`].
pub fn read_portable_model<R: Read>(reader: R, load_attributes: bool) -> std::io::Result<PortableModel> {
    let mut model: PortableModel = serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    if !load_attributes {
        model.attributes = None;
    }
    Ok(model)
}
