//! Artifact descriptor: the mandatory metadata section of a portable model.
//!
//! The descriptor is authoritative about what the producing algorithm was and
//! how the training frame looked. This core never recomputes anything the
//! descriptor states.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Kind of prediction task a model performs.
///
/// Fixed enumeration shared between the artifact format and the native
/// platform types. The category recorded on an ingested model is always the
/// one the artifact declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    Unknown,
    Binomial,
    Multinomial,
    Ordinal,
    Regression,
    Clustering,
    AutoEncoder,
    DimReduction,
    WordEmbedding,
    #[serde(rename = "coxph")]
    CoxPH,
    AnomalyDetection,
}

impl ModelCategory {
    /// All categories, in declaration order.
    pub const ALL: [ModelCategory; 11] = [
        ModelCategory::Unknown,
        ModelCategory::Binomial,
        ModelCategory::Multinomial,
        ModelCategory::Ordinal,
        ModelCategory::Regression,
        ModelCategory::Clustering,
        ModelCategory::AutoEncoder,
        ModelCategory::DimReduction,
        ModelCategory::WordEmbedding,
        ModelCategory::CoxPH,
        ModelCategory::AnomalyDetection,
    ];
}

/// Parsed descriptor of a portable model artifact.
///
/// These are "foreign types" used only for parsing; reconstruction into
/// native platform types happens in [`crate::output`].
///
/// Column order follows the training frame: features first, the response
/// column last (when supervised). `domains` is parallel to `column_names`;
/// a `None` entry means the column is numeric.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub column_names: Vec<String>,
    #[serde(default)]
    pub domains: Vec<Option<Vec<String>>>,
    pub supervised: bool,
    #[serde(default)]
    pub offset_column: Option<String>,
    #[serde(default)]
    pub weights_column: Option<String>,
    #[serde(default)]
    pub fold_column: Option<String>,
    #[serde(default)]
    pub prior_class_dist: Option<Vec<f64>>,
    #[serde(default)]
    pub model_class_dist: Option<Vec<f64>>,
    pub category: ModelCategory,
    // Some producers emit counts as strings, accept both.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub n_features: usize,
}

impl ModelDescriptor {
    /// Domain of the response column (the last column), if categorical.
    pub fn response_domain(&self) -> Option<&[String]> {
        self.domains.last().and_then(|d| d.as_deref())
    }

    pub fn has_offset(&self) -> bool {
        self.offset_column.is_some()
    }

    pub fn has_weights(&self) -> bool {
        self.weights_column.is_some()
    }

    pub fn has_fold(&self) -> bool {
        self.fold_column.is_some()
    }
}
