//! Optional attributes section of a portable model artifact.
//!
//! Attributes are tagged by family. Every family carries the two summary
//! tables; only the tree-ensemble family additionally carries variable
//! importances, scoring history and per-split metrics bundles. The output
//! builder dispatches on this tag, so adding a future family is a new
//! variant here plus a match arm there.

use serde::{Deserialize, Serialize};

use super::metrics::MetricsBundle;
use super::table::Table;

/// Variable importances as the artifact stores them: two parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableImportances {
    pub variables: Vec<String>,
    pub importances: Vec<f64>,
}

/// Attribute fields every family carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseAttributes {
    #[serde(default)]
    pub model_summary: Option<Table>,
    #[serde(default)]
    pub cross_validation_metrics_summary: Option<Table>,
}

/// Attributes written by tree-ensemble style producers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeEnsembleAttributes {
    #[serde(flatten)]
    pub base: BaseAttributes,
    #[serde(default)]
    pub variable_importances: Option<VariableImportances>,
    #[serde(default)]
    pub scoring_history: Option<Table>,
    #[serde(default)]
    pub training_metrics: Option<MetricsBundle>,
    #[serde(default)]
    pub validation_metrics: Option<MetricsBundle>,
    #[serde(default)]
    pub cross_validation_metrics: Option<MetricsBundle>,
}

/// The artifact's attributes section, tagged by family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ModelAttributes {
    Base(BaseAttributes),
    TreeEnsemble(TreeEnsembleAttributes),
}

impl ModelAttributes {
    fn common(&self) -> &BaseAttributes {
        match self {
            ModelAttributes::Base(b) => b,
            ModelAttributes::TreeEnsemble(t) => &t.base,
        }
    }

    pub fn model_summary(&self) -> Option<&Table> {
        self.common().model_summary.as_ref()
    }

    pub fn cross_validation_metrics_summary(&self) -> Option<&Table> {
        self.common().cross_validation_metrics_summary.as_ref()
    }
}
