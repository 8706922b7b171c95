//! Per-split metrics bundles carried inside artifact attributes.
//!
//! A bundle's shape follows the model category that produced it: binomial
//! artifacts write a binomial bundle and so on. Shape-specific statistics are
//! `Option`-typed because the artifact format and this crate evolve
//! independently; an older producer legitimately omits fields a newer native
//! metrics object has. Required fields are only the ones every shape carries.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::table::Table;

/// Fields common to every metrics bundle shape.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsBase {
    /// Number of observations the metrics were computed over.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub nobs: u64,
    pub mse: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_metric_name: Option<String>,
    #[serde(default)]
    pub custom_metric_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinomialBundle {
    #[serde(flatten)]
    pub base: MetricsBase,
    #[serde(default)]
    pub auc: Option<f64>,
    #[serde(default)]
    pub pr_auc: Option<f64>,
    #[serde(default)]
    pub gini: Option<f64>,
    #[serde(default)]
    pub logloss: Option<f64>,
    #[serde(default)]
    pub mean_per_class_error: Option<f64>,
    #[serde(default)]
    pub gains_lift_table: Option<Table>,
    #[serde(default)]
    pub thresholds_and_metric_scores: Option<Table>,
    #[serde(default)]
    pub max_criteria_and_metric_scores: Option<Table>,
    #[serde(default)]
    pub confusion_matrix: Option<Table>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialBundle {
    #[serde(flatten)]
    pub base: MetricsBase,
    #[serde(default)]
    pub logloss: Option<f64>,
    #[serde(default)]
    pub mean_per_class_error: Option<f64>,
    #[serde(default)]
    pub confusion_matrix: Option<Table>,
    #[serde(default)]
    pub hit_ratios: Option<Table>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionBundle {
    #[serde(flatten)]
    pub base: MetricsBase,
    #[serde(default)]
    pub mae: Option<f64>,
    #[serde(default)]
    pub root_mean_squared_log_error: Option<f64>,
    #[serde(default)]
    pub mean_residual_deviance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyBundle {
    #[serde(flatten)]
    pub base: MetricsBase,
    /// Mean anomaly score per observation; totals are derived at
    /// reconstruction time.
    #[serde(default)]
    pub mean_score: Option<f64>,
    #[serde(default)]
    pub mean_normalized_score: Option<f64>,
}

/// One metrics bundle, tagged by shape.
///
/// The artifact is self-describing: the declared model category determines
/// which shape its bundles must have, and reconstruction refuses a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MetricsBundle {
    Binomial(BinomialBundle),
    Multinomial(MultinomialBundle),
    Regression(RegressionBundle),
    Anomaly(AnomalyBundle),
    Generic(MetricsBase),
}

impl MetricsBundle {
    /// The common section every shape carries.
    pub fn base(&self) -> &MetricsBase {
        match self {
            MetricsBundle::Binomial(b) => &b.base,
            MetricsBundle::Multinomial(b) => &b.base,
            MetricsBundle::Regression(b) => &b.base,
            MetricsBundle::Anomaly(b) => &b.base,
            MetricsBundle::Generic(b) => b,
        }
    }

    /// Shape tag, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            MetricsBundle::Binomial(_) => "binomial",
            MetricsBundle::Multinomial(_) => "multinomial",
            MetricsBundle::Regression(_) => "regression",
            MetricsBundle::Anomaly(_) => "anomaly",
            MetricsBundle::Generic(_) => "generic",
        }
    }
}
