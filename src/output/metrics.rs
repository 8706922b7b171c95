//! Native metrics objects attached to a model output.
//!
//! One variant per model-category family. These types belong to the
//! platform, not the artifact format; reconstruction in
//! [`super::reconstruct`] maps artifact bundles onto them.

use super::table::TwoDimTable;

/// A user-defined metric carried alongside the standard statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMetric {
    pub name: String,
    pub value: f64,
}

impl CustomMetric {
    /// Assemble from the artifact's split name/value fields. No name means
    /// no custom metric was recorded.
    pub fn from_parts(name: Option<&str>, value: Option<f64>) -> Option<Self> {
        name.map(|name| Self {
            name: name.to_owned(),
            value: value.unwrap_or(f64::NAN),
        })
    }
}

/// Area-under-curve aggregate for binomial models, assembled from the
/// artifact's scalar fields rather than copied as one object.
#[derive(Debug, Clone, PartialEq)]
pub struct AucAggregate {
    pub auc: f64,
    pub pr_auc: f64,
    pub gini: f64,
}

/// Statistics every metrics family reports.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsCommon {
    pub nobs: u64,
    pub mse: f64,
    pub custom_metric: Option<CustomMetric>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinomialMetrics {
    pub common: MetricsCommon,
    /// Categorical domain of the response column, verbatim from the
    /// descriptor.
    pub domain: Option<Vec<String>>,
    /// The artifact does not carry sigma; always NaN.
    pub sigma: f64,
    pub auc: AucAggregate,
    pub logloss: f64,
    pub mean_per_class_error: f64,
    pub gains_lift_table: Option<TwoDimTable>,
    pub thresholds_and_metric_scores: Option<TwoDimTable>,
    pub max_criteria_and_metric_scores: Option<TwoDimTable>,
    pub confusion_matrix: Option<TwoDimTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultinomialMetrics {
    pub common: MetricsCommon,
    pub domain: Option<Vec<String>>,
    /// The artifact does not carry sigma; always NaN.
    pub sigma: f64,
    pub logloss: f64,
    pub mean_per_class_error: f64,
    pub confusion_matrix: Option<TwoDimTable>,
    pub hit_ratios: Option<TwoDimTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionMetrics {
    pub common: MetricsCommon,
    pub mae: f64,
    pub root_mean_squared_log_error: f64,
    pub mean_residual_deviance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyMetrics {
    pub common: MetricsCommon,
    /// Mean score times observation count.
    pub total_score: f64,
    pub total_normalized_score: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericMetrics {
    pub common: MetricsCommon,
    pub description: Option<String>,
}

/// A category-correct native metrics object.
///
/// An output either carries the variant matching its model category or none
/// at all, never a wrong-category object.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelMetrics {
    Binomial(BinomialMetrics),
    Multinomial(MultinomialMetrics),
    Regression(RegressionMetrics),
    Anomaly(AnomalyMetrics),
    Generic(GenericMetrics),
}

impl ModelMetrics {
    pub fn common(&self) -> &MetricsCommon {
        match self {
            ModelMetrics::Binomial(m) => &m.common,
            ModelMetrics::Multinomial(m) => &m.common,
            ModelMetrics::Regression(m) => &m.common,
            ModelMetrics::Anomaly(m) => &m.common,
            ModelMetrics::Generic(m) => &m.common,
        }
    }

    pub fn nobs(&self) -> u64 {
        self.common().nobs
    }

    pub fn mse(&self) -> f64 {
        self.common().mse
    }
}
