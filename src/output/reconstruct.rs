//! Metrics reconstruction: artifact bundles to native metrics objects.
//!
//! Dispatch is exhaustive over the model-category enumeration. The artifact
//! is self-describing, so the declared category fixes which bundle shape is
//! legal; a mismatch means the artifact is corrupt, not that a best-effort
//! conversion should be attempted.

use thiserror::Error;

use crate::artifact::{MetricsBase, MetricsBundle, ModelCategory};

use super::metrics::{
    AnomalyMetrics, AucAggregate, BinomialMetrics, CustomMetric, GenericMetrics, MetricsCommon,
    ModelMetrics, MultinomialMetrics, RegressionMetrics,
};
use super::project;

/// The artifact's attributes contradict its own descriptor.
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error(
        "metrics bundle of shape '{shape}' does not match the declared model category {category:?}"
    )]
    ShapeMismatch {
        category: ModelCategory,
        shape: &'static str,
    },
}

fn common(base: &MetricsBase) -> MetricsCommon {
    MetricsCommon {
        nobs: base.nobs,
        mse: base.mse,
        custom_metric: CustomMetric::from_parts(
            base.custom_metric_name.as_deref(),
            base.custom_metric_value,
        ),
    }
}

fn shape_mismatch(category: ModelCategory, bundle: &MetricsBundle) -> ReconstructError {
    ReconstructError::ShapeMismatch {
        category,
        shape: bundle.shape_name(),
    }
}

/// Build the category-correct native metrics object from one bundle.
///
/// `response_domain` is the descriptor's response-column domain; it is
/// recorded verbatim on classification metrics. Runs once per split
/// (training, validation, cross-validation).
pub fn reconstruct_metrics(
    category: ModelCategory,
    bundle: &MetricsBundle,
    response_domain: Option<&[String]>,
) -> Result<ModelMetrics, ReconstructError> {
    match category {
        ModelCategory::Binomial => {
            let MetricsBundle::Binomial(src) = bundle else {
                return Err(shape_mismatch(category, bundle));
            };
            Ok(ModelMetrics::Binomial(BinomialMetrics {
                common: common(&src.base),
                domain: response_domain.map(<[String]>::to_vec),
                sigma: f64::NAN,
                auc: AucAggregate {
                    auc: project::scalar("auc", src.auc),
                    pr_auc: project::scalar("pr_auc", src.pr_auc),
                    gini: project::scalar("gini", src.gini),
                },
                logloss: project::scalar("logloss", src.logloss),
                mean_per_class_error: project::scalar(
                    "mean_per_class_error",
                    src.mean_per_class_error,
                ),
                gains_lift_table: project::table("gains_lift_table", src.gains_lift_table.as_ref()),
                thresholds_and_metric_scores: project::table(
                    "thresholds_and_metric_scores",
                    src.thresholds_and_metric_scores.as_ref(),
                ),
                max_criteria_and_metric_scores: project::table(
                    "max_criteria_and_metric_scores",
                    src.max_criteria_and_metric_scores.as_ref(),
                ),
                confusion_matrix: project::table("confusion_matrix", src.confusion_matrix.as_ref()),
            }))
        }
        ModelCategory::Multinomial => {
            let MetricsBundle::Multinomial(src) = bundle else {
                return Err(shape_mismatch(category, bundle));
            };
            Ok(ModelMetrics::Multinomial(MultinomialMetrics {
                common: common(&src.base),
                domain: response_domain.map(<[String]>::to_vec),
                sigma: f64::NAN,
                logloss: project::scalar("logloss", src.logloss),
                mean_per_class_error: project::scalar(
                    "mean_per_class_error",
                    src.mean_per_class_error,
                ),
                confusion_matrix: project::table("confusion_matrix", src.confusion_matrix.as_ref()),
                hit_ratios: project::table("hit_ratios", src.hit_ratios.as_ref()),
            }))
        }
        ModelCategory::Regression => {
            let MetricsBundle::Regression(src) = bundle else {
                return Err(shape_mismatch(category, bundle));
            };
            Ok(ModelMetrics::Regression(RegressionMetrics {
                common: common(&src.base),
                mae: project::scalar("mae", src.mae),
                root_mean_squared_log_error: project::scalar(
                    "root_mean_squared_log_error",
                    src.root_mean_squared_log_error,
                ),
                mean_residual_deviance: project::scalar(
                    "mean_residual_deviance",
                    src.mean_residual_deviance,
                ),
            }))
        }
        ModelCategory::AnomalyDetection => {
            let MetricsBundle::Anomaly(src) = bundle else {
                return Err(shape_mismatch(category, bundle));
            };
            // Totals are not stored in the artifact; derive them from the
            // means and the observation count.
            let nobs = src.base.nobs as f64;
            Ok(ModelMetrics::Anomaly(AnomalyMetrics {
                common: common(&src.base),
                total_score: project::scalar("mean_score", src.mean_score) * nobs,
                total_normalized_score: project::scalar(
                    "mean_normalized_score",
                    src.mean_normalized_score,
                ) * nobs,
                description: src.base.description.clone(),
            }))
        }
        ModelCategory::Unknown
        | ModelCategory::Ordinal
        | ModelCategory::Clustering
        | ModelCategory::AutoEncoder
        | ModelCategory::DimReduction
        | ModelCategory::WordEmbedding
        | ModelCategory::CoxPH => {
            let MetricsBundle::Generic(src) = bundle else {
                return Err(shape_mismatch(category, bundle));
            };
            Ok(ModelMetrics::Generic(GenericMetrics {
                common: common(src),
                description: src.description.clone(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn bundle(v: serde_json::Value) -> MetricsBundle {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn binomial_assembles_auc_aggregate_from_scalars() {
        let b = bundle(json!({
            "shape": "binomial",
            "nobs": 100,
            "mse": 0.04,
            "auc": 0.98,
            "pr_auc": 0.97,
            "gini": 0.96,
            "logloss": 0.12,
            "mean_per_class_error": 0.05
        }));
        let domain = vec!["no".to_string(), "yes".to_string()];
        let m = reconstruct_metrics(ModelCategory::Binomial, &b, Some(&domain)).unwrap();

        let ModelMetrics::Binomial(bin) = m else {
            panic!("expected binomial metrics");
        };
        assert_relative_eq!(bin.auc.auc, 0.98);
        assert_relative_eq!(bin.auc.pr_auc, 0.97);
        assert_relative_eq!(bin.auc.gini, 0.96);
        assert_relative_eq!(bin.logloss, 0.12);
        assert!(bin.sigma.is_nan());
        assert_eq!(bin.domain.as_deref(), Some(domain.as_slice()));
        assert!(bin.confusion_matrix.is_none());
    }

    #[test]
    fn binomial_missing_scalars_default_to_nan() {
        let b = bundle(json!({ "shape": "binomial", "nobs": 10, "mse": 0.1 }));
        let m = reconstruct_metrics(ModelCategory::Binomial, &b, None).unwrap();
        let ModelMetrics::Binomial(bin) = m else {
            panic!("expected binomial metrics");
        };
        assert!(bin.auc.auc.is_nan());
        assert!(bin.logloss.is_nan());
        assert!(bin.domain.is_none());
    }

    #[test]
    fn anomaly_totals_are_mean_times_nobs() {
        let b = bundle(json!({
            "shape": "anomaly",
            "nobs": 10,
            "mse": 0.0,
            "mean_score": 0.4,
            "mean_normalized_score": 0.2
        }));
        let m = reconstruct_metrics(ModelCategory::AnomalyDetection, &b, None).unwrap();
        let ModelMetrics::Anomaly(anomaly) = m else {
            panic!("expected anomaly metrics");
        };
        assert_relative_eq!(anomaly.total_score, 4.0);
        assert_relative_eq!(anomaly.total_normalized_score, 2.0);
    }

    #[test]
    fn regression_copies_shape_fields() {
        let b = bundle(json!({
            "shape": "regression",
            "nobs": 50,
            "mse": 1.2,
            "mae": 0.8,
            "root_mean_squared_log_error": 0.3,
            "mean_residual_deviance": 1.2,
            "custom_metric_name": "mape",
            "custom_metric_value": 0.07
        }));
        let m = reconstruct_metrics(ModelCategory::Regression, &b, None).unwrap();
        let ModelMetrics::Regression(reg) = m else {
            panic!("expected regression metrics");
        };
        assert_eq!(reg.common.nobs, 50);
        assert_relative_eq!(reg.mae, 0.8);
        assert_eq!(reg.common.custom_metric.as_ref().unwrap().name, "mape");
    }

    #[test]
    fn unmapped_categories_use_generic_metrics() {
        let b = bundle(json!({
            "shape": "generic",
            "nobs": 7,
            "mse": 0.5,
            "description": "clustering run"
        }));
        for category in [
            ModelCategory::Unknown,
            ModelCategory::Ordinal,
            ModelCategory::Clustering,
            ModelCategory::AutoEncoder,
            ModelCategory::DimReduction,
            ModelCategory::WordEmbedding,
            ModelCategory::CoxPH,
        ] {
            let m = reconstruct_metrics(category, &b, None).unwrap();
            let ModelMetrics::Generic(generic) = m else {
                panic!("expected generic metrics for {category:?}");
            };
            assert_eq!(generic.common.nobs, 7);
            assert_eq!(generic.description.as_deref(), Some("clustering run"));
        }
    }

    #[test]
    fn wrong_shape_for_category_is_a_mismatch() {
        let b = bundle(json!({ "shape": "regression", "nobs": 1, "mse": 0.0 }));
        let err = reconstruct_metrics(ModelCategory::Binomial, &b, None).unwrap_err();
        assert!(
            matches!(
                err,
                ReconstructError::ShapeMismatch {
                    category: ModelCategory::Binomial,
                    shape: "regression"
                }
            ),
            "got: {err:?}"
        );
    }
}
