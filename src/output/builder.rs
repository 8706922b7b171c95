//! Native model output and its builder.
//!
//! The output is assembled once at ingestion time from the artifact's
//! descriptor and optional attributes, then read-only for the life of the
//! model. Descriptor-derived fields are always populated; everything
//! attribute-derived is either fully present or absent.

use tracing::debug;

use crate::artifact::{
    ModelAttributes, ModelCategory, ModelDescriptor, VariableImportances,
};

use super::metrics::ModelMetrics;
use super::reconstruct::{reconstruct_metrics, ReconstructError};
use super::table::{convert_table, TableValue, TwoDimTable};

/// The platform's descriptive view of an ingested model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    /// Verbatim from the descriptor; the artifact is authoritative about
    /// what algorithm produced it.
    pub category: ModelCategory,
    pub names: Vec<String>,
    pub domains: Vec<Option<Vec<String>>>,
    pub n_features: usize,
    pub supervised: bool,
    pub has_offset: bool,
    pub has_weights: bool,
    pub has_fold: bool,
    pub prior_class_dist: Option<Vec<f64>>,
    pub model_class_dist: Option<Vec<f64>>,
    pub model_summary: Option<TwoDimTable>,
    pub cross_validation_metrics_summary: Option<TwoDimTable>,
    pub variable_importances: Option<TwoDimTable>,
    pub scoring_history: Option<TwoDimTable>,
    pub training_metrics: Option<ModelMetrics>,
    pub validation_metrics: Option<ModelMetrics>,
    pub cross_validation_metrics: Option<ModelMetrics>,
}

/// Build the native output from an artifact's descriptor and attributes.
///
/// Summary tables are taken from any attributes family; variable
/// importances, scoring history and the per-split metrics only exist in the
/// tree-ensemble family. Dispatch is on the attributes' own tag, not the
/// model category, so a future family slots in as a new match arm.
pub fn build_output(
    descriptor: &ModelDescriptor,
    attributes: Option<&ModelAttributes>,
) -> Result<ModelOutput, ReconstructError> {
    let mut output = ModelOutput {
        category: descriptor.category,
        names: descriptor.column_names.clone(),
        domains: descriptor.domains.clone(),
        n_features: descriptor.n_features,
        supervised: descriptor.supervised,
        has_offset: descriptor.has_offset(),
        has_weights: descriptor.has_weights(),
        has_fold: descriptor.has_fold(),
        prior_class_dist: descriptor.prior_class_dist.clone(),
        model_class_dist: descriptor.model_class_dist.clone(),
        model_summary: attributes.and_then(|a| convert_table(a.model_summary())),
        cross_validation_metrics_summary: attributes
            .and_then(|a| convert_table(a.cross_validation_metrics_summary())),
        variable_importances: None,
        scoring_history: None,
        training_metrics: None,
        validation_metrics: None,
        cross_validation_metrics: None,
    };

    match attributes {
        Some(ModelAttributes::TreeEnsemble(tree)) => {
            output.variable_importances = tree
                .variable_importances
                .as_ref()
                .map(variable_importance_table);
            output.scoring_history = convert_table(tree.scoring_history.as_ref());

            let domain = descriptor.response_domain();
            output.training_metrics = tree
                .training_metrics
                .as_ref()
                .map(|b| reconstruct_metrics(descriptor.category, b, domain))
                .transpose()?;
            output.validation_metrics = tree
                .validation_metrics
                .as_ref()
                .map(|b| reconstruct_metrics(descriptor.category, b, domain))
                .transpose()?;
            output.cross_validation_metrics = tree
                .cross_validation_metrics
                .as_ref()
                .map(|b| reconstruct_metrics(descriptor.category, b, domain))
                .transpose()?;
        }
        Some(ModelAttributes::Base(_)) | None => {
            debug!(
                category = ?descriptor.category,
                "attributes carry no metrics section, output has none"
            );
        }
    }

    Ok(output)
}

/// Synthesize the native variable-importance table from the artifact's
/// parallel arrays: rows sorted by descending relative importance,
/// scaled = value / max, percentage = value / sum.
fn variable_importance_table(importances: &VariableImportances) -> TwoDimTable {
    let mut rows: Vec<(&String, f64)> = importances
        .variables
        .iter()
        .zip(importances.importances.iter().copied())
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    let max = rows.first().map(|(_, v)| *v).unwrap_or(f64::NAN);
    let sum: f64 = rows.iter().map(|(_, v)| v).sum();

    let mut table = TwoDimTable::new(
        "Variable Importances",
        "",
        rows.iter().map(|(name, _)| (*name).clone()).collect(),
        vec![
            "Relative Importance".to_string(),
            "Scaled Importance".to_string(),
            "Percentage".to_string(),
        ],
        vec!["double".to_string(); 3],
        vec!["%5f".to_string(); 3],
        "Variable",
    );
    for (row, (_, value)) in rows.iter().enumerate() {
        table.set(row, 0, TableValue::Double(*value));
        table.set(row, 1, TableValue::Double(value / max));
        table.set(row, 2, TableValue::Double(value / sum));
    }
    table
}
