//! Native platform types reconstructed from an artifact.
//!
//! Everything here belongs to the serving platform and evolves
//! independently of the artifact format in [`crate::artifact`]. The
//! builder projects a parsed artifact into these types once, at ingestion
//! time.
//!
//! - [`TwoDimTable`] and [`convert_table`]: the native table shape
//! - [`ModelMetrics`]: category-correct native metrics
//! - [`reconstruct_metrics`]: bundle-to-native dispatch per model category
//! - [`ModelOutput`] and [`build_output`]: the assembled descriptive view

mod builder;
mod metrics;
mod project;
mod reconstruct;
mod table;

pub use builder::{build_output, ModelOutput};
pub use metrics::{
    AnomalyMetrics, AucAggregate, BinomialMetrics, CustomMetric, GenericMetrics, MetricsCommon,
    ModelMetrics, MultinomialMetrics, RegressionMetrics,
};
pub use reconstruct::{reconstruct_metrics, ReconstructError};
pub use table::{convert_table, TableValue, TwoDimTable};
