//! Field resolution between artifact bundles and native metrics.
//!
//! The two object families evolve independently, so a bundle may lack
//! fields the native type declares. Resolution substitutes the target's
//! default for a missing source field and records the miss at debug level;
//! one absent field never aborts the reconstruction.

use tracing::debug;

use crate::artifact::Table;

use super::table::{convert_table, TwoDimTable};

/// Resolve a scalar statistic. Missing source field becomes NaN.
pub(crate) fn scalar(field: &'static str, value: Option<f64>) -> f64 {
    match value {
        Some(v) => v,
        None => {
            debug!(field, "field not found in the source bundle, using default");
            f64::NAN
        }
    }
}

/// Resolve a nested table, converting it to the native representation.
/// Missing source field stays absent.
pub(crate) fn table(field: &'static str, value: Option<&Table>) -> Option<TwoDimTable> {
    if value.is_none() {
        debug!(field, "field not found in the source bundle, using default");
    }
    convert_table(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_scalar_passes_through() {
        assert_eq!(scalar("auc", Some(0.9)), 0.9);
    }

    #[test]
    fn missing_scalar_defaults_to_nan() {
        assert!(scalar("auc", None).is_nan());
    }

    #[test]
    fn missing_table_stays_absent() {
        assert!(table("confusion_matrix", None).is_none());
    }

    #[test]
    fn present_table_converts() {
        let t: Table = serde_json::from_value(json!({
            "header": "Gains/Lift",
            "row_headers": ["1"],
            "col_headers": ["lift"],
            "col_types": ["double"],
            "col_formats": ["%.4f"],
            "cells": [[1.5]]
        }))
        .unwrap();
        let native = table("gains_lift_table", Some(&t)).unwrap();
        assert_eq!(native.header, "Gains/Lift");
    }
}
