//! Parse-side representation of portable model artifacts.
//!
//! Everything in this module is a "foreign type": it mirrors what the
//! artifact format writes and is consumed read-only by the output builder.
//! The format and the native platform types in [`crate::output`] evolve
//! independently; nothing here leaks into scoring.
//!
//! # Structure
//!
//! - [`ModelDescriptor`]: mandatory metadata (schema, category, flags)
//! - [`ModelAttributes`]: optional richer section (tables, metrics bundles)
//! - [`PortableModel`]: the whole parsed graph plus its [`ArtifactKind`] tag
//! - [`read_portable_model`]: the byte-stream reader

mod attributes;
mod descriptor;
mod metrics;
mod reader;
mod table;

pub use attributes::{BaseAttributes, ModelAttributes, TreeEnsembleAttributes, VariableImportances};
pub use descriptor::{ModelCategory, ModelDescriptor};
pub use metrics::{
    AnomalyBundle, BinomialBundle, MetricsBase, MetricsBundle, MultinomialBundle, RegressionBundle,
};
pub use reader::{read_portable_model, ArtifactKind, PortableModel, SUPPORTED_KINDS};
pub use table::{Cell, Table};
