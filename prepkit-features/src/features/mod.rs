//! Feature classification for data-preparation pipelines.

pub mod definition;
pub mod registry;

pub use definition::{FeatureKind, Removal};
pub use registry::FeatureRegistry;
