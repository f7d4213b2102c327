//! # prepkit-features — feature metadata for data-preparation pipelines
//!
//! Tracks which columns of a tabular dataset are numerical, categorical, or
//! the prediction target, and resolves their positions inside a concrete
//! table for numeric-array consumers.
//!
//! ```
//! use prepkit_features::{FeatureKind, FeatureRegistry, SchemaDefinition};
//!
//! let mut features = FeatureRegistry::new(["age", "income"], ["gender"], "label");
//! features.add("city", FeatureKind::Categorical)?;
//! features.remove(["income", "city"])?;
//!
//! let table = SchemaDefinition::from_names(["label", "gender", "age"]);
//! assert_eq!(features.numerical_indices(&table)?, vec![2]);
//! assert_eq!(features.features_with_target(), vec!["age", "gender", "label"]);
//! # Ok::<(), prepkit_features::FeatureError>(())
//! ```
//!
//! A registry is a plain value owned by one pipeline run. It does no
//! internal locking; share it across threads behind a `Mutex`.

pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod telemetry;

pub use config::{ConfigLoader, FeatureSchemaConfig};
pub use data::{ColumnIndex, ColumnSchema, ColumnType, SchemaDefinition};
pub use error::FeatureError;
pub use features::{FeatureKind, FeatureRegistry, Removal};
pub use telemetry::init_tracing;
