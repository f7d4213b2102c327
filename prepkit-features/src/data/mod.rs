//! Table-side collaborators used to resolve feature columns.

pub mod schema;

pub use schema::{ColumnIndex, ColumnSchema, ColumnType, SchemaDefinition};
