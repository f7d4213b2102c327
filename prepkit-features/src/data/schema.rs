//! Column lookup over in-memory tables.

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// A table that can resolve a column name to its position.
///
/// Registry index queries are generic over this trait and hand back the
/// table's own error untouched.
pub trait ColumnIndex {
    type Error;

    fn column_index(&self, name: &str) -> Result<usize, Self::Error>;
}

/// Column data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    String,
    Boolean,
    DateTime,
    Unknown,
}

/// Schema for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub dtype: ColumnType,
    #[serde(default)]
    pub nullable: bool,
}

/// Ordered column layout of a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub columns: Vec<ColumnSchema>,
}

impl SchemaDefinition {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Build a schema from bare header names; types are left `Unknown`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .map(|name| ColumnSchema {
                name: name.into(),
                dtype: ColumnType::Unknown,
                nullable: false,
            })
            .collect();
        Self { columns }
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl ColumnIndex for SchemaDefinition {
    type Error = FeatureError;

    fn column_index(&self, name: &str) -> Result<usize, FeatureError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| FeatureError::lookup(name))
    }
}

impl ColumnIndex for [String] {
    type Error = FeatureError;

    fn column_index(&self, name: &str) -> Result<usize, FeatureError> {
        self.iter()
            .position(|c| c == name)
            .ok_or_else(|| FeatureError::lookup(name))
    }
}

impl ColumnIndex for Vec<String> {
    type Error = FeatureError;

    fn column_index(&self, name: &str) -> Result<usize, FeatureError> {
        self.as_slice().column_index(name)
    }
}
