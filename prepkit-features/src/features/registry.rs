//! Feature registry tracking which columns are numerical, categorical, or the target.

use crate::config::FeatureSchemaConfig;
use crate::data::schema::ColumnIndex;
use crate::error::FeatureError;
use crate::features::definition::{FeatureKind, Removal};
use serde::Serialize;
use tracing::{debug, warn};

/// Feature metadata for one dataset schema.
///
/// Numerical and categorical names are kept in insertion order. `add` never
/// introduces duplicates or overlap; construction input is taken as given.
/// The target is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRegistry {
    numerical: Vec<String>,
    categorical: Vec<String>,
    target: String,
}

impl FeatureRegistry {
    pub fn new<N, C>(numerical: N, categorical: C, target: impl Into<String>) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            numerical: numerical.into_iter().map(Into::into).collect(),
            categorical: categorical.into_iter().map(Into::into).collect(),
            target: target.into(),
        }
    }

    /// Seed a registry from a parsed schema config.
    pub fn from_config(config: &FeatureSchemaConfig) -> Result<Self, FeatureError> {
        if config.target.trim().is_empty() {
            return Err(FeatureError::invalid_argument(
                "target must not be empty or whitespace",
            ));
        }
        Ok(Self::new(
            config.numerical.iter().cloned(),
            config.categorical.iter().cloned(),
            config.target.clone(),
        ))
    }

    /// Numerical names followed by categorical names.
    pub fn features(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.len());
        names.extend_from_slice(&self.numerical);
        names.extend_from_slice(&self.categorical);
        names
    }

    pub fn target_name(&self) -> String {
        self.target.clone()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// All features followed by the target.
    pub fn features_with_target(&self) -> Vec<String> {
        let mut names = self.features();
        names.push(self.target.clone());
        names
    }

    pub fn numerical_names(&self) -> Vec<String> {
        self.numerical.clone()
    }

    pub fn categorical_names(&self) -> Vec<String> {
        self.categorical.clone()
    }

    pub fn numerical_slice(&self) -> &[String] {
        &self.numerical
    }

    pub fn categorical_slice(&self) -> &[String] {
        &self.categorical
    }

    /// Number of features, excluding the target.
    pub fn len(&self) -> usize {
        self.numerical.len() + self.categorical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numerical.is_empty() && self.categorical.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    pub fn kind_of(&self, name: &str) -> Option<FeatureKind> {
        if self.numerical.iter().any(|n| n == name) {
            Some(FeatureKind::Numerical)
        } else if self.categorical.iter().any(|n| n == name) {
            Some(FeatureKind::Categorical)
        } else {
            None
        }
    }

    /// Positions of the numerical features in `table`, in stored order.
    pub fn numerical_indices<T>(&self, table: &T) -> Result<Vec<usize>, T::Error>
    where
        T: ColumnIndex + ?Sized,
    {
        resolve_indices(&self.numerical, table)
    }

    /// Positions of the categorical features in `table`, in stored order.
    pub fn categorical_indices<T>(&self, table: &T) -> Result<Vec<usize>, T::Error>
    where
        T: ColumnIndex + ?Sized,
    {
        resolve_indices(&self.categorical, table)
    }

    /// Register `name` under `kind`.
    ///
    /// Re-adding a name already in the requested list is a no-op. A name
    /// already registered under the other kind is left where it is and not
    /// added again, so the two lists stay disjoint.
    pub fn add(&mut self, name: &str, kind: FeatureKind) -> Result<(), FeatureError> {
        if name.trim().is_empty() {
            return Err(FeatureError::invalid_argument(
                "feature name must not be empty or whitespace",
            ));
        }

        let (own, other) = match kind {
            FeatureKind::Numerical => (&mut self.numerical, &self.categorical),
            FeatureKind::Categorical => (&mut self.categorical, &self.numerical),
        };

        if own.iter().any(|n| n == name) {
            debug!(feature = name, %kind, "Feature already registered");
            return Ok(());
        }
        if other.iter().any(|n| n == name) {
            // Kept in its original list; callers wanting to reclassify must remove first.
            warn!(
                feature = name,
                requested = %kind,
                "Feature registered under the other kind, not added"
            );
            return Ok(());
        }

        own.push(name.to_string());
        debug!(feature = name, %kind, "Feature added");
        Ok(())
    }

    /// Register `name` using a config label such as `"num"` or `"cat"`.
    pub fn add_labeled(&mut self, name: &str, label: &str) -> Result<(), FeatureError> {
        if name.trim().is_empty() {
            return Err(FeatureError::invalid_argument(
                "feature name must not be empty or whitespace",
            ));
        }
        let kind: FeatureKind = label.parse()?;
        self.add(name, kind)
    }

    /// Drop one feature or a batch of features.
    ///
    /// Names are processed in order and the first missing one aborts with
    /// `NotFound`. Names removed before it stay removed.
    pub fn remove(&mut self, names: impl Into<Removal>) -> Result<(), FeatureError> {
        let removal = names.into();
        for name in removal.names() {
            self.remove_one(name)?;
        }
        Ok(())
    }

    fn remove_one(&mut self, name: &str) -> Result<(), FeatureError> {
        if let Some(pos) = self.categorical.iter().position(|n| n == name) {
            self.categorical.remove(pos);
            debug!(feature = name, kind = "categorical", "Feature removed");
            return Ok(());
        }
        if let Some(pos) = self.numerical.iter().position(|n| n == name) {
            self.numerical.remove(pos);
            debug!(feature = name, kind = "numerical", "Feature removed");
            return Ok(());
        }
        warn!(feature = name, "Cannot remove unregistered feature");
        Err(FeatureError::not_found(name))
    }
}

fn resolve_indices<T>(names: &[String], table: &T) -> Result<Vec<usize>, T::Error>
where
    T: ColumnIndex + ?Sized,
{
    names.iter().map(|name| table.column_index(name)).collect()
}
