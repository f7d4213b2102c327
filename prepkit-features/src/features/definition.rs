//! Feature kinds and the tagged input accepted by registry removal.

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of model input a registry classifies columns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Numerical,
    Categorical,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numerical => write!(f, "numerical"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

impl FromStr for FeatureKind {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "num" | "numerical" => Ok(Self::Numerical),
            "cat" | "categorical" => Ok(Self::Categorical),
            other => Err(FeatureError::invalid_argument(format!(
                "feature kind must be 'num' or 'cat', got '{other}'"
            ))),
        }
    }
}

/// Names to drop from a registry: a single feature or an ordered batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    One(String),
    Many(Vec<String>),
}

impl Removal {
    /// Names in processing order.
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl From<&str> for Removal {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for Removal {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<&String> for Removal {
    fn from(name: &String) -> Self {
        Self::One(name.clone())
    }
}

impl From<Vec<String>> for Removal {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<Vec<&str>> for Removal {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Removal {
    fn from(names: &[String]) -> Self {
        Self::Many(names.to_vec())
    }
}

impl From<&[&str]> for Removal {
    fn from(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Removal {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_short_and_long_labels() {
        assert_eq!("num".parse::<FeatureKind>().unwrap(), FeatureKind::Numerical);
        assert_eq!("cat".parse::<FeatureKind>().unwrap(), FeatureKind::Categorical);
        assert_eq!(
            "numerical".parse::<FeatureKind>().unwrap(),
            FeatureKind::Numerical
        );
        assert_eq!(
            "categorical".parse::<FeatureKind>().unwrap(),
            FeatureKind::Categorical
        );
    }

    #[test]
    fn test_kind_rejects_unknown_label() {
        let err = "geo".parse::<FeatureKind>().unwrap_err();
        assert!(matches!(err, FeatureError::InvalidArgument(_)));
        assert!(err.to_string().contains("'geo'"));
    }

    #[test]
    fn test_kind_serde_snake_case() {
        let json = serde_json::to_string(&FeatureKind::Categorical).unwrap();
        assert_eq!(json, "\"categorical\"");
        let kind: FeatureKind = serde_yaml::from_str("numerical").unwrap();
        assert_eq!(kind, FeatureKind::Numerical);
    }

    #[test]
    fn test_removal_shapes() {
        assert_eq!(Removal::from("age"), Removal::One("age".into()));
        assert_eq!(
            Removal::from(["age", "gender"]),
            Removal::Many(vec!["age".into(), "gender".into()])
        );
        let names = vec!["a".to_string()];
        assert_eq!(Removal::from(names.as_slice()).names(), &["a".to_string()]);
        assert_eq!(Removal::from("x").names().len(), 1);
    }
}
