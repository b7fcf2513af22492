//! Table construction and loading errors.
//!
//! Tables are static data, so every structural mistake is reported when the
//! table is built or loaded, never while resolving classes.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::VariantValue;

/// Error returned when a [`VariantTable`](crate::VariantTable) fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two axes share a name.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },
    /// A compound rule or default names an axis the table does not have.
    #[error("{context} references unknown axis '{axis}'")]
    UnknownAxis { axis: String, context: String },
    /// A compound rule requires a value the axis does not declare.
    #[error("{context} requires value '{value}' which axis '{axis}' does not declare")]
    UnknownValue {
        axis: String,
        value: VariantValue,
        context: String,
    },
    /// A default value is not one of the axis values.
    #[error("default '{value}' is not a value of axis '{axis}'")]
    InvalidDefault { axis: String, value: VariantValue },
    /// A compound rule without constraints would apply to every render.
    #[error("compound rule #{index} has no conditions")]
    EmptyCompound { index: usize },
    /// A compound condition accepts no values, so the rule can never apply.
    #[error("compound rule #{index} accepts no values for axis '{axis}'")]
    EmptyCondition { index: usize, axis: String },
}

/// Error returned when a YAML table sheet cannot be turned into tables.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The document is not valid YAML or does not have the sheet shape.
    #[error("invalid sheet: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A value in the sheet has the wrong shape.
    #[error("component '{component}': {message}")]
    Invalid { component: String, message: String },
    /// A table definition parsed but failed validation.
    #[error("component '{component}': {source}")]
    Table {
        component: String,
        #[source]
        source: TableError,
    },
}

/// Error returned by [`TableRegistry`](crate::TableRegistry) operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No table is registered under the name.
    #[error("unknown component '{name}'. Available: {}", .available.join(", "))]
    UnknownComponent { name: String, available: Vec<String> },
    /// Two sheet files define the same component.
    #[error(
        "component '{component}' is defined in both {} and {}",
        .first.display(),
        .second.display()
    )]
    Duplicate {
        component: String,
        first: PathBuf,
        second: PathBuf,
    },
    /// A sheet failed to load.
    #[error("{}: {source}", .path.display())]
    Sheet {
        path: PathBuf,
        #[source]
        source: SheetError,
    },
    /// Reading the sheet directory failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_axis_display() {
        let err = TableError::UnknownAxis {
            axis: "tone".to_string(),
            context: "compound rule #0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tone"));
        assert!(msg.contains("compound rule #0"));
    }

    #[test]
    fn test_unknown_value_display() {
        let err = TableError::UnknownValue {
            axis: "size".to_string(),
            value: VariantValue::from("huge"),
            context: "compound rule #1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "compound rule #1 requires value 'huge' which axis 'size' does not declare"
        );
    }

    #[test]
    fn test_unknown_component_lists_available() {
        let err = RegistryError::UnknownComponent {
            name: "buton".to_string(),
            available: vec!["badge".to_string(), "button".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("buton"));
        assert!(msg.contains("badge, button"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = RegistryError::Duplicate {
            component: "card".to_string(),
            first: PathBuf::from("a/one.yaml"),
            second: PathBuf::from("b/two.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a/one.yaml"));
        assert!(msg.contains("b/two.yaml"));
    }
}
