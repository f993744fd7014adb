// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for reference formatting
//!
//! Every error is fatal to the formatting call that produced it. Nothing is
//! recovered or substituted; callers decide whether to rebuild the tree or
//! report the failure.

use refsql_catalog::CatalogError;
use serde::Serialize;

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while formatting a reference tree
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum FormatError {
    /// Reference kind the formatter has no rule for
    ///
    /// Dispatch over `SimpleReference` is exhaustive, so a new kind is a
    /// compile error in this crate rather than this runtime error.
    #[error("Reference kind not supported: {0}")]
    UnsupportedReferenceKind(String),

    /// Owner path resolved to no table, or to more than one
    #[error("Table '{path}' could not be resolved: {reason}")]
    TableNotFound { path: String, reason: String },

    /// Column is not part of the resolved table
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Math reference carries a non-arithmetic operator
    #[error("Invalid math operator: {0}")]
    InvalidOperator(String),

    /// Any other failure reported by the catalog
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),
}

impl FormatError {
    /// Whether this error indicates a broken tree rather than a schema mismatch
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            FormatError::InvalidOperator(_) | FormatError::UnsupportedReferenceKind(_)
        )
    }
}

impl From<CatalogError> for FormatError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TableNotFound(ref path) | CatalogError::AmbiguousTable { ref path, .. } => {
                FormatError::TableNotFound {
                    path: path.clone(),
                    reason: err.to_string(),
                }
            }
            CatalogError::ColumnNotFound { table, column } => {
                FormatError::ColumnNotFound { table, column }
            }
            other => FormatError::Catalog(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_table_maps_to_table_not_found() {
        let err: FormatError = CatalogError::AmbiguousTable {
            path: "Orders".to_string(),
            candidates: vec!["dbo.Orders".to_string(), "sales.Orders".to_string()],
        }
        .into();

        let FormatError::TableNotFound { path, reason } = &err else {
            panic!("expected TableNotFound, got {:?}", err);
        };
        assert_eq!(path, "Orders");
        assert!(reason.contains("ambiguous"));
        assert!(!err.is_programming_error());
    }

    #[test]
    fn test_column_not_found_keeps_names() {
        let err: FormatError = CatalogError::ColumnNotFound {
            table: "dbo.Customers".to_string(),
            column: "Nmae".to_string(),
        }
        .into();
        assert_eq!(
            err,
            FormatError::ColumnNotFound {
                table: "dbo.Customers".to_string(),
                column: "Nmae".to_string(),
            }
        );
    }

    #[test]
    fn test_other_catalog_errors_pass_through() {
        let err: FormatError = CatalogError::ConfigurationError("not loaded".to_string()).into();
        assert!(matches!(err, FormatError::Catalog(_)));
        assert!(err.to_string().contains("not loaded"));
    }

    #[test]
    fn test_programming_errors() {
        assert!(FormatError::InvalidOperator("Equal".to_string()).is_programming_error());
        assert!(FormatError::UnsupportedReferenceKind("Case".to_string()).is_programming_error());
    }

    #[test]
    fn test_error_serialization() {
        let err = FormatError::InvalidOperator("Like".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidOperator"));
    }
}
