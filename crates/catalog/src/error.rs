// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! This module defines the error types used throughout the catalog layer.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// No table matches the requested path
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// More than one table matches the requested path
    #[error("Table '{path}' is ambiguous, it matches: {}", .candidates.join(", "))]
    AmbiguousTable {
        path: String,
        candidates: Vec<String>,
    },

    /// Requested column was not found in the table
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Schema definition is inconsistent (duplicate tables, columns, ...)
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Failed to serialize or deserialize schema data
    #[error("Failed to serialize schema data: {0}")]
    SerializationError(String),

    /// Invalid catalog configuration
    #[error("Invalid catalog configuration: {0}")]
    ConfigurationError(String),
}

impl CatalogError {
    /// Whether this error means the table lookup itself failed
    pub fn is_table_resolution(&self) -> bool {
        matches!(
            self,
            CatalogError::TableNotFound(_) | CatalogError::AmbiguousTable { .. }
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_table_display() {
        let err = CatalogError::AmbiguousTable {
            path: "Orders".to_string(),
            candidates: vec!["dbo.Orders".to_string(), "sales.Orders".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ambiguous"));
        assert!(msg.contains("dbo.Orders, sales.Orders"));
        assert!(err.is_table_resolution());
    }

    #[test]
    fn test_column_not_found_display() {
        let err = CatalogError::ColumnNotFound {
            table: "dbo.Customers".to_string(),
            column: "Nmae".to_string(),
        };
        assert_eq!(err.to_string(), "Column 'Nmae' not found in table 'dbo.Customers'");
        assert!(!err.is_table_resolution());
    }

    #[test]
    fn test_error_serialization() {
        let err = CatalogError::TableNotFound("dbo.Missing".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("TableNotFound"));
    }
}
