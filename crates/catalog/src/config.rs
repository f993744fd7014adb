// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog Configuration
//!
//! A catalog can be described in a YAML or JSON document:
//!
//! ```yaml
//! dialect: sqlserver
//! database: Shop
//! tables:
//!   - schema: dbo
//!     name: Customers
//!     columns:
//!       - name: Id
//!         data_type: Integer
//!         is_primary_key: true
//!       - name: Name
//!         data_type: !Varchar 100
//! ```
//!
//! The file format is picked from the extension (`.yaml`, `.yml` or `.json`).

use std::path::Path;

use refsql_ir::{Dialect, TableMetadata};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// Declarative description of a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dialect whose quoting rules the catalog applies
    pub dialect: Dialect,

    /// Database name accepted as the leading segment of three-part paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Table definitions
    #[serde(default)]
    pub tables: Vec<TableMetadata>,
}

impl CatalogConfig {
    /// Create an empty configuration for a dialect
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            database: None,
            tables: Vec::new(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_table(mut self, table: TableMetadata) -> Self {
        self.tables.push(table);
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(source: &str) -> CatalogResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a configuration file, choosing the format from its extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConfigurationError` if the file cannot be read or
    /// has an unsupported extension, and `CatalogError::SerializationError` if
    /// its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let source = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::ConfigurationError(format!("cannot read {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Loading catalog configuration");

        match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            _ => Err(CatalogError::ConfigurationError(format!(
                "unsupported catalog file extension: {}",
                path.display()
            ))),
        }
    }
}
