// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog descriptors
//!
//! Metadata types are defined in the `refsql-ir` crate and re-exported here.
//! Descriptors wrap them with the dialect-quoted names a catalog hands to the
//! formatter.

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::names::homogenize;

// Re-export all metadata types from the ir crate
pub use refsql_ir::{ColumnMetadata, DataType, TableMetadata, TableType};

/// A column as resolved by a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    metadata: ColumnMetadata,
    quoted_name: String,
}

impl ColumnDescriptor {
    pub fn new(metadata: ColumnMetadata, quoted_name: impl Into<String>) -> Self {
        Self {
            metadata,
            quoted_name: quoted_name.into(),
        }
    }

    /// Unquoted column name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Column name quoted for the catalog's dialect, e.g. `[Name]`
    pub fn quoted_name(&self) -> &str {
        &self.quoted_name
    }

    pub fn data_type(&self) -> &DataType {
        &self.metadata.data_type
    }

    pub fn metadata(&self) -> &ColumnMetadata {
        &self.metadata
    }
}

/// A table as resolved by a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDescriptor {
    schema: Option<String>,
    name: String,
    qualified_name: String,
    columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn new(
        schema: Option<String>,
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        Self {
            schema,
            name: name.into(),
            qualified_name: qualified_name.into(),
            columns,
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified, quoted name, e.g. `[dbo].[Customers]`
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Unquoted `schema.name` form used in messages
    pub fn dotted_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Find a column by name
    ///
    /// Matching is case-insensitive; when nothing matches, names are compared
    /// again with `_`, `-` and spaces ignored.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ColumnNotFound` if no column matches.
    pub fn find_column(&self, name: &str) -> CatalogResult<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .or_else(|| {
                let wanted = homogenize(name);
                self.columns.iter().find(|c| homogenize(c.name()) == wanted)
            })
            .ok_or_else(|| CatalogError::ColumnNotFound {
                table: self.dotted_name(),
                column: name.to_string(),
            })
    }
}
