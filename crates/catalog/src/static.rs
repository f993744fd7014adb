// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! This module provides an in-memory catalog built from table metadata. All
//! quoted names are computed once when a table is added, so lookups are plain
//! reads.
//!
//! ## Path Resolution
//!
//! The last path segment names the table and the one before it, if any, the
//! schema. A third leading segment must equal the configured database name.
//! Segments match case-insensitively; if that finds nothing, a second pass
//! compares names with `_`, `-` and spaces ignored.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use refsql_catalog::{SchemaCatalog, StaticCatalog};
//!
//! let catalog = StaticCatalog::from_file("schema.yaml")?;
//! let table = catalog.find_table(&["dbo".into(), "Customers".into()])?;
//! assert_eq!(table.qualified_name(), "[dbo].[Customers]");
//! ```

use std::path::Path;

use refsql_ir::{Dialect, TableMetadata};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::metadata::{ColumnDescriptor, TableDescriptor};
use crate::names::homogenize;
use crate::{CatalogError, CatalogResult, SchemaCatalog};

/// In-memory catalog with predefined schema data
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    dialect: Dialect,
    database: Option<String>,
    tables: Vec<TableDescriptor>,
}

impl StaticCatalog {
    /// Create an empty catalog for a dialect
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            database: None,
            tables: Vec::new(),
        }
    }

    /// Set the database name accepted as the first of three path segments
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Build a catalog from a list of tables
    pub fn from_tables(
        dialect: Dialect,
        tables: impl IntoIterator<Item = TableMetadata>,
    ) -> CatalogResult<Self> {
        let mut catalog = Self::new(dialect);
        for table in tables {
            catalog.add_table(table)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from a parsed configuration
    pub fn from_config(config: CatalogConfig) -> CatalogResult<Self> {
        let mut catalog = Self::from_tables(config.dialect, config.tables)?;
        catalog.database = config.database;
        Ok(catalog)
    }

    /// Load a catalog from a YAML or JSON schema file
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Self::from_config(CatalogConfig::from_file(path)?)
    }

    /// Add a table, computing its quoted names
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidSchema` if the table has no name, repeats
    /// a column, or is already present under the same schema.
    pub fn add_table(&mut self, table: TableMetadata) -> CatalogResult<()> {
        if table.name.trim().is_empty() {
            return Err(CatalogError::InvalidSchema(
                "table name must not be empty".to_string(),
            ));
        }

        let duplicate = self.tables.iter().any(|existing| {
            existing.name().eq_ignore_ascii_case(&table.name)
                && same_schema(existing.schema(), table.schema.as_deref())
        });
        if duplicate {
            return Err(CatalogError::InvalidSchema(format!(
                "duplicate table '{}'",
                table.dotted_name()
            )));
        }

        let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(table.columns.len());
        for column in table.columns {
            if columns
                .iter()
                .any(|c| c.name().eq_ignore_ascii_case(&column.name))
            {
                return Err(CatalogError::InvalidSchema(format!(
                    "duplicate column '{}' in table '{}'",
                    column.name, table.name
                )));
            }
            let quoted = self.dialect.quote_identifier(&column.name);
            columns.push(ColumnDescriptor::new(column, quoted));
        }

        let qualified_name = match &table.schema {
            Some(schema) => format!(
                "{}.{}",
                self.dialect.quote_identifier(schema),
                self.dialect.quote_identifier(&table.name)
            ),
            None => self.dialect.quote_identifier(&table.name),
        };

        debug!(table = %qualified_name, columns = columns.len(), "Registered table");

        self.tables.push(TableDescriptor::new(
            table.schema,
            table.name,
            qualified_name,
            columns,
        ));
        Ok(())
    }

    /// All tables in registration order
    pub fn tables(&self) -> &[TableDescriptor] {
        &self.tables
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    fn matching<F>(&self, schema: Option<&str>, name: &str, eq: F) -> Vec<&TableDescriptor>
    where
        F: Fn(&str, &str) -> bool,
    {
        self.tables
            .iter()
            .filter(|t| eq(t.name(), name))
            .filter(|t| match schema {
                Some(schema) => t.schema().is_some_and(|s| eq(s, schema)),
                None => true,
            })
            .collect()
    }
}

fn same_schema(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        (None, None) => true,
        _ => false,
    }
}

impl SchemaCatalog for StaticCatalog {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn find_table(&self, path: &[String]) -> CatalogResult<&TableDescriptor> {
        let dotted = path.join(".");

        let (schema, name) = match path {
            [] => return Err(CatalogError::TableNotFound(dotted)),
            [name] => (None, name.as_str()),
            [schema, name] => (Some(schema.as_str()), name.as_str()),
            [database, schema, name] => {
                let known = self
                    .database
                    .as_deref()
                    .is_some_and(|db| db.eq_ignore_ascii_case(database));
                if !known {
                    debug!(path = %dotted, "Database qualifier does not match catalog");
                    return Err(CatalogError::TableNotFound(dotted));
                }
                (Some(schema.as_str()), name.as_str())
            }
            _ => return Err(CatalogError::TableNotFound(dotted)),
        };

        let mut candidates = self.matching(schema, name, |a, b| a.eq_ignore_ascii_case(b));
        if candidates.is_empty() {
            candidates = self.matching(schema, name, |a, b| homogenize(a) == homogenize(b));
        }

        match candidates.as_slice() {
            [] => {
                debug!(path = %dotted, "Table not found");
                Err(CatalogError::TableNotFound(dotted))
            }
            [table] => {
                debug!(path = %dotted, table = %table.qualified_name(), "Resolved table");
                Ok(*table)
            }
            many => {
                debug!(path = %dotted, matches = many.len(), "Ambiguous table path");
                Err(CatalogError::AmbiguousTable {
                    path: dotted,
                    candidates: many.iter().map(|t| t.dotted_name()).collect(),
                })
            }
        }
    }
}
