// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SchemaCatalog trait for database schema abstraction
//!
//! This module defines the read-only lookup interface the formatter resolves
//! references against. Lookups are synchronous: a catalog is expected to be
//! fully loaded before formatting starts.

use refsql_ir::Dialect;

use crate::error::CatalogResult;
use crate::metadata::TableDescriptor;

/// Catalog trait for database schema abstraction
///
/// Implementations must be safe to share between threads; formatters only ever
/// borrow a catalog immutably.
///
/// # Examples
///
/// ```rust,ignore
/// use refsql_catalog::{SchemaCatalog, CatalogError};
///
/// fn column_sql(catalog: &impl SchemaCatalog) -> Result<String, CatalogError> {
///     let path = ["dbo".to_string(), "Customers".to_string()];
///     let table = catalog.find_table(&path)?;
///     let column = table.find_column("Name")?;
///     Ok(format!("{}.{}", table.qualified_name(), column.quoted_name()))
/// }
/// ```
pub trait SchemaCatalog: Send + Sync {
    /// Dialect whose quoting rules this catalog applies
    fn dialect(&self) -> Dialect;

    /// Resolve a dotted object path to exactly one table
    ///
    /// # Arguments
    ///
    /// * `path` - Path segments, e.g. `["dbo", "Customers"]` or `["Customers"]`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TableNotFound` if no table matches.
    /// Returns `CatalogError::AmbiguousTable` if more than one table matches.
    fn find_table(&self, path: &[String]) -> CatalogResult<&TableDescriptor>;

    /// Quote an arbitrary identifier for this catalog's dialect
    fn quote_object_name(&self, name: &str) -> String {
        self.dialect().quote_identifier(name)
    }
}
