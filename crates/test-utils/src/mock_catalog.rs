// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock catalog implementation for testing
//!
//! Wraps a [`StaticCatalog`] and counts table lookups, with a builder for easy
//! test setup.

use std::sync::atomic::{AtomicUsize, Ordering};

use refsql_catalog::{
    CatalogResult, ColumnMetadata, DataType, Dialect, SchemaCatalog, StaticCatalog,
    TableDescriptor, TableMetadata,
};

/// In-memory mock catalog for testing
#[derive(Debug)]
pub struct MockCatalog {
    inner: StaticCatalog,
    table_lookups: AtomicUsize,
}

impl MockCatalog {
    /// Number of `find_table` calls made so far
    pub fn table_lookups(&self) -> usize {
        self.table_lookups.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &StaticCatalog {
        &self.inner
    }
}

impl SchemaCatalog for MockCatalog {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    fn find_table(&self, path: &[String]) -> CatalogResult<&TableDescriptor> {
        self.table_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_table(path)
    }
}

/// Builder for creating mock catalogs with a fluent API
pub struct MockCatalogBuilder {
    dialect: Dialect,
    database: Option<String>,
    tables: Vec<TableMetadata>,
}

impl Default for MockCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogBuilder {
    /// Create a new builder for a SQL Server catalog
    pub fn new() -> Self {
        Self {
            dialect: Dialect::SqlServer,
            database: None,
            tables: Vec::new(),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Add the standard test schema
    ///
    /// `dbo.Customers`, `dbo.Orders`, `sales.Orders` and `dbo.Products` in a
    /// database named `Shop`. The two `Orders` tables make the bare path
    /// `Orders` ambiguous.
    pub fn with_standard_schema(mut self) -> Self {
        self.database = Some("Shop".to_string());
        self.tables.extend([
            TableMetadata::new("Customers", "dbo").with_columns(vec![
                ColumnMetadata::new("Id", DataType::Integer).with_primary_key(),
                ColumnMetadata::new("Name", DataType::Varchar(Some(100))),
                ColumnMetadata::new("Email", DataType::Varchar(Some(255))).with_nullable(true),
            ]),
            TableMetadata::new("Orders", "dbo").with_columns(vec![
                ColumnMetadata::new("Id", DataType::Integer).with_primary_key(),
                ColumnMetadata::new("CustomerId", DataType::Integer),
                ColumnMetadata::new("Total", DataType::Decimal),
            ]),
            TableMetadata::new("Orders", "sales").with_columns(vec![
                ColumnMetadata::new("Id", DataType::Integer).with_primary_key(),
                ColumnMetadata::new("Total", DataType::Decimal),
            ]),
            TableMetadata::new("Products", "dbo").with_columns(vec![
                ColumnMetadata::new("Id", DataType::Integer).with_primary_key(),
                ColumnMetadata::new("Name", DataType::Varchar(Some(255))),
                ColumnMetadata::new("Price", DataType::Decimal),
                ColumnMetadata::new("Cost", DataType::Decimal).with_nullable(true),
            ]),
        ]);
        self
    }

    /// Add a custom table
    pub fn with_table(mut self, table: TableMetadata) -> Self {
        self.tables.push(table);
        self
    }

    /// Build the mock catalog
    ///
    /// # Panics
    ///
    /// Panics if the tables do not form a valid schema.
    pub fn build(self) -> MockCatalog {
        let mut inner = StaticCatalog::from_tables(self.dialect, self.tables)
            .expect("mock catalog tables must form a valid schema");
        if let Some(database) = self.database {
            inner = inner.with_database(database);
        }
        MockCatalog {
            inner,
            table_lookups: AtomicUsize::new(0),
        }
    }

    /// Build a plain [`StaticCatalog`] with the same tables
    pub fn build_static(self) -> StaticCatalog {
        self.build().inner
    }
}
