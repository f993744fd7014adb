// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # refsql - Catalog Layer
//!
//! This crate provides the schema catalog the reference formatter resolves
//! table and column names against. It defines the [`SchemaCatalog`] trait and
//! the descriptors a catalog returns:
//!
//! - [`TableDescriptor`]: a resolved table with its quoted, qualified name
//! - [`ColumnDescriptor`]: a resolved column with its quoted name
//!
//! ## Catalog Sources
//!
//! - **Static Catalogs**: [`StaticCatalog`], built in code or loaded from a
//!   YAML/JSON [`CatalogConfig`]
//! - **Custom Catalogs**: anything implementing [`SchemaCatalog`]
//!
//! Catalogs are read-only while formatting and are shared between threads
//! behind plain references or `Arc`.
//!
//! ## Usage
//!
//! ```rust
//! use refsql_catalog::{Dialect, SchemaCatalog, StaticCatalog};
//! use refsql_catalog::{ColumnMetadata, DataType, TableMetadata};
//!
//! let catalog = StaticCatalog::from_tables(
//!     Dialect::SqlServer,
//!     [TableMetadata::new("Customers", "dbo")
//!         .with_columns(vec![ColumnMetadata::new("Name", DataType::Text)])],
//! )
//! .unwrap();
//!
//! let table = catalog
//!     .find_table(&["dbo".to_string(), "Customers".to_string()])
//!     .unwrap();
//! assert_eq!(table.qualified_name(), "[dbo].[Customers]");
//! assert_eq!(table.find_column("name").unwrap().quoted_name(), "[Name]");
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod names;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use metadata::{
    ColumnDescriptor, ColumnMetadata, DataType, TableDescriptor, TableMetadata, TableType,
};
pub use r#static::StaticCatalog;
pub use r#trait::SchemaCatalog;
pub use refsql_ir::Dialect;
