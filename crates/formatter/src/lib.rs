// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # refsql - Reference Formatter
//!
//! This crate compiles reference trees into SQL column clauses. It is the one
//! place where logical table, column and function names are turned into
//! schema-verified, dialect-quoted SQL text.
//!
//! ## Pipeline
//!
//! ```text
//! SimpleReference tree → ReferenceFormatter → SQL fragment
//!                            │         │
//!                   SchemaCatalog   FunctionNameResolver
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use refsql_catalog::{ColumnMetadata, DataType, Dialect, StaticCatalog, TableMetadata};
//! use refsql_formatter::ReferenceFormatter;
//! use refsql_function_registry::FunctionRegistry;
//! use refsql_ir::{FunctionReference, ObjectOwner, ObjectReference};
//!
//! let catalog = StaticCatalog::from_tables(
//!     Dialect::SqlServer,
//!     [TableMetadata::new("Customers", "dbo")
//!         .with_columns(vec![ColumnMetadata::new("Name", DataType::Text)])],
//! )
//! .unwrap();
//! let registry = FunctionRegistry::new();
//! let functions = registry.for_dialect(Dialect::SqlServer);
//!
//! let formatter = ReferenceFormatter::new(&catalog, &functions);
//! let name = ObjectReference::new(ObjectOwner::new(["dbo", "Customers"]), "Name");
//! let length = FunctionReference::new("length", name).with_alias("NameLength");
//!
//! assert_eq!(
//!     formatter.format_column_clause(&length.into()).unwrap(),
//!     "LEN([dbo].[Customers].[Name]) AS [NameLength]"
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod operator;

pub use error::{FormatError, FormatResult};
pub use formatter::ReferenceFormatter;
pub use operator::math_operator_symbol;
