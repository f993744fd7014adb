// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Function Registry
//!
//! This crate maps logical function names used in reference trees to the names
//! each SQL dialect knows them by.
//!
//! ## Features
//!
//! - The [`FunctionNameResolver`] trait consumed by the formatter
//! - Builtin name tables for MySQL, PostgreSQL and SQL Server
//! - Case-insensitive lookup with pass-through for unknown names
//!
//! ## Usage
//!
//! ```rust
//! use refsql_function_registry::{Dialect, FunctionNameResolver, FunctionRegistry};
//!
//! let registry = FunctionRegistry::new();
//! let sqlserver = registry.for_dialect(Dialect::SqlServer);
//! assert_eq!(sqlserver.convert_to_sql_name("length"), "LEN");
//! assert_eq!(sqlserver.convert_to_sql_name("sum"), "SUM");
//! assert_eq!(sqlserver.convert_to_sql_name("dbo.MyFunc"), "dbo.MyFunc");
//! ```

pub mod builtin;
pub mod registry;
pub mod resolver;

// Re-exports from ir for convenience
pub use refsql_ir::{Dialect, FunctionMetadata, FunctionType};

pub use registry::{DialectFunctions, FunctionRegistry};
pub use resolver::{FunctionNameResolver, IdentityResolver};
