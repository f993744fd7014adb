// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # refsql - Intermediate Representation
//!
//! This crate provides the reference trees that the formatter compiles into SQL
//! fragments, together with the dialect and schema metadata types shared by the
//! catalog and function registry crates.
//!
//! The IR is designed to:
//! - Describe column, function and arithmetic references without any SQL text
//! - Stay dialect-agnostic until formatting time
//! - Make every node kind explicit so dispatch over it is exhaustive

pub mod dialect;
pub mod metadata;
pub mod reference;

// Re-export commonly used types
pub use dialect::{Dialect, DialectFamily, UnknownDialect};
pub use metadata::{ColumnMetadata, DataType, FunctionMetadata, FunctionType, TableMetadata, TableType};
pub use reference::{
    BinaryOp, FunctionReference, Literal, MathReference, ObjectOwner, ObjectReference, Operand,
    SimpleReference,
};
