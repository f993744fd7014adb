// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin SQL function name tables
//!
//! Each dialect module maps logical function names to the names that dialect
//! uses. Names are stored lower-case; lookups are case-insensitive.

pub mod mysql;
pub mod postgresql;
pub mod sqlserver;

use crate::{FunctionMetadata, FunctionType};

/// Aggregates every supported dialect spells the same way
pub(crate) fn standard_aggregates() -> Vec<FunctionMetadata> {
    vec![
        FunctionMetadata::new("count")
            .with_type(FunctionType::Aggregate)
            .with_description("Count the number of rows"),
        FunctionMetadata::new("sum")
            .with_type(FunctionType::Aggregate)
            .with_description("Sum of values"),
        FunctionMetadata::new("avg")
            .with_type(FunctionType::Aggregate)
            .with_description("Average of values"),
        FunctionMetadata::new("average")
            .with_sql_name("AVG")
            .with_type(FunctionType::Aggregate)
            .with_description("Average of values"),
        FunctionMetadata::new("min")
            .with_type(FunctionType::Aggregate)
            .with_description("Minimum value"),
        FunctionMetadata::new("max")
            .with_type(FunctionType::Aggregate)
            .with_description("Maximum value"),
    ]
}

/// Scalar functions every supported dialect spells the same way
pub(crate) fn standard_scalars() -> Vec<FunctionMetadata> {
    vec![
        FunctionMetadata::new("abs").with_description("Absolute value"),
        FunctionMetadata::new("round").with_description("Round to nearest decimal"),
        FunctionMetadata::new("floor").with_description("Round down to nearest integer"),
        FunctionMetadata::new("upper").with_description("Convert to uppercase"),
        FunctionMetadata::new("lower").with_description("Convert to lowercase"),
        FunctionMetadata::new("trim").with_description("Remove leading/trailing whitespace"),
        FunctionMetadata::new("substring").with_description("Extract substring"),
    ]
}
