// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL function names (also used for CockroachDB)

use crate::FunctionMetadata;

/// Get all PostgreSQL function name mappings
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = super::standard_aggregates();
    functions.extend(super::standard_scalars());
    functions.extend([
        FunctionMetadata::new("length").with_description("String length in characters"),
        FunctionMetadata::new("ceiling")
            .with_sql_name("CEIL")
            .with_description("Round up to nearest integer"),
        FunctionMetadata::new("now").with_description("Current date and time"),
    ]);
    functions
}
