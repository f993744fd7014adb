// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function name resolution
//!
//! The formatter turns logical function names into dialect SQL names through
//! [`FunctionNameResolver`]. Resolution is total: a name the resolver does not
//! know is passed through as-is.

/// Maps a logical function name to the SQL dialect's function name
pub trait FunctionNameResolver: Send + Sync {
    fn convert_to_sql_name(&self, logical_name: &str) -> String;
}

/// Resolver that returns every name unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl FunctionNameResolver for IdentityResolver {
    fn convert_to_sql_name(&self, logical_name: &str) -> String {
        logical_name.to_string()
    }
}
