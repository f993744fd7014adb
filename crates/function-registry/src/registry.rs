// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::{Dialect, FunctionMetadata, FunctionNameResolver, builtin};
use refsql_ir::DialectFamily;
use std::collections::HashMap;
use tracing::trace;

/// Function registry for builtin SQL function names
///
/// This struct stores and provides lookup for function name mappings
/// across different SQL dialects.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    /// Functions organized by dialect family
    functions: HashMap<DialectFamily, Vec<FunctionMetadata>>,
}

impl FunctionRegistry {
    /// Create a new function registry with all builtin mappings loaded
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refsql_function_registry::{Dialect, FunctionRegistry};
    ///
    /// let registry = FunctionRegistry::new();
    /// assert!(!registry.get_functions(Dialect::MySQL).is_empty());
    /// ```
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        // Load builtin functions for each dialect family
        registry
            .functions
            .insert(DialectFamily::MySQL, builtin::mysql::all_functions());
        registry
            .functions
            .insert(DialectFamily::PostgreSQL, builtin::postgresql::all_functions());
        registry
            .functions
            .insert(DialectFamily::SqlServer, builtin::sqlserver::all_functions());

        registry
    }

    /// Add or replace a mapping for a dialect's family
    pub fn register(&mut self, dialect: Dialect, function: FunctionMetadata) {
        let functions = self.functions.entry(dialect.family()).or_default();
        functions.retain(|f| !f.name.eq_ignore_ascii_case(&function.name));
        functions.push(function);
    }

    /// Get all mappings for a specific dialect
    ///
    /// Returns an empty slice if the dialect has no table.
    pub fn get_functions(&self, dialect: Dialect) -> &[FunctionMetadata] {
        self.functions
            .get(&dialect.family())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lookup a single mapping by logical name (case-insensitive)
    pub fn get_function(&self, dialect: Dialect, name: &str) -> Option<&FunctionMetadata> {
        self.get_functions(dialect)
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Check if a mapping exists for a specific dialect
    pub fn has_function(&self, dialect: Dialect, name: &str) -> bool {
        self.get_function(dialect, name).is_some()
    }

    /// Resolver view bound to one dialect
    pub fn for_dialect(&self, dialect: Dialect) -> DialectFunctions<'_> {
        DialectFunctions {
            registry: self,
            dialect,
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`FunctionRegistry`] bound to one dialect
#[derive(Debug, Clone, Copy)]
pub struct DialectFunctions<'a> {
    registry: &'a FunctionRegistry,
    dialect: Dialect,
}

impl DialectFunctions<'_> {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl FunctionNameResolver for DialectFunctions<'_> {
    fn convert_to_sql_name(&self, logical_name: &str) -> String {
        match self.registry.get_function(self.dialect, logical_name) {
            Some(function) => {
                trace!(logical = logical_name, sql = %function.sql_name, "Mapped function name");
                function.sql_name.clone()
            }
            None => logical_name.to_string(),
        }
    }
}
