// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Function name resolver that records its calls

use std::collections::HashMap;
use std::sync::Mutex;

use refsql_function_registry::FunctionNameResolver;

/// Resolver backed by a fixed map that remembers every name it was asked for
///
/// Names missing from the map are upper-cased.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    names: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a logical name to a fixed SQL name
    pub fn with_name(mut self, logical: impl Into<String>, sql: impl Into<String>) -> Self {
        self.names.insert(logical.into(), sql.into());
        self
    }

    /// Logical names resolved so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl FunctionNameResolver for RecordingResolver {
    fn convert_to_sql_name(&self, logical_name: &str) -> String {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(logical_name.to_string());
        }
        self.names
            .get(logical_name)
            .cloned()
            .unwrap_or_else(|| logical_name.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls() {
        let resolver = RecordingResolver::new().with_name("length", "LEN");
        assert_eq!(resolver.convert_to_sql_name("length"), "LEN");
        assert_eq!(resolver.convert_to_sql_name("sum"), "SUM");
        assert_eq!(resolver.calls(), vec!["length", "sum"]);
    }
}
