// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module defines the types used to describe tables, columns and
//! functions. They carry logical (unquoted) names only; quoting is applied by
//! the catalog for the dialect it serves.

use serde::{Deserialize, Serialize};

/// SQL data types (unified across dialects)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    // Numeric types
    Integer,
    BigInt,
    SmallInt,
    Decimal,
    Float,
    Double,

    // String types
    Varchar(Option<usize>),
    Char(Option<usize>),
    Text,

    // Date/Time types
    Date,
    Time,
    DateTime,
    Timestamp,

    Boolean,
    Uuid,
    Binary,

    // Unknown/Other (with original type name)
    Other(String),
}

impl DataType {
    fn unknown() -> Self {
        DataType::Other("unknown".to_string())
    }
}

/// Table type classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableType {
    #[default]
    Table,
    View,
    Other(String),
}

/// Metadata for a database column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,
    /// Data type
    #[serde(default = "DataType::unknown")]
    pub data_type: DataType,
    /// Whether the column is nullable
    #[serde(default)]
    pub nullable: bool,
    /// Whether this is a primary key column
    #[serde(default)]
    pub is_primary_key: bool,
    /// Column comment/description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnMetadata {
    /// Create a new column metadata with builder pattern
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            is_primary_key: false,
            comment: None,
        }
    }

    /// Builder method: set nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builder method: mark as primary key
    pub fn with_primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Metadata for a database table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Table name
    pub name: String,
    /// Schema name (`dbo`, `public`, ...); `None` for schema-less databases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Column definitions
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
    /// Table type (TABLE, VIEW, ...)
    #[serde(default)]
    pub table_type: TableType,
    /// Table comment/description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TableMetadata {
    /// Create new table metadata with builder pattern
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema.into()),
            columns: Vec::new(),
            table_type: TableType::Table,
            comment: None,
        }
    }

    /// Create table metadata for a table outside any schema
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            ..Self::new(name, String::new())
        }
    }

    /// Builder method: add columns
    pub fn with_columns(mut self, columns: Vec<ColumnMetadata>) -> Self {
        self.columns = columns;
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builder method: set table type
    pub fn with_type(mut self, table_type: TableType) -> Self {
        self.table_type = table_type;
        self
    }

    /// Get column by exact name
    pub fn get_column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Dotted `schema.name` form, unquoted
    pub fn dotted_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}

/// Function classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    #[default]
    Scalar,
    Aggregate,
}

/// Metadata for a function name mapping
///
/// `name` is the logical name used in reference trees; `sql_name` is what the
/// dialect calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Logical function name
    pub name: String,
    /// Dialect-specific SQL name
    pub sql_name: String,
    /// Function type (scalar, aggregate)
    #[serde(default)]
    pub function_type: FunctionType,
    /// Function description/documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FunctionMetadata {
    /// Create new function metadata whose SQL name is the upper-cased logical name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            sql_name: name.to_ascii_uppercase(),
            name,
            function_type: FunctionType::Scalar,
            description: None,
        }
    }

    /// Builder method: set the dialect-specific SQL name
    pub fn with_sql_name(mut self, sql_name: impl Into<String>) -> Self {
        self.sql_name = sql_name.into();
        self
    }

    /// Builder method: set function type
    pub fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = function_type;
        self
    }

    /// Builder method: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let table = TableMetadata::new("Customers", "dbo").with_columns(vec![
            ColumnMetadata::new("Id", DataType::Integer).with_primary_key(),
            ColumnMetadata::new("Name", DataType::Varchar(Some(100))).with_nullable(true),
        ]);

        assert_eq!(table.dotted_name(), "dbo.Customers");
        assert!(table.get_column("Id").is_some_and(|c| c.is_primary_key));
        assert!(table.get_column("id").is_none());
    }

    #[test]
    fn test_unqualified_table() {
        let table = TableMetadata::unqualified("events");
        assert!(table.schema.is_none());
        assert_eq!(table.dotted_name(), "events");
    }

    #[test]
    fn test_function_default_sql_name() {
        let f = FunctionMetadata::new("sum").with_type(FunctionType::Aggregate);
        assert_eq!(f.sql_name, "SUM");

        let f = FunctionMetadata::new("length").with_sql_name("LEN");
        assert_eq!(f.name, "length");
        assert_eq!(f.sql_name, "LEN");
    }

    #[test]
    fn test_column_defaults_from_json() {
        let column: ColumnMetadata = serde_json::from_str(r#"{ "name": "Price" }"#).unwrap();
        assert_eq!(column.data_type, DataType::Other("unknown".to_string()));
        assert!(!column.nullable);
    }
}
