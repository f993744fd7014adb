// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! This module defines SQL dialects and their identifier quoting rules.
//!
//! ## Dialect Families
//!
//! - **MySQL Family**: MySQL, TiDB and MariaDB
//!   - Identifiers are quoted with backticks: `` `orders` ``
//! - **PostgreSQL Family**: PostgreSQL and CockroachDB
//!   - Identifiers are quoted with double quotes: `"orders"`
//! - **SQL Server Family**: Microsoft SQL Server
//!   - Identifiers are quoted with brackets: `[orders]`
//!
//! In every family an embedded closing quote character is escaped by doubling
//! it, and an identifier that is already wrapped in the family's quotes is
//! returned untouched so callers can pass pre-quoted names through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL (5.7, 8.0)
    MySQL,
    /// PostgreSQL (12, 14, 15+)
    #[serde(alias = "postgres")]
    PostgreSQL,
    /// TiDB (5.0, 6.0, 7.0, 8.0)
    TiDB,
    /// MariaDB (10.x, 11.x)
    MariaDB,
    /// CockroachDB (21.x, 22.x, 23.x)
    CockroachDB,
    /// Microsoft SQL Server
    #[serde(alias = "mssql")]
    SqlServer,
}

impl Dialect {
    /// Returns the family this dialect belongs to
    pub fn family(&self) -> DialectFamily {
        match self {
            Dialect::MySQL | Dialect::TiDB | Dialect::MariaDB => DialectFamily::MySQL,
            Dialect::PostgreSQL | Dialect::CockroachDB => DialectFamily::PostgreSQL,
            Dialect::SqlServer => DialectFamily::SqlServer,
        }
    }

    /// Quote an arbitrary identifier for this dialect
    ///
    /// # Examples
    ///
    /// ```
    /// use refsql_ir::Dialect;
    ///
    /// assert_eq!(Dialect::SqlServer.quote_identifier("Name"), "[Name]");
    /// assert_eq!(Dialect::MySQL.quote_identifier("Name"), "`Name`");
    /// assert_eq!(Dialect::PostgreSQL.quote_identifier("Na\"me"), "\"Na\"\"me\"");
    /// ```
    pub fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.family().quote_chars();
        if self.is_quoted(name) {
            return name.to_string();
        }

        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(open);
        for ch in name.chars() {
            if ch == close {
                quoted.push(close);
            }
            quoted.push(ch);
        }
        quoted.push(close);
        quoted
    }

    /// Check whether a name is already wrapped in this dialect's quotes
    pub fn is_quoted(&self, name: &str) -> bool {
        let (open, close) = self.family().quote_chars();
        name.len() >= 2 && name.starts_with(open) && name.ends_with(close)
    }

    /// Lowercase identifier used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySQL => "mysql",
            Dialect::PostgreSQL => "postgresql",
            Dialect::TiDB => "tidb",
            Dialect::MariaDB => "mariadb",
            Dialect::CockroachDB => "cockroachdb",
            Dialect::SqlServer => "sqlserver",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dialect name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown SQL dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySQL),
            "postgresql" | "postgres" => Ok(Dialect::PostgreSQL),
            "tidb" => Ok(Dialect::TiDB),
            "mariadb" => Ok(Dialect::MariaDB),
            "cockroachdb" => Ok(Dialect::CockroachDB),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            other => Err(UnknownDialect(other.to_string())),
        }
    }
}

/// Dialect family groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectFamily {
    MySQL,
    PostgreSQL,
    SqlServer,
}

impl DialectFamily {
    /// Opening and closing identifier quote characters
    pub fn quote_chars(self) -> (char, char) {
        match self {
            DialectFamily::MySQL => ('`', '`'),
            DialectFamily::PostgreSQL => ('"', '"'),
            DialectFamily::SqlServer => ('[', ']'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family() {
        assert_eq!(Dialect::TiDB.family(), DialectFamily::MySQL);
        assert_eq!(Dialect::CockroachDB.family(), DialectFamily::PostgreSQL);
        assert_eq!(Dialect::SqlServer.family(), DialectFamily::SqlServer);
    }

    #[test]
    fn test_quote_escapes_closing_quote() {
        assert_eq!(Dialect::SqlServer.quote_identifier("a]b"), "[a]]b]");
        assert_eq!(Dialect::MariaDB.quote_identifier("a`b"), "`a``b`");
    }

    #[test]
    fn test_quote_leaves_quoted_names() {
        assert_eq!(Dialect::SqlServer.quote_identifier("[dbo]"), "[dbo]");
        assert_eq!(Dialect::PostgreSQL.quote_identifier("\"public\""), "\"public\"");
        // Brackets mean nothing to PostgreSQL
        assert_eq!(Dialect::PostgreSQL.quote_identifier("[x]"), "\"[x]\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MSSQL".parse::<Dialect>(), Ok(Dialect::SqlServer));
        assert_eq!("postgres".parse::<Dialect>(), Ok(Dialect::PostgreSQL));
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for dialect in [Dialect::MySQL, Dialect::CockroachDB, Dialect::SqlServer] {
            assert_eq!(dialect.to_string().parse::<Dialect>(), Ok(dialect));
        }
    }
}
