// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Reference Formatter
//!
//! Walks a [`SimpleReference`] tree and renders it as a SQL column clause.
//!
//! | Reference | Rendering |
//! |-----------|-----------|
//! | Object    | `<qualifier>.<column>[ AS <alias>]` |
//! | Function  | `<sql name>(<argument>)[ AS <alias>]` |
//! | Math      | `<left> <symbol> <right>` |
//!
//! The qualifier is the quoted owner alias when the owner has one, otherwise
//! the table's qualified name from the catalog. Math expressions are rendered
//! exactly as nested, without added parentheses.

use refsql_catalog::SchemaCatalog;
use refsql_function_registry::{FunctionNameResolver, IdentityResolver};
use refsql_ir::{FunctionReference, MathReference, ObjectReference, Operand, SimpleReference};
use tracing::{instrument, trace};

use crate::error::FormatResult;
use crate::operator::math_operator_symbol;

/// Formats reference trees against a catalog and a function name resolver
///
/// Both collaborators are borrowed for the formatter's lifetime and only read.
/// Nothing is cached between calls, so a formatter always reflects the
/// catalog's current contents.
#[derive(Debug)]
pub struct ReferenceFormatter<'a, C: ?Sized, F: ?Sized> {
    catalog: &'a C,
    functions: &'a F,
}

impl<C: ?Sized, F: ?Sized> Clone for ReferenceFormatter<'_, C, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, F: ?Sized> Copy for ReferenceFormatter<'_, C, F> {}

impl<'a, C> ReferenceFormatter<'a, C, IdentityResolver>
where
    C: SchemaCatalog + ?Sized,
{
    /// Create a formatter that uses function names unchanged
    pub fn with_identity_functions(catalog: &'a C) -> Self {
        Self {
            catalog,
            functions: &IdentityResolver,
        }
    }
}

impl<'a, C, F> ReferenceFormatter<'a, C, F>
where
    C: SchemaCatalog + ?Sized,
    F: FunctionNameResolver + ?Sized,
{
    pub fn new(catalog: &'a C, functions: &'a F) -> Self {
        Self { catalog, functions }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// Render a reference as a SQL column clause
    ///
    /// # Errors
    ///
    /// - `FormatError::TableNotFound` if an object owner resolves to zero or
    ///   several tables
    /// - `FormatError::ColumnNotFound` if a column is not in its table
    /// - `FormatError::InvalidOperator` if a math reference uses a
    ///   non-arithmetic operator
    ///
    /// The first error anywhere in the tree aborts the whole call.
    #[instrument(level = "trace", skip_all)]
    pub fn format_column_clause(&self, reference: &SimpleReference) -> FormatResult<String> {
        match reference {
            SimpleReference::Object(object) => self.format_object(object),
            SimpleReference::Function(function) => self.format_function(function),
            SimpleReference::Math(math) => self.format_math(math),
        }
    }

    /// Render several references as a comma-separated select list
    pub fn format_column_list(&self, references: &[SimpleReference]) -> FormatResult<String> {
        let clauses = references
            .iter()
            .map(|reference| self.format_column_clause(reference))
            .collect::<FormatResult<Vec<_>>>()?;
        Ok(clauses.join(", "))
    }

    fn format_object(&self, reference: &ObjectReference) -> FormatResult<String> {
        let table = self.catalog.find_table(reference.owner.segments())?;
        let qualifier = match reference.owner.alias() {
            Some(alias) => self.catalog.quote_object_name(alias),
            None => table.qualified_name().to_string(),
        };
        let column = table.find_column(&reference.name)?;

        trace!(table = %table.qualified_name(), column = %column.quoted_name(), "Resolved column");

        let clause = format!("{}.{}", qualifier, column.quoted_name());
        Ok(self.append_alias(clause, reference.alias.as_deref()))
    }

    fn format_function(&self, reference: &FunctionReference) -> FormatResult<String> {
        let sql_name = self.functions.convert_to_sql_name(&reference.name);
        let argument = self.format_column_clause(&reference.argument)?;

        let clause = format!("{}({})", sql_name, argument);
        Ok(self.append_alias(clause, reference.alias.as_deref()))
    }

    fn format_math(&self, reference: &MathReference) -> FormatResult<String> {
        let left = self.format_operand(&reference.left)?;
        let symbol = math_operator_symbol(reference.operator)?;
        let right = self.format_operand(&reference.right)?;

        Ok(format!("{} {} {}", left, symbol, right))
    }

    fn format_operand(&self, operand: &Operand) -> FormatResult<String> {
        match operand {
            Operand::Reference(reference) => self.format_column_clause(reference),
            Operand::Literal(literal) => Ok(literal.to_string()),
        }
    }

    fn append_alias(&self, clause: String, alias: Option<&str>) -> String {
        match alias {
            Some(alias) => format!("{} AS {}", clause, self.catalog.quote_object_name(alias)),
            None => clause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;
    use refsql_catalog::{ColumnMetadata, DataType, Dialect, StaticCatalog, TableMetadata};
    use refsql_ir::{BinaryOp, Literal, ObjectOwner};

    fn catalog() -> StaticCatalog {
        StaticCatalog::from_tables(
            Dialect::SqlServer,
            [TableMetadata::new("Products", "dbo").with_columns(vec![
                ColumnMetadata::new("Price", DataType::Decimal),
                ColumnMetadata::new("Cost", DataType::Decimal),
            ])],
        )
        .unwrap()
    }

    fn column(name: &str) -> SimpleReference {
        ObjectReference::new(ObjectOwner::new(["dbo", "Products"]), name).into()
    }

    #[test]
    fn test_object_without_alias() {
        let catalog = catalog();
        let formatter = ReferenceFormatter::with_identity_functions(&catalog);
        assert_eq!(
            formatter.format_column_clause(&column("Price")).unwrap(),
            "[dbo].[Products].[Price]"
        );
    }

    #[test]
    fn test_math_literal_operand() {
        let catalog = catalog();
        let formatter = ReferenceFormatter::with_identity_functions(&catalog);
        let margin = column("Price") - column("Cost");
        assert_eq!(
            formatter.format_column_clause(&margin).unwrap(),
            "[dbo].[Products].[Price] - [dbo].[Products].[Cost]"
        );

        let scaled = SimpleReference::Math(MathReference::new(
            Literal::Float(1.5),
            BinaryOp::Multiply,
            column("Cost"),
        ));
        assert_eq!(
            formatter.format_column_clause(&scaled).unwrap(),
            "1.5 * [dbo].[Products].[Cost]"
        );
    }

    #[test]
    fn test_invalid_operator_fails_whole_call() {
        let catalog = catalog();
        let formatter = ReferenceFormatter::with_identity_functions(&catalog);
        let comparison =
            SimpleReference::Math(MathReference::new(column("Price"), BinaryOp::Equal, 0));
        assert_eq!(
            formatter.format_column_clause(&comparison),
            Err(FormatError::InvalidOperator("Equal".to_string()))
        );
    }

    #[test]
    fn test_column_list() {
        let catalog = catalog();
        let formatter = ReferenceFormatter::with_identity_functions(&catalog);
        let list = formatter
            .format_column_list(&[column("Price"), column("Cost")])
            .unwrap();
        assert_eq!(list, "[dbo].[Products].[Price], [dbo].[Products].[Cost]");
        assert_eq!(formatter.format_column_list(&[]).unwrap(), "");
    }
}
