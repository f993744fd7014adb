// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # References
//!
//! This module represents the column clause trees handed to the formatter.
//!
//! ## Design
//!
//! A [`SimpleReference`] is one of exactly three node kinds:
//!
//! - **Object references**: a column of a table named by a dotted owner path,
//!   e.g. `dbo.Customers.Name`
//! - **Function references**: a single-argument function applied to another
//!   reference, e.g. `SUM(dbo.Orders.Total)`
//! - **Math references**: a binary arithmetic expression whose operands are
//!   references or literal values
//!
//! ## Reference Hierarchy
//!
//! References form a tree. The formatter trusts the tree's shape and never adds
//! parentheses, so grouping is expressed only through nesting:
//!
//! ```text
//! Math {
//!   left: Reference(Math { left: Price, op: Add, right: Literal(1) }),
//!   op: Multiply,
//!   right: Literal(2)
//! }
//! ```
//!
//! Renders as: `t.Price + 1 * 2`
//!
//! ## Building Math References
//!
//! The arithmetic operators are overloaded on [`SimpleReference`], so trees can
//! be built the way they read:
//!
//! ```
//! use refsql_ir::{BinaryOp, ObjectOwner, ObjectReference, SimpleReference};
//!
//! let price: SimpleReference =
//!     ObjectReference::new(ObjectOwner::new(["dbo", "Products"]), "Price").into();
//! let discounted = price - 10;
//!
//! match discounted {
//!     SimpleReference::Math(math) => assert_eq!(math.operator, BinaryOp::Subtract),
//!     _ => unreachable!(),
//! }
//! ```

use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

/// A node of a column clause tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleReference {
    /// Column reference (e.g., `schema.table.column`)
    Object(ObjectReference),

    /// Single-argument function call (e.g., `SUM(column)`)
    Function(FunctionReference),

    /// Binary arithmetic (e.g., `price - 10`)
    Math(MathReference),
}

impl SimpleReference {
    /// Output alias of this reference, if it has one
    ///
    /// Math references never carry an alias.
    pub fn alias(&self) -> Option<&str> {
        match self {
            SimpleReference::Object(object) => object.alias.as_deref(),
            SimpleReference::Function(function) => function.alias.as_deref(),
            SimpleReference::Math(_) => None,
        }
    }

    /// Depth of the tree rooted at this node
    pub fn depth(&self) -> usize {
        match self {
            SimpleReference::Object(_) => 1,
            SimpleReference::Function(function) => 1 + function.argument.depth(),
            SimpleReference::Math(math) => 1 + math.left.depth().max(math.right.depth()),
        }
    }
}

/// Owner of a column: a dotted table path plus an optional table alias
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectOwner {
    /// Path segments, e.g. `["dbo", "Customers"]`
    pub segments: Vec<String>,
    /// Table alias used as the qualifier instead of the table name
    pub alias: Option<String>,
}

impl ObjectOwner {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            alias: None,
        }
    }

    /// Split a dotted path such as `dbo.Customers` into an owner
    pub fn parse(dotted: &str) -> Self {
        Self::new(dotted.split('.').map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The alias, ignoring blank values
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.trim().is_empty())
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

/// Reference to a column of a catalog table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectReference {
    pub owner: ObjectOwner,
    /// Column name
    pub name: String,
    /// Output alias
    pub alias: Option<String>,
}

impl ObjectReference {
    pub fn new(owner: ObjectOwner, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Function applied to a single argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionReference {
    /// Logical function name, resolved to a SQL name at formatting time
    pub name: String,
    pub argument: Box<SimpleReference>,
    /// Output alias
    pub alias: Option<String>,
}

impl FunctionReference {
    pub fn new(name: impl Into<String>, argument: impl Into<SimpleReference>) -> Self {
        Self {
            name: name.into(),
            argument: Box::new(argument.into()),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Binary arithmetic over two operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathReference {
    pub left: Box<Operand>,
    pub operator: BinaryOp,
    pub right: Box<Operand>,
}

impl MathReference {
    pub fn new(left: impl Into<Operand>, operator: BinaryOp, right: impl Into<Operand>) -> Self {
        Self {
            left: Box::new(left.into()),
            operator,
            right: Box::new(right.into()),
        }
    }
}

/// Operand of a math reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Reference(SimpleReference),
    Literal(Literal),
}

impl Operand {
    fn depth(&self) -> usize {
        match self {
            Operand::Reference(reference) => reference.depth(),
            Operand::Literal(_) => 0,
        }
    }
}

/// Literal value
///
/// Literals render through [`Display`](fmt::Display) verbatim: strings are not
/// quoted and nothing is escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Pre-rendered SQL text
    Raw(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("NULL"),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{}", x),
            Literal::String(s) | Literal::Raw(s) => f.write_str(s),
        }
    }
}

/// Binary operators shared by the query-building layer
///
/// Only the arithmetic subset is valid inside a [`MathReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Logical
    And,
    Or,

    // String
    Like,
}

impl BinaryOp {
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo
        )
    }
}

impl From<ObjectReference> for SimpleReference {
    fn from(reference: ObjectReference) -> Self {
        SimpleReference::Object(reference)
    }
}

impl From<FunctionReference> for SimpleReference {
    fn from(reference: FunctionReference) -> Self {
        SimpleReference::Function(reference)
    }
}

impl From<MathReference> for SimpleReference {
    fn from(reference: MathReference) -> Self {
        SimpleReference::Math(reference)
    }
}

macro_rules! impl_operand_from_reference {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(reference: $ty) -> Self {
                    Operand::Reference(reference.into())
                }
            }
        )*
    };
}

impl_operand_from_reference!(SimpleReference, ObjectReference, FunctionReference, MathReference);

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(Literal::Integer(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Literal(Literal::Integer(value.into()))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Literal(Literal::Float(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Literal(Literal::Boolean(value))
    }
}

macro_rules! impl_math_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Into<Operand>> ops::$trait<T> for SimpleReference {
            type Output = SimpleReference;

            fn $method(self, rhs: T) -> SimpleReference {
                SimpleReference::Math(MathReference::new(self, $op, rhs))
            }
        }
    };
}

impl_math_op!(Add, add, BinaryOp::Add);
impl_math_op!(Sub, sub, BinaryOp::Subtract);
impl_math_op!(Mul, mul, BinaryOp::Multiply);
impl_math_op!(Div, div, BinaryOp::Divide);
impl_math_op!(Rem, rem, BinaryOp::Modulo);
