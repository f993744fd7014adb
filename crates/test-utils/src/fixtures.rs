// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Reference tree fixtures over the standard mock schema

use refsql_ir::{FunctionReference, ObjectOwner, ObjectReference, SimpleReference};

/// Sample reference trees for testing
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    // ===== Object references =====

    /// Column reference `owner.column`
    pub fn column(owner: &[&str], column: &str) -> ObjectReference {
        ObjectReference::new(ObjectOwner::new(owner.iter().copied()), column)
    }

    /// `dbo.Customers.Name`
    pub fn customer_name() -> ObjectReference {
        Self::column(&["dbo", "Customers"], "Name")
    }

    /// `dbo.Customers.Name AS CustName`
    pub fn customer_name_aliased() -> ObjectReference {
        Self::customer_name().with_alias("CustName")
    }

    /// `dbo.Products.Price` with the owner aliased as `table_alias`
    pub fn product_price_via(table_alias: &str) -> ObjectReference {
        ObjectReference::new(
            ObjectOwner::new(["dbo", "Products"]).with_alias(table_alias),
            "Price",
        )
    }

    /// `Orders.Total`, ambiguous in the standard schema
    pub fn ambiguous_order_total() -> ObjectReference {
        Self::column(&["Orders"], "Total")
    }

    // ===== Function references =====

    /// `sum(dbo.Customers.Name)`
    pub fn sum_of_customer_name() -> FunctionReference {
        FunctionReference::new("sum", Self::customer_name())
    }

    // ===== Math references =====

    /// `(dbo.Products.Price - dbo.Products.Cost) * 100 / dbo.Products.Price`
    pub fn product_margin_percent() -> SimpleReference {
        let price = || SimpleReference::from(Self::column(&["dbo", "Products"], "Price"));
        let cost = SimpleReference::from(Self::column(&["dbo", "Products"], "Cost"));
        (price() - cost) * 100 / price()
    }
}
