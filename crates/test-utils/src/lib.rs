// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for refsql
//!
//! This crate provides common testing components including:
//! - Mock catalog implementations that count lookups
//! - A function name resolver that records what it was asked
//! - Reference tree fixtures over the standard test schema
//! - Assertions on rendered column clauses

pub mod assertions;
pub mod fixtures;
pub mod mock_catalog;
pub mod mock_resolver;

// Re-exports for convenience
pub use assertions::ClauseAssertions;
pub use fixtures::ReferenceFixtures;
pub use mock_catalog::{MockCatalog, MockCatalogBuilder};
pub use mock_resolver::RecordingResolver;
