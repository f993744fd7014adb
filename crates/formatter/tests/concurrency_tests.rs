// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Formatting from many threads against one shared catalog

use std::sync::Arc;

use refsql_catalog::StaticCatalog;
use refsql_formatter::ReferenceFormatter;
use refsql_function_registry::{Dialect, FunctionRegistry};
use refsql_ir::SimpleReference;
use refsql_test_utils::{MockCatalogBuilder, ReferenceFixtures};

fn select_list() -> Vec<SimpleReference> {
    vec![
        ReferenceFixtures::customer_name_aliased().into(),
        ReferenceFixtures::sum_of_customer_name().into(),
        ReferenceFixtures::product_margin_percent(),
    ]
}

fn format_all(catalog: &StaticCatalog, registry: &FunctionRegistry) -> String {
    let functions = registry.for_dialect(Dialect::SqlServer);
    ReferenceFormatter::new(catalog, &functions)
        .format_column_list(&select_list())
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_formatting_is_deterministic() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let catalog = Arc::new(MockCatalogBuilder::new().with_standard_schema().build_static());
    let registry = Arc::new(FunctionRegistry::new());
    let expected = format_all(&catalog, &registry);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let registry = Arc::clone(&registry);
            tokio::task::spawn_blocking(move || format_all(&catalog, &registry))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }

    assert!(expected.starts_with("[dbo].[Customers].[Name] AS [CustName], SUM("));
}
