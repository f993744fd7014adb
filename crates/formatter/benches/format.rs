//! Reference formatting benchmarks
//!
//! Measures column clause rendering over the standard mock schema.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use refsql_formatter::ReferenceFormatter;
use refsql_function_registry::{Dialect, FunctionRegistry};
use refsql_ir::SimpleReference;
use refsql_test_utils::{MockCatalogBuilder, ReferenceFixtures};

fn bench_single_clause(c: &mut Criterion) {
    let catalog = MockCatalogBuilder::new().with_standard_schema().build_static();
    let registry = FunctionRegistry::new();
    let functions = registry.for_dialect(Dialect::SqlServer);
    let formatter = ReferenceFormatter::new(&catalog, &functions);

    let object: SimpleReference = ReferenceFixtures::customer_name_aliased().into();
    let function: SimpleReference = ReferenceFixtures::sum_of_customer_name().into();
    let math = ReferenceFixtures::product_margin_percent();

    let mut group = c.benchmark_group("format/clause");
    for (name, reference) in [("object", &object), ("function", &function), ("math", &math)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), reference, |b, reference| {
            b.iter(|| black_box(formatter.format_column_clause(reference).unwrap()));
        });
    }
    group.finish();
}

fn bench_deep_math(c: &mut Criterion) {
    let catalog = MockCatalogBuilder::new().with_standard_schema().build_static();
    let formatter = ReferenceFormatter::with_identity_functions(&catalog);

    for depth in [4usize, 16, 64] {
        let mut reference: SimpleReference = ReferenceFixtures::product_price_via("p").into();
        for i in 0..depth {
            reference = reference + i as i64;
        }

        c.bench_with_input(
            BenchmarkId::new("format/deep_math", depth),
            &reference,
            |b, reference| {
                b.iter(|| black_box(formatter.format_column_clause(reference).unwrap()));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_single_clause, bench_deep_math
);

criterion_main!(benches);
