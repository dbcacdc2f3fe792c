use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_astvisitor::Report;
use libgraphql_schema_ast::parse_schema;
use libgraphql_schema_stats::build_example_document;
use libgraphql_schema_stats::gather_document_stats;
use libgraphql_schema_stats::gather_string_field_stats;
use libgraphql_schema_stats::STAR_WARS_SCHEMA;

fn star_wars_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("star_wars_walk");
    let doc = parse_schema(STAR_WARS_SCHEMA)
        .expect("the Star Wars schema parses");

    group.bench_function("document_stats", |b| {
        b.iter(|| {
            let mut report = Report::new();
            black_box(gather_document_stats(&doc, &mut report))
        })
    });

    group.bench_function("string_field_stats", |b| {
        b.iter(|| {
            let mut report = Report::new();
            black_box(gather_string_field_stats(&doc, &mut report))
        })
    });

    group.bench_function("parse_and_walk", |b| {
        b.iter(|| {
            let doc = parse_schema(black_box(STAR_WARS_SCHEMA))
                .expect("the Star Wars schema parses");
            let mut report = Report::new();
            black_box(gather_document_stats(&doc, &mut report))
        })
    });

    group.finish();
}

fn example_builder(c: &mut Criterion) {
    c.bench_function("build_example_document", |b| {
        b.iter(|| black_box(build_example_document()))
    });
}

criterion_group!(benches, star_wars_walks, example_builder);
criterion_main!(benches);
