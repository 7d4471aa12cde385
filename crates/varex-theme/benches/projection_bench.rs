use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::{collection, color_var, string_var};
use varex_core::config::ThemeConfig;
use varex_core::models::{ExportCategory, ProjectionContext, VariableSnapshot};
use varex_core::traits::IProjector;
use varex_repository::grouping::group_by_collection;
use varex_repository::CollectionFilter;
use varex_theme::{rgb_to_hex, ThemeProjector};

fn build_snapshot(size: usize, config: &ThemeConfig) -> VariableSnapshot {
    let collections = [
        collection("c1", "Text Colours"),
        collection("c2", "Background Colours"),
        collection("c3", "Fonts"),
    ];
    let mut variables = Vec::with_capacity(size);
    for i in 0..size {
        let shade = (i % 256) as f64 / 255.0;
        let coll = if i % 2 == 0 { "c1" } else { "c2" };
        let name = format!("Group/colour{i}");
        variables.push(color_var(&format!("v{i}"), &name, coll, shade, shade, shade));
    }
    variables.push(string_var("f0", "fontPrimary", "c3", "Inter"));
    let filter = CollectionFilter::new(ExportCategory::Theme, config);
    group_by_collection(variables, &collections, &filter).snapshot
}

fn bench_rgb_to_hex(c: &mut Criterion) {
    c.bench_function("rgb_to_hex", |b| {
        b.iter(|| rgb_to_hex(black_box(0.2), black_box(0.4), black_box(0.6)))
    });
}

fn bench_theme_projection(c: &mut Criterion) {
    let config = ThemeConfig::default();
    let projector = ThemeProjector::new(config.clone());
    let context = ProjectionContext::new("Bench");

    for size in [10, 100, 1000] {
        let snapshot = build_snapshot(size, &config);
        c.bench_function(&format!("project_theme_{size}"), |b| {
            b.iter(|| {
                projector
                    .project(black_box(&snapshot), ExportCategory::Theme, &context)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_rgb_to_hex, bench_theme_projection);
criterion_main!(benches);
