use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use titanic_features::config::PipelineConfig;
use titanic_features::dataset::{Column, Dataset};
use titanic_features::preprocessing::{NumericalImputer, RareLabelEncoder, Transformer};

const TITLES: [&str; 6] = ["Mr", "Mrs", "Miss", "Master", "Dr", "Rev"];
const DECKS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];
const PORTS: [&str; 3] = ["S", "C", "Q"];

/// Deterministic passenger-shaped table with roughly a fifth of ages and most
/// cabins missing.
fn synthetic_passengers(n: usize) -> Dataset {
    let numeric = |name: &str, f: &dyn Fn(usize) -> Option<f64>| {
        Column::numeric(name, (0..n).map(f).collect())
    };
    let text = |name: &str, f: &dyn Fn(usize) -> Option<String>| {
        Column::categorical(name, (0..n).map(f).collect())
    };

    Dataset::new(vec![
        numeric("pclass", &|i| Some((i % 3 + 1) as f64)),
        numeric("age", &|i| (i % 5 != 0).then(|| (i % 70) as f64 + 0.5)),
        numeric("sibsp", &|i| Some((i % 4) as f64)),
        numeric("parch", &|i| Some((i % 3) as f64)),
        numeric("fare", &|i| Some((i % 200) as f64 * 1.25)),
        text("sex", &|i| Some(if i % 2 == 0 { "male" } else { "female" }.to_string())),
        text("cabin", &|i| {
            (i % 4 == 0).then(|| format!("{}{}", DECKS[i % DECKS.len()], i % 100))
        }),
        text("embarked", &|i| (i % 97 != 0).then(|| PORTS[i % PORTS.len()].to_string())),
        text("title", &|i| Some(TITLES[i % TITLES.len()].to_string())),
    ])
    .expect("synthetic columns have equal length")
}

fn bench_pipeline_fit(c: &mut Criterion) {
    let config = PipelineConfig::default();
    for size in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("pipeline_fit", size), size, |b, &n| {
            let data = synthetic_passengers(n);

            b.iter(|| {
                let mut pipeline = config.build_pipeline().unwrap();
                pipeline.fit(black_box(&data)).unwrap();
                black_box(pipeline);
            });
        });
    }
}

fn bench_pipeline_transform(c: &mut Criterion) {
    let config = PipelineConfig::default();
    for size in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("pipeline_transform", size), size, |b, &n| {
            let train = synthetic_passengers(1000);
            let data = synthetic_passengers(n);
            let mut pipeline = config.build_pipeline().unwrap();
            pipeline.fit(&train).unwrap();

            b.iter(|| {
                let out = pipeline.transform(black_box(&data)).unwrap();
                black_box(out);
            });
        });
    }
}

fn bench_numerical_imputer_fit(c: &mut Criterion) {
    for size in [1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("median_fit", size), size, |b, &n| {
            let data = synthetic_passengers(n);

            b.iter(|| {
                let mut imputer = NumericalImputer::new(["age", "fare"]);
                imputer.fit(black_box(&data)).unwrap();
                black_box(imputer);
            });
        });
    }
}

fn bench_rare_label_fit(c: &mut Criterion) {
    for size in [1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("rare_label_fit", size), size, |b, &n| {
            let data = synthetic_passengers(n);

            b.iter(|| {
                let mut encoder = RareLabelEncoder::new(["title", "embarked"]);
                encoder.fit(black_box(&data)).unwrap();
                black_box(encoder);
            });
        });
    }
}

criterion_group!(
    benches,
    bench_pipeline_fit,
    bench_pipeline_transform,
    bench_numerical_imputer_fit,
    bench_rare_label_fit
);
criterion_main!(benches);
