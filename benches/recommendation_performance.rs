use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kartfinder::finder::{AgeBracket, Budget, EnginePreference, Experience};
use kartfinder::{KartFinder, Selections, recommend};
use std::time::Duration;

fn sample_selections() -> Selections {
    Selections {
        age: Some(AgeBracket::Junior),
        experience: Some(Experience::Rental),
        engine: Some(EnginePreference::NotSure),
        budget: Some(Budget::Flexible),
    }
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let selections = sample_selections();
    group.bench_function("recommend_complete_selections", |b| {
        b.iter(|| black_box(recommend(black_box(&selections))));
    });

    let empty = Selections::default();
    group.bench_function("recommend_empty_selections", |b| {
        b.iter(|| black_box(recommend(black_box(&empty))));
    });

    group.bench_function("wizard_walkthrough", |b| {
        b.iter(|| {
            let mut finder = KartFinder::new();
            for answer in ["12-15", "rental", "not-sure", "flexible"] {
                finder.select(black_box(answer));
            }
            black_box(finder.results())
        });
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let recommendation = recommend(&sample_selections());
    group.bench_function("serialize_recommendation", |b| {
        b.iter(|| black_box(serde_json::to_string(&recommendation).unwrap()));
    });

    let json = serde_json::to_string(&sample_selections()).unwrap();
    group.bench_function("deserialize_selections", |b| {
        b.iter(|| black_box(serde_json::from_str::<Selections>(&json).unwrap()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = bench_recommend, bench_serialization
}
criterion_main!(benches);
