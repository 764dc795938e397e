use astro_wheel::chart::{CelestialBody, ChartData, FocusState};
use astro_wheel::rendering::ChartSpecGenerator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NAMES: [&str; 12] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    "Rahu", "Ketu",
];

fn bodies(step: f64) -> Vec<CelestialBody> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| CelestialBody::new(*name, (i as f64) * step))
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let generator = ChartSpecGenerator::new();
    let chart = ChartData::new(123.4, bodies(27.3));
    let transits = bodies(31.1);

    c.bench_function("generate_natal", |b| {
        b.iter(|| generator.generate(black_box(Some(&chart)), None, &FocusState::Idle))
    });

    c.bench_function("generate_with_transits", |b| {
        b.iter(|| {
            generator.generate(
                black_box(Some(&chart)),
                black_box(Some(transits.as_slice())),
                &FocusState::Idle,
            )
        })
    });
}

fn bench_to_svg(c: &mut Criterion) {
    let chart = ChartData::new(0.0, bodies(27.3));
    let spec = astro_wheel::render(Some(&chart), None);

    c.bench_function("to_svg", |b| b.iter(|| black_box(&spec).to_svg()));
}

criterion_group!(benches, bench_generate, bench_to_svg);
criterion_main!(benches);
