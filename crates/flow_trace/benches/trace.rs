use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use flow_trace::prelude::{
    CanvasRunner, DistanceChecker, FlowLineTracer, LineLengthChecker, NoiseFieldConfig, PointSet,
    RandomSeeds, SeedLayout, StepConfig,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_canvas_run(c: &mut Criterion) {
    let size = 128usize;
    let radius = 2.0;

    let field = NoiseFieldConfig::new(2025)
        .with_frequency(0.02)
        .generate(size, size)
        .expect("field generation");

    let mut rng = StdRng::seed_from_u64(42);
    let seeds: Vec<Vec2> = RandomSeeds::new(512)
        .generate(
            mint::Vector2 {
                x: size as f32,
                y: size as f32,
            },
            &mut rng,
        )
        .into_iter()
        .map(Vec2::from)
        .collect();

    c.bench_function("canvas_run_128", |b| {
        b.iter(|| {
            let tracer = FlowLineTracer::try_new(&field, StepConfig::new(200, 1.0))
                .expect("valid config")
                .with_step_checker(DistanceChecker::new(radius))
                .with_completion_checker(LineLengthChecker::new(5));
            let mut runner =
                CanvasRunner::with_point_set(tracer, PointSet::for_query_radius(radius));
            let stats = runner.run(&seeds, &mut ()).expect("in-bounds seeds");
            black_box(stats)
        })
    });
}

criterion_group!(benches, bench_canvas_run);
criterion_main!(benches);
