use flow_trace::prelude::*;
use flow_trace_examples::init_tracing;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Canvas size in cells.
    let (height, width) = (256usize, 256usize);

    // Smooth Perlin flow; lower the frequency for broader swirls.
    let field = NoiseFieldConfig::new(2025)
        .with_frequency(0.008)
        .generate(height, width)?;

    let mut rng = StdRng::seed_from_u64(7);
    let extent = Vec2::new(width as f32, height as f32);
    let seeds: Vec<Vec2> = RandomSeeds::new(1024)
        .generate(extent.into(), &mut rng)
        .into_iter()
        .map(Vec2::from)
        .collect();

    let radius = 3.0;
    let tracer = FlowLineTracer::try_new(&field, StepConfig::new(1000, 1.0))?
        .with_step_checker(DistanceChecker::new(radius))
        .with_completion_checker(LineLengthChecker::new(10));

    let mut runner = CanvasRunner::with_point_set(tracer, PointSet::for_query_radius(radius));
    let mut surface = SvgSurface::new(width as u32, height as u32).with_stroke("black", 1.0);

    runner.run(&seeds, &mut surface)?;
    surface.persist("perlin-flow-basic.svg".as_ref())?;

    Ok(())
}
