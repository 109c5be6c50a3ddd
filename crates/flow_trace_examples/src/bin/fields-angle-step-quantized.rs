use flow_trace::prelude::*;
use flow_trace_examples::init_tracing;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Quantizing field angles to multiples of PI/4 turns smooth flow into an
/// angular, circuit-board look.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (height, width) = (200usize, 200usize);
    let field = NoiseFieldConfig::new(31)
        .with_kind(NoiseKind::OpenSimplex)
        .with_frequency(0.012)
        .with_angle_step(std::f32::consts::FRAC_PI_4)
        .generate(height, width)?;

    let mut rng = StdRng::seed_from_u64(13);
    let extent = Vec2::new(width as f32, height as f32);
    let seeds: Vec<Vec2> = RandomSeeds::new(900)
        .generate(extent.into(), &mut rng)
        .into_iter()
        .map(Vec2::from)
        .collect();

    let radius = 2.0;
    let tracer = FlowLineTracer::try_new(&field, StepConfig::new(400, 1.0))?
        .with_step_checker(DistanceChecker::new(radius))
        .with_completion_checker(LineLengthChecker::new(6));
    let mut runner = CanvasRunner::with_point_set(tracer, PointSet::for_query_radius(radius));

    let mut surface = SvgSurface::new(width as u32, height as u32).with_stroke("#222222", 1.0);
    runner.run(&seeds, &mut surface)?;
    surface.persist("fields-angle-step-quantized.svg".as_ref())?;

    Ok(())
}
