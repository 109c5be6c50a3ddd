use flow_trace::prelude::*;
use flow_trace_examples::init_tracing;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Traces the same field twice with different seed layouts to show how
/// much the layout (and its order) shapes the output.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (height, width) = (200usize, 200usize);
    let field = NoiseFieldConfig::new(99)
        .with_frequency(0.01)
        .generate(height, width)?;

    let extent = Vec2::new(width as f32, height as f32);

    let mut rng = StdRng::seed_from_u64(5);
    let random = RandomSeeds::new(800).generate(extent.into(), &mut rng);
    let border = BorderSeeds::new(4).generate(extent.into(), &mut rng);

    for (name, seeds) in [("random", random), ("border", border)] {
        let seeds: Vec<Vec2> = seeds.into_iter().map(Vec2::from).collect();

        let radius = 2.5;
        let tracer = FlowLineTracer::try_new(&field, StepConfig::new(600, 1.0))?
            .with_step_checker(DistanceChecker::new(radius))
            .with_completion_checker(LineLengthChecker::new(8));
        let mut runner = CanvasRunner::with_point_set(tracer, PointSet::for_query_radius(radius));

        let mut surface = SvgSurface::new(width as u32, height as u32).with_stroke("black", 1.0);
        let stats = runner.run(&seeds, &mut surface)?;
        println!(
            "{name}: {} lines committed, {} discarded",
            stats.lines_committed, stats.lines_discarded
        );

        surface.persist(format!("seeds-{name}.svg").as_ref())?;
    }

    Ok(())
}
