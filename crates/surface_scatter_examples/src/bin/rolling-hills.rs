use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface_scatter::prelude::*;
use surface_scatter_examples::{init_tracing, render_placements_to_png, RenderConfig, TemplateStyle};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Hills between -8 and +8 with a lake cut out of the middle.
    let terrain = HeightfieldSurface::new(|x, z| {
        if x * x + z * z < 100.0 {
            return f32::NAN;
        }
        (x * 0.08).sin() * 6.0 + (z * 0.11).cos() * 2.0
    });

    let area = AreaSpec::from_size(Vec2::new(120.0, 80.0))
        .with_min_height(-8.0)
        .with_ray_clearance(40.0)
        .with_max_ray_length(60.0);
    let rule = PlacementRule::new(4.0)
        .with_align_to_normal(true)
        .with_scale_range(0.6, 1.8);
    let config = GenerateConfig::new(25).with_retry_budget(400);
    let templates = [Template::new("pine"), Template::new("boulder")];

    let mut rng = StdRng::seed_from_u64(7);
    let mut engine = ScatterEngine::new();
    let result = engine.generate(&templates, &area, &rule, &config, &terrain, &mut rng)?;

    for tr in &result.report.templates {
        println!(
            "{:>8}: {}/{} placed, {} attempts ({} over water, {} too close)",
            tr.template_id, tr.achieved, tr.requested, tr.attempts, tr.misses, tr.rejections
        );
    }

    let steepest = result
        .placements
        .iter()
        .map(|p| p.normal.angle_between(Vec3::Y).to_degrees())
        .fold(0.0f32, f32::max);
    println!("steepest placement tilt: {steepest:.1} deg");

    let mut rc = RenderConfig::new((1200, 800));
    rc.set_template_style("pine", TemplateStyle { color: [40, 160, 70], radius: 6 });
    rc.set_template_style("boulder", TemplateStyle { color: [150, 150, 160], radius: 5 });
    render_placements_to_png(engine.placements(), &area, &rc, "rolling-hills.png")?;

    Ok(())
}
