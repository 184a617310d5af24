use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface_scatter::prelude::*;
use surface_scatter_examples::{init_tracing, render_placements_to_png, RenderConfig, TemplateStyle};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A dozen props, three of each, on flat ground.
    let templates: Vec<Template> = (0..12).map(|i| Template::new(format!("prop_{i:02}"))).collect();
    let area = AreaSpec::from_size(Vec2::new(50.0, 50.0));
    let rule = PlacementRule::new(2.0).with_scale_range(0.8, 1.4);
    let config = GenerateConfig::new(3);

    let mut engine = ScatterEngine::new();
    let mut rng = StdRng::seed_from_u64(2025);
    let result = engine.generate(&templates, &area, &rule, &config, &FlatSurface::new(0.0), &mut rng)?;

    for (id, missing) in result.report.shortfalls() {
        println!("{id}: {missing} short");
    }
    println!(
        "placed {} of {} requested",
        result.report.total_placed,
        templates.len() * config.instances_per_template
    );

    let mut rc = RenderConfig::new((800, 800));
    for (i, t) in templates.iter().enumerate() {
        let shade = 120 + (i as u8) * 10;
        rc.set_template_style(
            t.id.clone(),
            TemplateStyle {
                color: [shade, 200, 255 - shade],
                radius: 6,
            },
        );
    }
    render_placements_to_png(engine.placements(), &area, &rc, "quick-start.png")?;

    Ok(())
}
