use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface_scatter::prelude::*;
use surface_scatter_examples::{init_tracing, render_placements_to_png, RenderConfig, TemplateStyle};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let area = AreaSpec::from_size(Vec2::new(40.0, 40.0));
    let rule = PlacementRule::new(3.0).with_align_to_normal(false);
    // Keep what earlier passes placed; each pass fills the gaps.
    let config = GenerateConfig::new(20)
        .with_retry_budget(200)
        .with_clear_before_generate(false)
        .with_group_name("Forest");
    let ground = FlatSurface::new(0.0);

    let mut engine = ScatterEngine::new();
    let mut rng = StdRng::seed_from_u64(99);

    for (pass, template) in ["oak", "birch", "fern"].into_iter().enumerate() {
        let mut rejected = 0usize;
        let mut sink = FnSink::new(|event| match event {
            ScatterEvent::CandidateRejected { .. } => rejected += 1,
            ScatterEvent::Shortfall {
                template_id,
                requested,
                achieved,
                ..
            } => println!("pass {pass}: {template_id} got {achieved}/{requested}"),
            _ => {}
        });
        let templates = [Template::new(template)];
        let request = GenerateRequest::new(&templates, &area, &rule, &config);
        let result = engine.generate_with_events(
            &request,
            &ground,
            &mut rng,
            &mut sink,
        )?;
        drop(sink);
        println!(
            "pass {pass}: +{} {template} ({rejected} rejections), layout '{}' now holds {}",
            result.placements.len(),
            result.group_name,
            engine.placements().len()
        );
    }

    let mut rc = RenderConfig::new((800, 800));
    rc.set_template_style("oak", TemplateStyle { color: [90, 170, 60], radius: 7 });
    rc.set_template_style("birch", TemplateStyle { color: [230, 230, 200], radius: 5 });
    rc.set_template_style("fern", TemplateStyle { color: [60, 120, 50], radius: 3 });
    render_placements_to_png(engine.placements(), &area, &rc, "incremental-scatter.png")?;

    Ok(())
}
