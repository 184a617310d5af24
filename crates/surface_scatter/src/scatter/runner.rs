//! The placement engine: per-template retry loops over sample, snap, reject, place.
use glam::{Quat, Vec2, Vec3};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::sampling::{CandidateSampling, UniformAreaSampling};
use crate::scatter::area::AreaSpec;
use crate::scatter::events::{EventSink, ScatterEvent, ScatterEventKind};
use crate::scatter::occupied::OccupiedSet;
use crate::scatter::report::{GenerationReport, TemplateReport};
use crate::scatter::rule::PlacementRule;
use crate::scatter::transform::{surface_up, synthesize_transform};
use crate::scatter::{Template, TemplateId};
use crate::surface::resolver::{resolve_candidate, SurfaceLookup};
use crate::surface::SurfaceQuery;

pub const DEFAULT_INSTANCES_PER_TEMPLATE: usize = 3;
pub const DEFAULT_RETRY_BUDGET: usize = 100;
pub const DEFAULT_GROUP_NAME: &str = "GeneratedObjects";

/// A placed instance of a template.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Template this instance was made from.
    pub template_id: TemplateId,
    /// Surface point the instance stands on.
    pub position: Vec3,
    /// Unit surface normal at `position`; +Y when the surface reported a
    /// zero or non-finite normal.
    pub normal: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
    /// World orientation.
    pub rotation: Quat,
    /// Position in the engine's layout since the last clear.
    pub index: usize,
}

/// Per-call knobs of [`ScatterEngine::generate`].
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Instances to place for every template.
    pub instances_per_template: usize,
    /// Maximum sampling attempts per template.
    pub retry_budget: usize,
    /// Drop the previous layout and occupied positions before running.
    pub clear_before_generate: bool,
    /// Name of the group the host should parent generated instances under.
    pub group_name: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            instances_per_template: DEFAULT_INSTANCES_PER_TEMPLATE,
            retry_budget: DEFAULT_RETRY_BUDGET,
            clear_before_generate: true,
            group_name: DEFAULT_GROUP_NAME.to_owned(),
        }
    }
}

impl GenerateConfig {
    /// Creates a new [`GenerateConfig`] placing `instances_per_template` of every template.
    pub fn new(instances_per_template: usize) -> Self {
        Self {
            instances_per_template,
            ..Default::default()
        }
    }

    pub fn with_instances_per_template(mut self, instances_per_template: usize) -> Self {
        self.instances_per_template = instances_per_template;
        self
    }

    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    pub fn with_clear_before_generate(mut self, clear_before_generate: bool) -> Self {
        self.clear_before_generate = clear_before_generate;
        self
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.retry_budget == 0 {
            return Err(Error::InvalidConfig("retry_budget must be > 0".into()));
        }
        Ok(())
    }
}

/// Result of a single `generate` call.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Placements made by this call, in placement order.
    pub placements: Vec<Placement>,
    /// Per-template accounting.
    pub report: GenerationReport,
    /// Group name carried over from [`GenerateConfig::group_name`].
    pub group_name: String,
}

/// Everything a single `generate` call reads.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    /// Templates to place, in order.
    pub templates: &'a [Template],
    /// Footprint and ray-cast settings.
    pub area: &'a AreaSpec,
    /// Separation, orientation and scale rules.
    pub rule: &'a PlacementRule,
    /// Counts, retry budget and clearing behaviour.
    pub config: &'a GenerateConfig,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(
        templates: &'a [Template],
        area: &'a AreaSpec,
        rule: &'a PlacementRule,
        config: &'a GenerateConfig,
    ) -> Self {
        Self {
            templates,
            area,
            rule,
            config,
        }
    }

    /// Validates area, rule and config, returning the first error found.
    pub fn validate(&self) -> Result<()> {
        self.area.validate()?;
        self.rule.validate()?;
        self.config.validate()
    }
}

struct RunContext<'a> {
    request: GenerateRequest<'a>,
    surface: &'a dyn SurfaceQuery,
}

/// Owns the occupied set and the accumulated layout between runs.
///
/// Not safe for concurrent `generate` calls; independent footprints generated in
/// parallel need independent engines.
pub struct ScatterEngine {
    occupied: OccupiedSet,
    layout: Vec<Placement>,
    sampling: Box<dyn CandidateSampling>,
}

impl Default for ScatterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterEngine {
    /// Creates an empty engine drawing candidates with [`UniformAreaSampling`].
    pub fn new() -> Self {
        Self::with_sampling(UniformAreaSampling::new())
    }

    /// Creates an empty engine with a custom candidate sampling strategy.
    pub fn with_sampling<S: CandidateSampling + 'static>(sampling: S) -> Self {
        Self {
            occupied: OccupiedSet::new(),
            layout: Vec::new(),
            sampling: Box::new(sampling),
        }
    }

    /// Positions accepted since the last clear.
    pub fn occupied(&self) -> &OccupiedSet {
        &self.occupied
    }

    /// All placements made since the last clear, across runs.
    pub fn placements(&self) -> &[Placement] {
        &self.layout
    }

    /// Forgets the layout and all occupied positions.
    pub fn clear(&mut self) {
        self.occupied.clear();
        self.layout.clear();
    }

    /// Runs the placement loop for every template, returning this run's placements.
    pub fn generate(
        &mut self,
        templates: &[Template],
        area: &AreaSpec,
        rule: &PlacementRule,
        config: &GenerateConfig,
        surface: &dyn SurfaceQuery,
        rng: &mut impl RngCore,
    ) -> Result<RunResult> {
        let request = GenerateRequest::new(templates, area, rule, config);
        self.generate_with_events(&request, surface, rng, &mut ())
    }

    /// Like [`ScatterEngine::generate`], reporting progress to `sink`.
    ///
    /// Invalid configuration is rejected before any state changes.
    pub fn generate_with_events(
        &mut self,
        request: &GenerateRequest<'_>,
        surface: &dyn SurfaceQuery,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<RunResult> {
        request.validate()?;
        let GenerateRequest {
            templates, config, ..
        } = *request;
        let ctx = RunContext {
            request: *request,
            surface,
        };
        let rng: &mut dyn RngCore = rng;

        if sink.wants(ScatterEventKind::RunStarted) {
            sink.send(ScatterEvent::RunStarted {
                template_count: templates.len(),
                instances_per_template: config.instances_per_template,
                retry_budget: config.retry_budget,
                clear_before_generate: config.clear_before_generate,
            });
        }

        if config.clear_before_generate {
            let removed = self.layout.len();
            self.clear();
            if sink.wants(ScatterEventKind::Cleared) {
                sink.send(ScatterEvent::Cleared {
                    placements_removed: removed,
                });
            }
        }

        if templates.is_empty() {
            warn!("Template list is empty; nothing to place.");
            if sink.wants(ScatterEventKind::Warning) {
                sink.send(ScatterEvent::Warning {
                    context: "templates".into(),
                    message: "Template list is empty; nothing to place".into(),
                });
            }
        }

        info!(
            "Scattering {} templates x {} instances (retry budget {}, {} already occupied).",
            templates.len(),
            config.instances_per_template,
            config.retry_budget,
            self.occupied.len(),
        );

        let mut placements: Vec<Placement> = Vec::new();
        let mut report = GenerationReport::new();

        for (index, template) in templates.iter().enumerate() {
            if sink.wants(ScatterEventKind::TemplateStarted) {
                sink.send(ScatterEvent::TemplateStarted {
                    index,
                    template_id: template.id.clone(),
                });
            }

            let template_report =
                self.place_template(&ctx, index, template, rng, sink, &mut placements);

            if !template_report.is_complete() {
                warn!(
                    "Could not place all {} instances of '{}' ({} placed after {} attempts).",
                    template_report.requested,
                    template.id,
                    template_report.achieved,
                    template_report.attempts,
                );
                if sink.wants(ScatterEventKind::Shortfall) {
                    sink.send(ScatterEvent::Shortfall {
                        template_index: index,
                        template_id: template.id.clone(),
                        requested: template_report.requested,
                        achieved: template_report.achieved,
                    });
                }
            }

            if sink.wants(ScatterEventKind::TemplateFinished) {
                sink.send(ScatterEvent::TemplateFinished {
                    index,
                    report: template_report.clone(),
                });
            }
            report.push(template_report);
        }

        info!(
            "Placed {} objects in total ({} in layout '{}').",
            report.total_placed,
            self.layout.len(),
            config.group_name,
        );

        if sink.wants(ScatterEventKind::RunFinished) {
            sink.send(ScatterEvent::RunFinished {
                report: report.clone(),
            });
        }

        Ok(RunResult {
            placements,
            report,
            group_name: config.group_name.clone(),
        })
    }

    fn place_template(
        &mut self,
        ctx: &RunContext<'_>,
        template_index: usize,
        template: &Template,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
        placements: &mut Vec<Placement>,
    ) -> TemplateReport {
        let GenerateRequest {
            area, rule, config, ..
        } = ctx.request;
        let surface = ctx.surface;
        let mut tr = TemplateReport::new(template.id.clone(), config.instances_per_template);

        while tr.achieved < tr.requested && tr.attempts < config.retry_budget {
            tr.attempts += 1;

            let candidate = Vec2::from(self.sampling.sample(
                area.center.into(),
                area.half_extents.into(),
                rng,
            ));

            let hit = match resolve_candidate(surface, candidate, area) {
                SurfaceLookup::Hit(hit) => hit,
                SurfaceLookup::Miss => {
                    tr.misses += 1;
                    if sink.wants(ScatterEventKind::CandidateMissed) {
                        sink.send(ScatterEvent::CandidateMissed {
                            template_index,
                            candidate,
                        });
                    }
                    continue;
                }
            };

            if !self.occupied.is_clear(hit.point, rule.min_distance) {
                tr.rejections += 1;
                if sink.wants(ScatterEventKind::CandidateRejected) {
                    sink.send(ScatterEvent::CandidateRejected {
                        template_index,
                        position: hit.point,
                    });
                }
                continue;
            }

            let transform = synthesize_transform(hit.normal, rule, rng);
            let placement = Placement {
                template_id: template.id.clone(),
                position: hit.point,
                normal: surface_up(hit.normal),
                scale: transform.scale,
                rotation: transform.rotation,
                index: self.layout.len(),
            };
            debug!("Placed '{}' at {}.", template.id, hit.point);

            self.occupied.insert(hit.point);
            self.layout.push(placement.clone());
            tr.achieved += 1;

            if sink.wants(ScatterEventKind::PlacementMade) {
                sink.send(ScatterEvent::PlacementMade {
                    template_index,
                    placement: placement.clone(),
                });
            }
            placements.push(placement);
        }

        tr
    }
}

/// One-shot run on a fresh engine.
pub fn generate<R: RngCore>(
    templates: &[Template],
    area: &AreaSpec,
    rule: &PlacementRule,
    config: &GenerateConfig,
    surface: &dyn SurfaceQuery,
    rng: &mut R,
) -> Result<RunResult> {
    ScatterEngine::new().generate(templates, area, rule, config, surface, rng)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scatter::events::VecSink;
    use crate::surface::{FlatSurface, FnSurface, LayerMask, NoSurface, Ray, SurfaceHit};

    fn templates(ids: &[&str]) -> Vec<Template> {
        ids.iter().copied().map(Template::from).collect()
    }

    fn area_10() -> AreaSpec {
        AreaSpec::from_size(Vec2::new(10.0, 10.0))
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = GenerateConfig::default();
        assert_eq!(config.instances_per_template, 3);
        assert_eq!(config.retry_budget, 100);
        assert!(config.clear_before_generate);
        assert_eq!(config.group_name, "GeneratedObjects");
    }

    #[test]
    fn zero_retry_budget_is_rejected_without_touching_state() {
        let mut engine = ScatterEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        engine
            .generate(
                &templates(&["a"]),
                &area_10(),
                &PlacementRule::new(0.0),
                &GenerateConfig::new(2),
                &FlatSurface::new(0.0),
                &mut rng,
            )
            .expect("valid run");
        assert_eq!(engine.placements().len(), 2);

        let err = engine
            .generate(
                &templates(&["a"]),
                &area_10(),
                &PlacementRule::new(0.0),
                &GenerateConfig::new(2).with_retry_budget(0),
                &FlatSurface::new(0.0),
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(engine.placements().len(), 2);
        assert_eq!(engine.occupied().len(), 2);
    }

    #[test]
    fn invalid_rule_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate(
            &templates(&["a"]),
            &area_10(),
            &PlacementRule::default().with_scale_range(2.0, 1.0),
            &GenerateConfig::default(),
            &FlatSurface::new(0.0),
            &mut rng,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn empty_template_list_is_a_warning_not_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sink = VecSink::new();
        let result = ScatterEngine::new()
            .generate_with_events(
                &GenerateRequest::new(
                    &[],
                    &area_10(),
                    &PlacementRule::default(),
                    &GenerateConfig::default(),
                ),
                &FlatSurface::new(0.0),
                &mut rng,
                &mut sink,
            )
            .expect("empty list is fine");
        assert!(result.placements.is_empty());
        assert!(result.report.templates.is_empty());
        assert!(sink
            .as_slice()
            .iter()
            .any(|e| e.kind() == ScatterEventKind::Warning));
    }

    #[test]
    fn zero_instances_makes_no_attempts() {
        let queries = Cell::new(0usize);
        let surface = FnSurface::new(|ray: &Ray, _layers: LayerMask| {
            queries.set(queries.get() + 1);
            Some(SurfaceHit::new(ray.origin, Vec3::Y, 0.0))
        });
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate(
            &templates(&["a", "b"]),
            &area_10(),
            &PlacementRule::default(),
            &GenerateConfig::new(0),
            &surface,
            &mut rng,
        )
        .expect("valid run");
        assert!(result.placements.is_empty());
        assert_eq!(result.report.total_shortfall(), 0);
        assert_eq!(result.report.total_attempts(), 0);
        assert_eq!(queries.get(), 0);
    }

    #[test]
    fn query_count_is_bounded_by_retry_budget() {
        let queries = Cell::new(0usize);
        let surface = FnSurface::new(|_ray: &Ray, _layers: LayerMask| {
            queries.set(queries.get() + 1);
            None
        });
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate(
            &templates(&["a", "b", "c"]),
            &area_10(),
            &PlacementRule::default(),
            &GenerateConfig::new(4).with_retry_budget(17),
            &surface,
            &mut rng,
        )
        .expect("valid run");
        assert_eq!(queries.get(), 3 * 17);
        for t in &result.report.templates {
            assert_eq!(t.attempts, 17);
            assert_eq!(t.misses, 17);
            assert_eq!(t.shortfall(), 4);
        }
    }

    #[test]
    fn placements_carry_template_and_sequence_index() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = generate(
            &templates(&["tree", "rock"]),
            &area_10(),
            &PlacementRule::new(0.0).with_scale_range(0.5, 1.5),
            &GenerateConfig::new(2),
            &FlatSurface::new(3.0),
            &mut rng,
        )
        .expect("valid run");

        let ids: Vec<_> = result.placements.iter().map(|p| p.template_id.as_str()).collect();
        assert_eq!(ids, vec!["tree", "tree", "rock", "rock"]);
        for (i, p) in result.placements.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.position.y, 3.0);
            assert_eq!(p.normal, Vec3::Y);
            assert!((0.5..=1.5).contains(&p.scale));
        }
        assert_eq!(result.group_name, DEFAULT_GROUP_NAME);
    }

    #[test]
    fn accumulating_runs_continue_the_sequence() {
        let mut engine = ScatterEngine::new();
        let mut rng = StdRng::seed_from_u64(21);
        let config = GenerateConfig::new(2).with_clear_before_generate(false);
        let rule = PlacementRule::new(0.5);
        for _ in 0..2 {
            engine
                .generate(
                    &templates(&["a"]),
                    &area_10(),
                    &rule,
                    &config,
                    &FlatSurface::new(0.0),
                    &mut rng,
                )
                .expect("valid run");
        }
        let indices: Vec<_> = engine.placements().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(engine.occupied().len(), 4);
    }

    #[test]
    fn clearing_run_reports_removed_layout() {
        let mut engine = ScatterEngine::new();
        let mut rng = StdRng::seed_from_u64(2);
        let rule = PlacementRule::new(0.0);
        engine
            .generate(
                &templates(&["a"]),
                &area_10(),
                &rule,
                &GenerateConfig::new(3),
                &FlatSurface::new(0.0),
                &mut rng,
            )
            .expect("valid run");

        let mut sink = VecSink::new().only(&[ScatterEventKind::Cleared]);
        engine
            .generate_with_events(
                &GenerateRequest::new(
                    &templates(&["a"]),
                    &area_10(),
                    &rule,
                    &GenerateConfig::new(1),
                ),
                &FlatSurface::new(0.0),
                &mut rng,
                &mut sink,
            )
            .expect("valid run");

        let removed: Vec<_> = sink
            .into_inner()
            .into_iter()
            .filter_map(|e| match e {
                ScatterEvent::Cleared { placements_removed } => Some(placements_removed),
                _ => None,
            })
            .collect();
        assert_eq!(removed, vec![3]);
        assert_eq!(engine.placements().len(), 1);
        assert_eq!(engine.placements()[0].index, 0);
    }

    #[test]
    fn events_trace_misses_rejections_and_shortfall() {
        let mut rng = StdRng::seed_from_u64(99);
        let calls = Cell::new(0usize);
        // Alternate miss and hit at one fixed point.
        let surface = FnSurface::new(|_ray: &Ray, _layers: LayerMask| {
            let n = calls.get();
            calls.set(n + 1);
            (n % 2 == 1).then(|| SurfaceHit::new(Vec3::ZERO, Vec3::Y, 1.0))
        });
        let mut sink = VecSink::new();
        let result = ScatterEngine::new()
            .generate_with_events(
                &GenerateRequest::new(
                    &templates(&["a"]),
                    &area_10(),
                    &PlacementRule::new(1.0),
                    &GenerateConfig::new(2).with_retry_budget(6),
                ),
                &surface,
                &mut rng,
                &mut sink,
            )
            .expect("valid run");

        let tr = &result.report.templates[0];
        assert_eq!(tr.attempts, 6);
        assert_eq!(tr.misses, 3);
        assert_eq!(tr.achieved, 1);
        assert_eq!(tr.rejections, 2);

        let kinds: Vec<_> = sink.as_slice().iter().map(ScatterEvent::kind).collect();
        assert_eq!(kinds.first(), Some(&ScatterEventKind::RunStarted));
        assert_eq!(kinds.last(), Some(&ScatterEventKind::RunFinished));
        assert_eq!(
            kinds.iter().filter(|k| **k == ScatterEventKind::CandidateMissed).count(),
            3
        );
        assert_eq!(
            kinds.iter().filter(|k| **k == ScatterEventKind::CandidateRejected).count(),
            2
        );
        assert!(kinds.contains(&ScatterEventKind::Shortfall));
    }

    #[test]
    fn custom_sampling_strategy_is_used() {
        struct Corner;
        impl CandidateSampling for Corner {
            fn sample(
                &self,
                center: mint::Vector2<f32>,
                half_extents: mint::Vector2<f32>,
                _rng: &mut dyn RngCore,
            ) -> mint::Vector2<f32> {
                mint::Vector2 {
                    x: center.x + half_extents.x,
                    y: center.y + half_extents.y,
                }
            }
        }

        let mut engine = ScatterEngine::with_sampling(Corner);
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine
            .generate(
                &templates(&["a"]),
                &area_10(),
                &PlacementRule::new(1.0),
                &GenerateConfig::new(3).with_retry_budget(10),
                &FlatSurface::new(0.0),
                &mut rng,
            )
            .expect("valid run");
        assert_eq!(result.placements.len(), 1);
        assert_eq!(result.placements[0].position, Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(result.report.templates[0].rejections, 9);
    }

    #[test]
    fn no_surface_places_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = generate(
            &templates(&["a"]),
            &area_10(),
            &PlacementRule::default(),
            &GenerateConfig::new(3).with_retry_budget(5),
            &NoSurface,
            &mut rng,
        )
        .expect("valid run");
        assert!(result.placements.is_empty());
        assert_eq!(result.report.templates[0].shortfall(), 3);
    }

    fn place_one_on_normal(normal: Vec3) -> Placement {
        let surface = FnSurface::new(move |ray: &Ray, _layers: LayerMask| {
            Some(SurfaceHit::new(ray.point_at(10.0), normal, 10.0))
        });
        let mut rng = StdRng::seed_from_u64(21);
        let result = generate(
            &templates(&["a"]),
            &area_10(),
            &PlacementRule::new(0.0),
            &GenerateConfig::new(1),
            &surface,
            &mut rng,
        )
        .expect("valid run");
        result.placements[0].clone()
    }

    #[test]
    fn non_finite_normal_is_stored_as_up() {
        let p = place_one_on_normal(Vec3::new(f32::NAN, 1.0, 0.0));
        assert_eq!(p.normal, Vec3::Y);
        assert!(p.rotation.is_finite());
        assert!((p.rotation * Vec3::Y).abs_diff_eq(p.normal, 1e-5));
    }

    #[test]
    fn non_unit_normal_is_stored_normalized() {
        let p = place_one_on_normal(Vec3::new(0.0, 0.0, 3.0));
        assert!(p.normal.abs_diff_eq(Vec3::Z, 1e-6));
        assert!((p.rotation * Vec3::Y).abs_diff_eq(p.normal, 1e-5));
    }

    #[test]
    fn unaligned_placement_still_reports_surface_normal() {
        let tilted = Vec3::new(1.0, 1.0, 0.0);
        let surface = FnSurface::new(move |ray: &Ray, _layers: LayerMask| {
            Some(SurfaceHit::new(ray.point_at(10.0), tilted * 2.0, 10.0))
        });
        let mut rng = StdRng::seed_from_u64(22);
        let result = generate(
            &templates(&["a"]),
            &area_10(),
            &PlacementRule::new(0.0).with_align_to_normal(false),
            &GenerateConfig::new(1),
            &surface,
            &mut rng,
        )
        .expect("valid run");
        let p = &result.placements[0];
        assert!(p.normal.abs_diff_eq(tilted.normalize(), 1e-6));
        assert!((p.rotation * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-5));
    }
}
