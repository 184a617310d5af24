#![forbid(unsafe_code)]
//! surface_scatter: scatter object templates across a footprint, snapped onto a surface.
//!
//! Modules:
//! - sampling: candidate point generation inside the footprint
//! - surface: the downward ray query abstraction, built-in surfaces and the resolver
//! - scatter: area and rule configuration, occupied set, transform synthesis, engine, events
//!
//! The host scene supplies a [`surface::SurfaceQuery`]; the engine returns
//! [`scatter::runner::Placement`] records the host turns into instances.
pub mod error;
pub mod sampling;
pub mod scatter;
pub mod surface;

/// Convenient re-exports for common types. Import with `use surface_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{CandidateSampling, UniformAreaSampling};
    pub use crate::scatter::area::AreaSpec;
    pub use crate::scatter::events::{
        EventSink, FnSink, MultiSink, ScatterEvent, ScatterEventKind, VecSink,
    };
    pub use crate::scatter::occupied::OccupiedSet;
    pub use crate::scatter::report::{GenerationReport, TemplateReport};
    pub use crate::scatter::rule::{PlacementRule, ScaleRange};
    pub use crate::scatter::runner::{
        generate, GenerateConfig, GenerateRequest, Placement, RunResult, ScatterEngine,
        DEFAULT_GROUP_NAME,
    };
    pub use crate::scatter::transform::{surface_up, synthesize_transform, PlacementTransform};
    pub use crate::scatter::{Template, TemplateId};
    pub use crate::surface::resolver::{resolve_candidate, SurfaceLookup};
    pub use crate::surface::{
        FlatSurface, FnSurface, HeightfieldSurface, LayerMask, NoSurface, Ray, SurfaceHit,
        SurfaceQuery,
    };
}
