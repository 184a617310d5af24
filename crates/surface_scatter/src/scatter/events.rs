//! Event types and sinks for observing scatter runs.
//!
//! This module defines [`ScatterEvent`] and a set of sinks to emit, collect, or
//! forward events while executing
//! [`crate::scatter::runner::ScatterEngine::generate_with_events`]. Observing a
//! run is optional; passing `&mut ()` discards everything.
use glam::{Vec2, Vec3};

use crate::scatter::report::{GenerationReport, TemplateReport};
use crate::scatter::runner::Placement;
use crate::scatter::TemplateId;

/// Describes events emitted by scatter operations.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum ScatterEvent {
    /// Emitted after validation, before any sampling.
    RunStarted {
        /// Number of entries in the template list.
        template_count: usize,
        /// Instances requested per template.
        instances_per_template: usize,
        /// Attempts allowed per template.
        retry_budget: usize,
        /// Whether the engine state is cleared before this run.
        clear_before_generate: bool,
    },

    /// Emitted when prior layout and occupied positions were discarded.
    Cleared {
        /// Number of placements dropped from the layout.
        placements_removed: usize,
    },

    /// Emitted when a template starts its retry loop.
    TemplateStarted {
        /// Index of the template in the input list.
        index: usize,
        /// The template id.
        template_id: TemplateId,
    },

    /// Emitted when the surface ray below a candidate found no surface.
    CandidateMissed {
        /// Index of the template being placed.
        template_index: usize,
        /// Candidate position as (x, z).
        candidate: Vec2,
    },

    /// Emitted when a surface hit was too close to an occupied position.
    CandidateRejected {
        /// Index of the template being placed.
        template_index: usize,
        /// The rejected surface position.
        position: Vec3,
    },

    /// Emitted when a placement is made.
    PlacementMade {
        /// Index of the template that produced the placement.
        template_index: usize,
        /// The placement data.
        placement: Placement,
    },

    /// Emitted when a template ran out of retries before reaching its count.
    Shortfall {
        /// Index of the template in the input list.
        template_index: usize,
        /// The template id.
        template_id: TemplateId,
        /// Instances asked for.
        requested: usize,
        /// Instances placed.
        achieved: usize,
    },

    /// Emitted when a template's retry loop ends.
    TemplateFinished {
        /// Index of the template in the input list.
        index: usize,
        /// Accounting for this template.
        report: TemplateReport,
    },

    /// Emitted when the whole run finishes.
    RunFinished {
        /// Report for all templates.
        report: GenerationReport,
    },

    /// Non-fatal warning generated during scatter.
    Warning {
        /// Context string (e.g. template id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`ScatterEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScatterEventKind {
    RunStarted,
    Cleared,
    TemplateStarted,
    CandidateMissed,
    CandidateRejected,
    PlacementMade,
    Shortfall,
    TemplateFinished,
    RunFinished,
    Warning,
}

impl ScatterEvent {
    pub fn kind(&self) -> ScatterEventKind {
        match self {
            ScatterEvent::RunStarted { .. } => ScatterEventKind::RunStarted,
            ScatterEvent::Cleared { .. } => ScatterEventKind::Cleared,
            ScatterEvent::TemplateStarted { .. } => ScatterEventKind::TemplateStarted,
            ScatterEvent::CandidateMissed { .. } => ScatterEventKind::CandidateMissed,
            ScatterEvent::CandidateRejected { .. } => ScatterEventKind::CandidateRejected,
            ScatterEvent::PlacementMade { .. } => ScatterEventKind::PlacementMade,
            ScatterEvent::Shortfall { .. } => ScatterEventKind::Shortfall,
            ScatterEvent::TemplateFinished { .. } => ScatterEventKind::TemplateFinished,
            ScatterEvent::RunFinished { .. } => ScatterEventKind::RunFinished,
            ScatterEvent::Warning { .. } => ScatterEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`ScatterEvent`]s.
pub trait EventSink {
    /// Whether the sink cares about events of `kind`. The engine skips
    /// building events nobody wants.
    fn wants(&self, _kind: ScatterEventKind) -> bool {
        true
    }

    fn send(&mut self, event: ScatterEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = ScatterEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn wants(&self, _kind: ScatterEventKind) -> bool {
        false
    }

    #[inline]
    fn send(&mut self, _event: ScatterEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ScatterEvent>,
    only: Option<Vec<ScatterEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Restricts collection to the given kinds.
    pub fn only(mut self, kinds: &[ScatterEventKind]) -> Self {
        self.only = Some(kinds.to_vec());
        self
    }

    pub fn into_inner(self) -> Vec<ScatterEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ScatterEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    fn wants(&self, kind: ScatterEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }

    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }
}

/// Fan-out sink that forwards each event to all contained sinks that want it.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn wants(&self, kind: ScatterEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }

    fn send(&mut self, event: ScatterEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for sink in &mut self.sinks[..last_idx] {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }
}
