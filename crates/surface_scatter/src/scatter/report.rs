//! Per-run accounting: what each template asked for, what it got, and why not.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scatter::TemplateId;

/// Outcome for one entry of the template list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReport {
    pub template_id: TemplateId,
    /// Instances asked for.
    pub requested: usize,
    /// Instances placed. Never exceeds `requested`.
    pub achieved: usize,
    /// Sampling attempts spent. Never exceeds the retry budget.
    pub attempts: usize,
    /// Attempts whose surface ray found no surface.
    pub misses: usize,
    /// Attempts rejected for being too close to an occupied position.
    pub rejections: usize,
}

impl TemplateReport {
    pub fn new(template_id: impl Into<TemplateId>, requested: usize) -> Self {
        Self {
            template_id: template_id.into(),
            requested,
            ..Default::default()
        }
    }

    /// Instances requested but not placed.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.achieved)
    }

    pub fn is_complete(&self) -> bool {
        self.achieved >= self.requested
    }
}

/// Summary of a single `generate` call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// One entry per template, in input order.
    pub templates: Vec<TemplateReport>,
    /// Placements made in this run.
    pub total_placed: usize,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            total_placed: 0,
        }
    }

    pub(crate) fn push(&mut self, template: TemplateReport) {
        self.total_placed += template.achieved;
        self.templates.push(template);
    }

    /// Templates that fell short, with their shortfall.
    pub fn shortfalls(&self) -> impl Iterator<Item = (&TemplateId, usize)> {
        self.templates
            .iter()
            .filter(|t| !t.is_complete())
            .map(|t| (&t.template_id, t.shortfall()))
    }

    pub fn total_shortfall(&self) -> usize {
        self.templates.iter().map(TemplateReport::shortfall).sum()
    }

    pub fn total_attempts(&self) -> usize {
        self.templates.iter().map(|t| t.attempts).sum()
    }

    /// True when every template reached its requested count.
    pub fn is_complete(&self) -> bool {
        self.templates.iter().all(TemplateReport::is_complete)
    }
}
