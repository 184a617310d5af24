//! Scatter pipeline: sample a candidate, snap it to the surface, enforce separation, place.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod area;
pub mod events;
pub mod occupied;
pub mod report;
pub mod rule;
pub mod runner;
pub mod transform;

pub type TemplateId = String;

/// A kind of object to place. The engine treats the id as opaque; the host
/// resolves it to whatever asset it instantiates.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    pub id: TemplateId,
}

impl Template {
    pub fn new(id: impl Into<TemplateId>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Template::new(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::new(value)
    }
}
