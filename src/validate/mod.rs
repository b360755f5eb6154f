//! Profile validation.
//!
//! Validates a loaded crate graph against the LDaC profile, starting from
//! the root Dataset and following references into collections, objects,
//! their parts, languages and places.

pub mod context;
pub mod primitives;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod rules;

pub use context::Context;
pub use registry::{Modality, ProfileType, Registry, Rule, RuleTable, default_registry};
pub use report::{Finding, Findings, Severity};
pub use resolve::{Resolution, resolve_type};

use crate::parse::{CrateGraph, EntityGraph};

/// Validate the entity `root_id` as the root Dataset of the profile.
///
/// The only mutation applied to `graph` is the `inLanguage` inheritance from
/// repository objects to their parts.
pub fn validate_profile(graph: &mut dyn EntityGraph, root_id: &str) -> Findings {
    Validator::new(default_registry()).validate_profile(graph, root_id)
}

/// Validate a crate from the root its metadata descriptor names.
pub fn validate_crate(graph: &mut CrateGraph) -> Findings {
    Validator::new(default_registry()).validate_crate(graph)
}

/// Runs validations against one registry. Cheap to create; the registry can
/// be shared between validators on different threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Validator { registry }
    }

    pub fn validate_profile(&self, graph: &mut dyn EntityGraph, root_id: &str) -> Findings {
        let root = graph.get_entity(root_id).cloned();
        let mut ctx = Context::new(graph, self.registry);
        match root {
            Some(root) => ctx.validate_as(ProfileType::Dataset, &root),
            None => ctx.report_on(
                root_id,
                ProfileType::Dataset,
                Severity::Error,
                format!("Root dataset '{root_id}' is not in the crate"),
            ),
        }
        ctx.into_findings()
    }

    pub fn validate_crate(&self, graph: &mut CrateGraph) -> Findings {
        let root_id = graph.root_id().to_string();
        self.validate_profile(graph, &root_id)
    }

    /// Validate any entity against the table its declared types select.
    /// Returns no findings if `id` is not in the graph.
    pub fn validate_entity(&self, graph: &mut dyn EntityGraph, id: &str) -> Findings {
        let Some(entity) = graph.get_entity(id).cloned() else {
            return Findings::new();
        };
        let mut ctx = Context::new(graph, self.registry);
        ctx.validate(&entity);
        ctx.into_findings()
    }
}
