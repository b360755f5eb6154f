//! The validation engine.
//!
//! A [`Context`] lives for one top-level run. It owns the findings, tracks the
//! recursion path, and knows which entity, table and rule are currently being
//! applied so that every emission is scoped without the checks saying so.

use std::sync::Arc;

use super::registry::{Modality, ProfileType, Registry, Rule};
use super::report::{Finding, Findings, Severity};
use super::resolve::{DISPATCH_PRIORITY, resolve_type};
use crate::config::ProfileConfig;
use crate::parse::{Entity, EntityGraph, Value};

#[derive(Debug, Clone)]
struct Scope {
    entity_id: Option<String>,
    entity_type: ProfileType,
    rule: Option<Arc<Rule>>,
}

pub struct Context<'a> {
    graph: &'a mut dyn EntityGraph,
    registry: &'a Registry,
    findings: Findings,
    /// (entity id, table) pairs on the current recursion path.
    path: Vec<(String, ProfileType)>,
    scope: Scope,
}

impl<'a> Context<'a> {
    pub fn new(graph: &'a mut dyn EntityGraph, registry: &'a Registry) -> Self {
        Context {
            graph,
            registry,
            findings: Findings::new(),
            path: Vec::new(),
            scope: Scope {
                entity_id: None,
                entity_type: ProfileType::Common,
                rule: None,
            },
        }
    }

    pub fn into_findings(self) -> Findings {
        self.findings
    }

    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    pub fn graph(&self) -> &dyn EntityGraph {
        &*self.graph
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn config(&self) -> &'a ProfileConfig {
        self.registry.config()
    }

    /// Property of the rule being applied, `""` outside any rule.
    pub fn property(&self) -> &'static str {
        self.scope.rule.as_ref().map_or("", |r| r.property)
    }

    /// Copy of a locally stored entity.
    pub fn lookup(&self, id: &str) -> Option<Entity> {
        if !self.graph.get_item(id) {
            return None;
        }
        self.graph.get_entity(id).cloned()
    }

    // -------------------------------------------------------------------------
    // Emission
    // -------------------------------------------------------------------------

    pub fn error(&mut self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.emit(Severity::Info, message.into());
    }

    /// Report a breach of the current rule's clause at the severity its
    /// modality carries.
    pub fn violation(&mut self, message: impl Into<String>) {
        let modality = self.scope.rule.as_ref().map_or(Modality::Must, |r| r.modality);
        self.emit(modality.severity(), message.into());
    }

    fn emit(&mut self, severity: Severity, message: String) {
        let (property, clause) = match &self.scope.rule {
            Some(rule) => (rule.property.to_string(), rule.clause.clone()),
            None => (String::new(), String::new()),
        };
        self.findings.push(Finding {
            severity,
            message,
            entity_id: self.scope.entity_id.clone(),
            entity_type: self.scope.entity_type.to_string(),
            property,
            clause,
        });
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Validate `entity` against the table of the first profile type it
    /// declares, or `Common` if it declares none.
    pub fn validate(&mut self, entity: &Entity) {
        let resolution = resolve_type(&entity.types, &DISPATCH_PRIORITY);
        self.validate_as(resolution.resolved, entity);
    }

    /// Apply every rule of `ty`'s table to `entity`.
    ///
    /// Re-entering an (id, table) pair that is already on the recursion path
    /// reports a cycle in the caller's scope and returns without recursing.
    pub fn validate_as(&mut self, ty: ProfileType, entity: &Entity) {
        if let Some(id) = entity.id() {
            if self.path.iter().any(|(p, t)| p == id && *t == ty) {
                tracing::debug!(id, table = %ty, "cycle detected");
                self.info(format!("Cycle detected, skipping re-validation of {id}"));
                return;
            }
            self.path.push((id.to_string(), ty));
        }

        tracing::debug!(id = entity.label(), table = %ty, depth = self.path.len(), "validating entity");
        let outer = std::mem::replace(
            &mut self.scope,
            Scope {
                entity_id: entity.id.clone(),
                entity_type: ty,
                rule: None,
            },
        );

        let registry = self.registry;
        for rule in registry.table(ty).iter() {
            let values = entity.values_for(rule.property);
            self.apply(rule, &values, entity);
        }

        self.scope = outer;
        if entity.id().is_some() {
            self.path.pop();
        }
    }

    /// Validate whatever `value` points at as `ty`.
    ///
    /// Local references are validated as the stored entity, external ones as
    /// a stub carrying only the identifier, and non-references as a stub with
    /// no identifier at all.
    pub fn validate_value_as(&mut self, ty: ProfileType, value: &Value) {
        let entity = match value.as_reference() {
            Some(id) => self.lookup(id).unwrap_or_else(|| Entity::stub(Some(id))),
            None => Entity::stub(None),
        };
        self.validate_as(ty, &entity);
    }

    /// Run `rule` with findings scoped to it.
    pub fn apply(&mut self, rule: &Arc<Rule>, values: &[Value], entity: &Entity) {
        let outer = self.scope.rule.replace(Arc::clone(rule));
        rule.run(self, values, entity);
        self.scope.rule = outer;
    }

    // -------------------------------------------------------------------------
    // Inheritance
    // -------------------------------------------------------------------------

    /// Fill `property` on the entity `child_id` from `parent` when the child
    /// lacks it. Idempotent: the notice is only emitted when a fill happened.
    pub fn inherit_property(&mut self, child_id: &str, property: &str, parent: &Entity) -> bool {
        let values = parent.property(property);
        if values.is_empty() || !self.graph.fill_missing_property(child_id, property, values) {
            return false;
        }
        tracing::debug!(child = child_id, parent = parent.label(), property, "inherited property");
        self.info(format!(
            "`{property}` property not present on {child_id} - inheriting from {}",
            parent.label()
        ));
        true
    }

    /// Report against an entity outside any rule, e.g. a root that is missing.
    pub(crate) fn report_on(&mut self, id: &str, ty: ProfileType, severity: Severity, message: String) {
        let outer = std::mem::replace(
            &mut self.scope,
            Scope {
                entity_id: Some(id.to_string()),
                entity_type: ty,
                rule: None,
            },
        );
        self.emit(severity, message);
        self.scope = outer;
    }
}
