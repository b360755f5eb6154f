//! The profile's rule tables.
//!
//! Each submodule builds the rules specific to one part of the profile.
//! Rules used by more than one table are built once in [`Shared`] and
//! handed to every table that composes them.

pub mod collection;
pub mod common;
pub mod dataset;
pub mod language;
pub mod material;
pub mod object;
pub mod place;

use std::sync::Arc;

use super::context::Context;
use super::registry::{ProfileType, Rule};
use crate::config::ProfileConfig;
use crate::parse::Value;

/// Rules that appear in more than one table.
pub struct Shared {
    pub id: Arc<Rule>,
    pub name: Arc<Rule>,
    pub in_language: Arc<Rule>,
    pub subject_language: Arc<Rule>,
    pub content_location: Arc<Rule>,
    pub communication_mode: Arc<Rule>,
    pub material_in_language: Arc<Rule>,
    pub primary_material_type: Arc<Rule>,
}

impl Shared {
    pub fn new(config: &ProfileConfig) -> Self {
        Shared {
            id: common::id(),
            name: common::name(),
            in_language: common::in_language(),
            subject_language: common::subject_language(),
            content_location: common::content_location(),
            communication_mode: collection::communication_mode(config),
            material_in_language: material::in_language(),
            primary_material_type: material::primary_material_type(),
        }
    }
}

/// The rules of `ty`'s table, in the order they are applied.
pub fn table_rules(ty: ProfileType, shared: &Shared, config: &ProfileConfig) -> Vec<Arc<Rule>> {
    match ty {
        ProfileType::Common => common::table(shared),
        ProfileType::Dataset => dataset::table(config),
        ProfileType::RepositoryCollection => collection::table(shared, config),
        ProfileType::RepositoryObject => object::table(shared, config),
        ProfileType::Language => language::table(config),
        ProfileType::PrimaryMaterial => material::primary_table(shared),
        ProfileType::DerivedMaterial => material::derived_table(shared),
        ProfileType::Annotation => material::annotation_table(config),
        ProfileType::Place => place::place_table(),
        ProfileType::Geometry => place::geometry_table(),
    }
}

// =============================================================================
// Helpers shared by the checks
// =============================================================================

fn has_literal(values: &[Value], name: &str) -> bool {
    values.iter().any(|v| v.as_literal() == Some(name))
}

fn references(values: &[Value]) -> impl Iterator<Item = &str> {
    values.iter().filter_map(Value::as_reference)
}

/// `@type` must include `name`. Always an error, including when a rule
/// borrows this check for a referenced entity.
fn require_type(ctx: &mut Context<'_>, values: &[Value], name: &str) {
    if !has_literal(values, name) {
        ctx.error(format!("@type MUST include “{name}”"));
    }
}

/// Values should be references to terms of a controlled vocabulary.
fn check_vocabulary(ctx: &mut Context<'_>, values: &[Value], terms: &[String]) {
    let property = ctx.property();
    if values.is_empty() {
        ctx.info(format!("Does not have a `{property}` property"));
        return;
    }
    ctx.info(format!("Does have a `{property}` property"));
    for value in values {
        let expected = value
            .as_reference()
            .is_some_and(|id| terms.iter().any(|t| t == id));
        if !expected {
            ctx.warn(format!("{property} value is not expected: {value}"));
        }
    }
}

/// `conformsTo` must reference `expected` and must not reference `excluded`.
fn check_single_profile(
    ctx: &mut Context<'_>,
    values: &[Value],
    expected: (&str, &str),
    excluded: (&str, &str),
) {
    if values.is_empty() {
        ctx.violation("Does not have conformsTo");
        return;
    }
    let (expected_name, expected_url) = expected;
    let (excluded_name, excluded_url) = excluded;
    if !references(values).any(|id| id == expected_url) {
        ctx.violation(format!("Does not reference the {expected_name} profile ({expected_url})"));
    }
    if references(values).any(|id| id == excluded_url) {
        ctx.violation(format!("MUST NOT have {excluded_name} profile"));
    }
}

/// Clause text listing the local names of a vocabulary's terms.
fn term_names(terms: &[String]) -> String {
    terms
        .iter()
        .map(|t| t.rsplit(['#', '/']).next().unwrap_or(t))
        .collect::<Vec<_>>()
        .join(", ")
}
