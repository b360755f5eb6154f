//! Rules for `RepositoryObject`, including the `hasPart` walk into the
//! object's files.

use std::sync::Arc;

use super::{Shared, check_single_profile, has_literal};
use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::registry::{Modality, ProfileType, Rule};

/// Material categories a part can fall into, with the clause reported when
/// an object has no part of that category.
const CATEGORIES: [(ProfileType, &str); 3] = [
    (
        ProfileType::PrimaryMaterial,
        "SHOULD have a hasPart referencing an item of @type File with an additional @type value \
         of PrimaryMaterial",
    ),
    (
        ProfileType::Annotation,
        "MAY have a hasPart referencing an item of @type File with an additional @type value of \
         Annotation",
    ),
    (
        ProfileType::DerivedMaterial,
        "MAY have a hasPart referencing an item of @type File with an additional @type value of \
         DerivedMaterial",
    ),
];

/// Order in which the buckets are validated.
const VALIDATION_ORDER: [ProfileType; 3] = [
    ProfileType::PrimaryMaterial,
    ProfileType::DerivedMaterial,
    ProfileType::Annotation,
];

pub fn table(shared: &Shared, config: &ProfileConfig) -> Vec<Arc<Rule>> {
    vec![
        Arc::clone(&shared.id),
        Rule::new(
            "@type",
            Modality::Must,
            "MUST have a type value of “RepositoryObject” and MUST NOT have a type of \
             “RepositoryCollection”",
            check_type,
        ),
        Arc::clone(&shared.name),
        Rule::new(
            "conformsTo",
            Modality::Must,
            format!(
                "MUST have a conformsTo which references the Object profile URL ({})",
                config.object_profile_url
            ),
            check_conforms_to,
        ),
        Arc::clone(&shared.in_language),
        Arc::clone(&shared.subject_language),
        Arc::clone(&shared.content_location),
        Arc::clone(&shared.communication_mode),
        Rule::new(
            "hasPart",
            Modality::Should,
            "SHOULD have a hasPart property referencing at least one item of type [File, \
             PrimaryMaterial] and MAY have [File, Annotation] and [File, DerivedMaterial] items \
             which are inter-related using annotationOf, derivedFrom properties",
            check_has_part,
        ),
    ]
}

fn check_type(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if !has_literal(values, "RepositoryObject") {
        ctx.violation("@type MUST include “RepositoryObject”");
    }
    if has_literal(values, "RepositoryCollection") {
        ctx.violation("@type MUST NOT include “RepositoryCollection”");
    }
}

fn check_conforms_to(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let config = ctx.config();
    check_single_profile(
        ctx,
        values,
        ("Object", config.object_profile_url.as_str()),
        ("Collection", config.collection_profile_url.as_str()),
    );
}

/// Sort parts into material categories, pass `inLanguage` down to parts that
/// lack it, then validate each category's parts against its table.
fn check_has_part(ctx: &mut Context<'_>, values: &[Value], entity: &Entity) {
    if values.is_empty() {
        ctx.info("Does not have a `hasPart` property");
        return;
    }

    let mut buckets: [Vec<&str>; 3] = Default::default();
    for part in values {
        let Some(id) = part.as_reference() else {
            ctx.warn(format!("hasPart value is not a reference to another entity: {part}"));
            continue;
        };
        let Some(found) = ctx.lookup(id) else {
            ctx.info(format!("hasPart value does not resolve to an entity in this crate: {id}"));
            continue;
        };
        for (bucket, (ty, _)) in buckets.iter_mut().zip(CATEGORIES) {
            if found.has_type(ty.as_str()) {
                bucket.push(id);
            }
        }
        ctx.inherit_property(id, "inLanguage", entity);
    }

    for (bucket, (_, clause)) in buckets.iter().zip(CATEGORIES) {
        if bucket.is_empty() {
            ctx.info(clause);
        }
    }

    for ty in VALIDATION_ORDER {
        let Some(index) = CATEGORIES.iter().position(|(c, _)| *c == ty) else {
            continue;
        };
        for id in &buckets[index] {
            ctx.validate_value_as(ty, &Value::reference(*id));
        }
    }
}
