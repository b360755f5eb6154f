//! Rules for `RepositoryCollection`.

use std::sync::Arc;

use super::{Shared, check_single_profile, check_vocabulary, has_literal, term_names};
use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::primitives::is_valid_url;
use crate::validate::registry::{Modality, Rule};
use crate::validate::resolve::{REPOSITORY_TYPES, resolve_type};

pub fn table(shared: &Shared, config: &ProfileConfig) -> Vec<Arc<Rule>> {
    vec![
        Arc::clone(&shared.id),
        Rule::new(
            "@type",
            Modality::Must,
            "MUST have a type value of “RepositoryCollection” and MUST NOT have a type of \
             “RepositoryObject”",
            check_type,
        ),
        Arc::clone(&shared.name),
        Rule::new(
            "conformsTo",
            Modality::Must,
            format!(
                "MUST have a conformsTo which references the Collection profile URL ({})",
                config.collection_profile_url
            ),
            check_conforms_to,
        ),
        Rule::new(
            "description",
            Modality::Must,
            "MUST have at least one `description` value which is a string with one or more \
             characters",
            check_description,
        ),
        Rule::new(
            "hasMember",
            Modality::May,
            "MAY have one or more references to Collection or Object entities, which may be \
             included in the crate or MUST have @id properties which are URIs",
            check_has_member,
        ),
        Arc::clone(&shared.communication_mode),
        Rule::new(
            "linguisticGenre",
            Modality::May,
            format!(
                "MAY have a `linguisticGenre` property which is a reference to one or more of the \
                 Language Data Commons LinguisticGenre Terms: {}",
                term_names(&config.linguistic_genres)
            ),
            check_linguistic_genre,
        ),
        Arc::clone(&shared.in_language),
        Arc::clone(&shared.subject_language),
        Arc::clone(&shared.content_location),
        Rule::new(
            "dateFreeText",
            Modality::May,
            "MAY have a `dateFreeText` property",
            check_date_free_text,
        ),
    ]
}

fn check_type(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if !has_literal(values, "RepositoryCollection") {
        ctx.violation("@type MUST include “RepositoryCollection”");
    }
    if has_literal(values, "RepositoryObject") {
        ctx.violation("@type MUST NOT include “RepositoryObject”");
    }
}

fn check_conforms_to(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let config = ctx.config();
    check_single_profile(
        ctx,
        values,
        ("Collection", config.collection_profile_url.as_str()),
        ("Object", config.object_profile_url.as_str()),
    );
}

fn check_description(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("There is no description property");
        return;
    }
    let non_empty = values
        .iter()
        .filter_map(Value::as_literal)
        .any(|d| !d.is_empty());
    if !non_empty {
        ctx.violation("description MUST be a string with one or more characters");
    }
}

fn check_has_member(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.info("Does not have a `hasMember` property");
        return;
    }
    for member in values {
        let Some(id) = member.as_reference() else {
            ctx.error(format!("hasMember value is not a reference to another entity: {member}"));
            continue;
        };
        match ctx.lookup(id) {
            Some(entity) => {
                let resolution = resolve_type(&entity.types, &REPOSITORY_TYPES);
                if resolution.is_fallback() {
                    ctx.error(format!(
                        "Embedded entities in hasMember MUST include either one of \
                         “RepositoryCollection” or “RepositoryObject” ({id} does not)"
                    ));
                }
                ctx.validate_as(resolution.resolved, &entity);
            }
            None => {
                if !is_valid_url(id) {
                    ctx.error(format!(
                        "hasMember @id is not in this crate and is not a URL ({id})"
                    ));
                }
            }
        }
    }
}

pub fn communication_mode(config: &ProfileConfig) -> Arc<Rule> {
    Rule::new(
        "communicationMode",
        Modality::May,
        format!(
            "MAY have a `communicationMode` property which SHOULD be a reference to one or more of \
             the Language Data Commons Communication Mode Terms: {}",
            term_names(&config.communication_modes)
        ),
        check_communication_mode,
    )
}

fn check_communication_mode(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let terms = &ctx.config().communication_modes;
    check_vocabulary(ctx, values, terms);
}

fn check_linguistic_genre(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let terms = &ctx.config().linguistic_genres;
    check_vocabulary(ctx, values, terms);
}

fn check_date_free_text(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.info("Does not have a dateFreeText");
        return;
    }
    ctx.info("Does have a dateFreeText");
    for value in values {
        if value.as_literal().is_none() {
            ctx.warn(format!("dateFreeText value is not a string: {value}"));
        }
    }
}
