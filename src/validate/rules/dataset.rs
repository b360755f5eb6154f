//! Rules for the root Dataset.
//!
//! The `@type` rule here is the dispatch point of the whole profile: it
//! decides whether the root is a collection or an object, runs the
//! graph-wide property name audit, and re-applies the root against the
//! resolved table.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{has_literal, references};
use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::primitives::{is_iso_date, is_valid_url};
use crate::validate::registry::{Modality, Rule};
use crate::validate::resolve::{REPOSITORY_TYPES, resolve_type};

pub fn table(config: &ProfileConfig) -> Vec<Arc<Rule>> {
    vec![
        Rule::new(
            "@type",
            Modality::Must,
            "MUST have a `@type` attribute that includes in its values `Dataset` and either \
             `RepositoryCollection` or `RepositoryObject`",
            check_type,
        ),
        Rule::new(
            "conformsTo",
            Modality::Must,
            format!(
                "MUST have a conformsTo which references the profile URL for either a Collection \
                 ({}) or an Object ({}) but not both",
                config.collection_profile_url, config.object_profile_url
            ),
            check_conforms_to,
        ),
        license(config),
        Rule::new(
            "datePublished",
            Modality::Must,
            "MUST have a `datePublished` property with exactly one value which is a string that \
             parses as ISO-8601 to the level of at least a year. E.g.: 2000, 2000-10, \
             2000-10-01T12:34:56+10",
            check_date_published,
        ),
        Rule::new(
            "publisher",
            Modality::Must,
            "MUST have a `publisher` property which MUST have an ID which is a URL",
            check_publisher,
        ),
    ]
}

fn check_type(ctx: &mut Context<'_>, values: &[Value], entity: &Entity) {
    if !has_literal(values, "Dataset") {
        ctx.violation("@type MUST include “Dataset”");
    }
    let declared: Vec<&str> = values.iter().filter_map(Value::as_literal).collect();
    let resolution = resolve_type(&declared, &REPOSITORY_TYPES);
    if resolution.is_ambiguous() {
        ctx.violation(
            "MUST NOT have both `RepositoryCollection` and `RepositoryObject` as values in `@type`",
        );
    } else if resolution.is_fallback() {
        ctx.violation("MUST have `RepositoryCollection` or `RepositoryObject` as values in `@type`");
    }

    let audit = Arc::clone(ctx.registry().property_names());
    ctx.apply(&audit, &[], entity);

    ctx.validate_as(resolution.resolved, entity);
}

pub fn property_names() -> Arc<Rule> {
    Rule::new(
        "@context",
        Modality::Should,
        "SHOULD have property names which resolve using the supplied context",
        check_property_names,
    )
}

fn check_property_names(ctx: &mut Context<'_>, _values: &[Value], _entity: &Entity) {
    let unresolved: Vec<String> = {
        let graph = ctx.graph();
        let mut seen = BTreeSet::new();
        let mut unresolved = Vec::new();
        for entity in graph.entities() {
            for name in entity.property_names() {
                if name.starts_with('@') || !seen.insert(name) {
                    continue;
                }
                if graph.resolve_term(name).is_none() {
                    unresolved.push(name.to_string());
                }
            }
        }
        unresolved
    };
    for name in unresolved {
        ctx.violation(format!("Property `{name}` is not defined in the crate's context"));
    }
}

fn check_conforms_to(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("Does not have conformsTo");
        return;
    }
    let config = ctx.config();
    let collection = references(values).any(|id| id == config.collection_profile_url);
    let object = references(values).any(|id| id == config.object_profile_url);
    match (collection, object) {
        (true, true) => ctx.violation("Cannot have both Collection and Object profiles"),
        (false, false) => ctx.violation("Does not conform to this profile"),
        _ => {}
    }
}

pub fn license(config: &ProfileConfig) -> Arc<Rule> {
    Rule::new(
        "license",
        Modality::Must,
        format!(
            "MUST have a `license` property with reference to an entity of type [File, \
             DataReuseLicense] with an `@id` property that starts with `{}` and a `URL` property \
             that is a valid URL",
            config.license_id_prefix
        ),
        check_license,
    )
}

/// Every sub-condition is reported on its own; one failure does not hide
/// the next.
fn check_license(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("Does not have a license property");
        return;
    }
    let prefix = ctx.config().license_id_prefix.as_str();
    for value in values {
        let Some(id) = value.as_reference() else {
            ctx.violation(format!("License value is not a reference to a licence entity: {value}"));
            continue;
        };
        if !id.starts_with(prefix) {
            ctx.violation(format!("License @id does not start with {prefix}"));
        }
        let Some(file) = ctx.lookup(id) else {
            ctx.violation("License property does not reference a licence file");
            continue;
        };
        for required in ["File", "DataReuseLicense"] {
            if !file.has_type(required) {
                ctx.violation(format!(
                    "There is a reference to a LICENSE entity but it does not have \"{required}\" \
                     as a @type value: {value}"
                ));
            }
        }
        let has_url = file
            .property("URL")
            .iter()
            .filter_map(Value::as_text)
            .any(is_valid_url);
        if !has_url {
            ctx.violation(format!(
                "There is a reference to a LICENSE entity but it does not have a `URL` property \
                 which is a well-formed URL: {value}"
            ));
        }
    }
}

fn check_date_published(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    match values {
        [] => ctx.violation("Does not have a datePublished property"),
        [value] => {
            if !value.as_literal().is_some_and(is_iso_date) {
                ctx.violation(format!("datePublished value is not an ISO-8601 date: {value}"));
            }
        }
        _ => ctx.violation("There is more than one datePublished value"),
    }
}

fn check_publisher(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("Does not have a Publisher");
        return;
    }
    for value in values {
        if !value.as_reference().is_some_and(is_valid_url) {
            ctx.violation(format!("Publisher @id is not a URL: {value}"));
        }
    }
}
