//! Rules for the parts of an object: primary material, derived material
//! and annotations.

use std::sync::Arc;

use super::{Shared, check_vocabulary, references, require_type, term_names};
use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::registry::{Modality, ProfileType, Rule};

pub fn primary_table(shared: &Shared) -> Vec<Arc<Rule>> {
    vec![
        Arc::clone(&shared.primary_material_type),
        Arc::clone(&shared.communication_mode),
        Arc::clone(&shared.material_in_language),
    ]
}

pub fn derived_table(shared: &Shared) -> Vec<Arc<Rule>> {
    vec![
        Rule::new(
            "@type",
            Modality::Must,
            "MUST have a @type value of “DerivedMaterial” and MAY have other @type values",
            |ctx, values, _| require_type(ctx, values, "DerivedMaterial"),
        ),
        Arc::clone(&shared.communication_mode),
        Arc::clone(&shared.material_in_language),
        Rule::new(
            "derivedFrom",
            Modality::Should,
            "SHOULD have a derivedFrom property which references a PrimaryMaterial entity",
            check_derived_from,
        ),
    ]
}

pub fn annotation_table(config: &ProfileConfig) -> Vec<Arc<Rule>> {
    vec![
        Rule::new(
            "@type",
            Modality::Must,
            "MUST have a @type value of “Annotation” and MAY have other @type values",
            |ctx, values, _| require_type(ctx, values, "Annotation"),
        ),
        Rule::new(
            "annotationType",
            Modality::May,
            format!(
                "MAY have an `annotationType` property which SHOULD be a reference to one or more \
                 of the Language Data Commons Annotation Type Terms: {}",
                term_names(&config.annotation_types)
            ),
            check_annotation_type,
        ),
        Rule::new(
            "conformsTo",
            Modality::May,
            format!(
                "MAY have a `conformsTo` property which references a schema file which in turn \
                 MUST have a `conformsTo` property of {{\"@id\": \"{}\"}}",
                config.table_schema_url
            ),
            check_annotation_conforms_to,
        ),
        Rule::new(
            "annotationOf",
            Modality::Should,
            "SHOULD have an `annotationOf` property which references another entity",
            check_annotation_of,
        ),
    ]
}

pub fn primary_material_type() -> Arc<Rule> {
    Rule::new(
        "@type",
        Modality::Must,
        "MUST have a @type value of “PrimaryMaterial” and MAY have other @type values",
        |ctx, values, _| require_type(ctx, values, "PrimaryMaterial"),
    )
}

pub fn in_language() -> Arc<Rule> {
    Rule::new(
        "inLanguage",
        Modality::Must,
        "MUST have an inLanguage property, or the RepositoryObject that is `partOf` MUST have an \
         inLanguage property, referencing a Language item (language may be inherited from the \
         parent RepositoryObject)",
        check_in_language,
    )
}

fn check_in_language(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("There is no language property");
        return;
    }
    for value in values {
        ctx.validate_value_as(ProfileType::Language, value);
    }
}

fn check_derived_from(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("Does not have a derivedFrom property");
        return;
    }
    let primary_type = ctx
        .registry()
        .table(ProfileType::PrimaryMaterial)
        .get("@type")
        .cloned()
        .unwrap_or_else(primary_material_type);
    for value in values {
        let Some(id) = value.as_reference() else {
            ctx.warn(format!("Property value is not a reference to another entity: {value}"));
            continue;
        };
        match ctx.lookup(id) {
            None => ctx.info(format!(
                "Property value does not resolve to another entity in this crate: {value}"
            )),
            // Same check the PrimaryMaterial table applies, reported here.
            Some(source) => primary_type.run(ctx, &source.values_for("@type"), &source),
        }
    }
}

fn check_annotation_type(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let terms = &ctx.config().annotation_types;
    check_vocabulary(ctx, values, terms);
}

/// Only looks at CSV annotations: a referenced schema file that conforms to
/// a frictionless table schema is noted. Never an error.
fn check_annotation_conforms_to(ctx: &mut Context<'_>, values: &[Value], entity: &Entity) {
    let is_csv = entity
        .property("encodingFormat")
        .iter()
        .filter_map(Value::as_literal)
        .any(|f| f.starts_with("text/csv"));
    if values.is_empty() || !is_csv {
        return;
    }
    let schema_url = ctx.config().table_schema_url.as_str();
    for id in references(values) {
        let Some(file) = ctx.lookup(id) else {
            continue;
        };
        let is_table_schema =
            file.has_type("File") && references(file.property("conformsTo")).any(|c| c == schema_url);
        if is_table_schema {
            ctx.info(
                "DOES have a `conformsTo` property that indicates this is a frictionless data \
                 table schema",
            );
        }
    }
}

fn check_annotation_of(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("Does not have an `annotationOf` property");
        return;
    }
    ctx.info("Does have an `annotationOf` property");
    for value in values {
        match value.as_reference() {
            None => {
                ctx.warn(format!("Property value is not a reference to another entity: {value}"))
            }
            Some(id) if ctx.graph().get_item(id) => ctx.info(format!(
                "Property value does resolve to another entity in this crate: {value}"
            )),
            Some(_) => ctx.info(format!(
                "Property value does not resolve to another entity in this crate: {value}"
            )),
        }
    }
}
