//! Rules every identified entity shares.

use std::sync::Arc;

use super::Shared;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::primitives::is_valid_url;
use crate::validate::registry::{Modality, ProfileType, Rule};

pub fn table(shared: &Shared) -> Vec<Arc<Rule>> {
    vec![
        Arc::clone(&shared.id),
        Arc::clone(&shared.name),
        Arc::clone(&shared.in_language),
        Arc::clone(&shared.subject_language),
        Arc::clone(&shared.content_location),
    ]
}

pub fn id() -> Arc<Rule> {
    Rule::new(
        "@id",
        Modality::Must,
        r#"MUST have an @id property and the value must be a valid URI or "./""#,
        check_id,
    )
}

fn check_id(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    match values.first().and_then(Value::as_literal) {
        Some(id) if id == "./" || is_valid_url(id) => {}
        Some(_) => ctx.violation("The value of @id is not a valid URI"),
        None => ctx.violation("There is no @id property"),
    }
}

pub fn name() -> Arc<Rule> {
    Rule::new(
        "name",
        Modality::Must,
        "MUST have a single name value which is a string with one or more characters",
        check_name,
    )
}

fn check_name(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    match values {
        [] => ctx.violation("There is no name property"),
        [_, _, ..] => ctx.violation("There is more than one name"),
        [Value::Literal(name)] if name.is_empty() => {
            ctx.violation("Value must have one or more characters")
        }
        [Value::Literal(_)] => {}
        [_] => ctx.violation("Value is not a string"),
    }
}

pub fn in_language() -> Arc<Rule> {
    Rule::new(
        "inLanguage",
        Modality::May,
        "MAY have an `inLanguage` property which is a reference to one or more Language items",
        check_language_references,
    )
}

pub fn subject_language() -> Arc<Rule> {
    Rule::new(
        "subjectLanguage",
        Modality::May,
        "MAY have a `subjectLanguage` property which is a reference to one or more Language items",
        check_language_references,
    )
}

fn check_language_references(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    validate_references(ctx, values, ProfileType::Language);
}

pub fn content_location() -> Arc<Rule> {
    Rule::new(
        "contentLocation",
        Modality::May,
        "MAY have a `contentLocation` property which is a reference to one or more `Place` items",
        check_content_location,
    )
}

fn check_content_location(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    validate_references(ctx, values, ProfileType::Place);
}

/// Report presence, then validate every value as `ty`.
fn validate_references(ctx: &mut Context<'_>, values: &[Value], ty: ProfileType) {
    let property = ctx.property();
    if values.is_empty() {
        ctx.info(format!("Does not have a `{property}` property"));
        return;
    }
    ctx.info(format!("Does have a `{property}` property"));
    for value in values {
        ctx.validate_value_as(ty, value);
    }
}
