//! Rules for `Place` and the `Geometry` it points at.

use std::sync::Arc;

use super::require_type;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::registry::{Modality, ProfileType, Rule};

pub fn place_table() -> Vec<Arc<Rule>> {
    vec![
        Rule::new(
            "@type",
            Modality::Must,
            r#"MUST have a @type value of "Place" and MAY have other @type values"#,
            |ctx, values, _| require_type(ctx, values, "Place"),
        ),
        Rule::new(
            "geo",
            Modality::Must,
            "MUST have a geo property, which is a reference to one or more Geometry entities",
            check_geo,
        ),
    ]
}

pub fn geometry_table() -> Vec<Arc<Rule>> {
    vec![
        Rule::new(
            "@type",
            Modality::Must,
            r#"MUST have a @type value of "Geometry" and MAY have other @type values"#,
            |ctx, values, _| require_type(ctx, values, "Geometry"),
        ),
        Rule::new(
            "asWKT",
            Modality::Must,
            "MUST have one or more asWKT property, which is text encoding the location coordinates",
            check_as_wkt,
        ),
    ]
}

fn check_geo(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("There is no geo property");
        return;
    }
    for value in values {
        ctx.validate_value_as(ProfileType::Geometry, value);
    }
}

fn check_as_wkt(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    if values.is_empty() {
        ctx.violation("There is no asWKT property");
    }
}
