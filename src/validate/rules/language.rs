//! Rules for `Language` entities referenced by `inLanguage` and
//! `subjectLanguage`.

use std::sync::Arc;

use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};
use crate::validate::context::Context;
use crate::validate::registry::{Modality, Rule};

pub fn table(config: &ProfileConfig) -> Vec<Arc<Rule>> {
    vec![Rule::new(
        "@id",
        Modality::Must,
        format!(
            "MUST have an @id property and the value must start with {}",
            config
                .language_authorities
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(" or ")
        ),
        check_id,
    )]
}

fn check_id(ctx: &mut Context<'_>, values: &[Value], _entity: &Entity) {
    let Some(id) = values.first().and_then(Value::as_literal) else {
        ctx.violation("There is no @id property");
        return;
    };
    let authorities = &ctx.config().language_authorities;
    if !authorities.iter().any(|a| id.starts_with(a.as_str())) {
        ctx.violation(format!("The value of @id does not start with the right URL: {id}"));
    }
}
