//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::ProfileConfig;
use crate::error::{ConfigError, ParseError};
use crate::validate::{Registry, Validator, default_registry};

/// Validate RO-Crate metadata JSON against the default profile.
/// Returns a JSON object with either `findings` or `errors`.
#[wasm_bindgen]
pub fn validate_crate(json: &str) -> JsValue {
    let result = validate_crate_inner(json, default_registry());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Validate RO-Crate metadata JSON against a profile configured by
/// `config_json` (see [`ProfileConfig`]).
#[wasm_bindgen]
pub fn validate_crate_with_config(json: &str, config_json: &str) -> JsValue {
    let result = match ProfileConfig::from_json(config_json) {
        Ok(config) => validate_crate_inner(json, &Registry::new(config)),
        Err(e) => ValidationResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_crate_inner(json: &str, registry: &Registry) -> ValidationResult {
    let mut graph = match crate::parse::parse(json) {
        Ok(g) => g,
        Err(e) => return ValidationResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    };
    let findings = Validator::new(registry).validate_crate(&mut graph);
    ValidationResult::Report {
        conformant: findings.is_conformant(),
        findings: findings.into_iter().map(FindingDto::from).collect(),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
struct ErrorDto {
    code: String,
    message: String,
}

impl From<ParseError> for ErrorDto {
    fn from(e: ParseError) -> Self {
        ErrorDto {
            code: e.code().into(),
            message: e.to_string(),
        }
    }
}

impl From<ConfigError> for ErrorDto {
    fn from(e: ConfigError) -> Self {
        ErrorDto {
            code: e.code().into(),
            message: e.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FindingDto {
    severity: String,
    message: String,
    entity_id: Option<String>,
    entity_type: String,
    property: String,
    clause: String,
}

impl From<crate::validate::Finding> for FindingDto {
    fn from(f: crate::validate::Finding) -> Self {
        FindingDto {
            severity: f.severity.to_string(),
            message: f.message,
            entity_id: f.entity_id,
            entity_type: f.entity_type,
            property: f.property,
            clause: f.clause,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum ValidationResult {
    #[serde(rename = "report")]
    Report {
        conformant: bool,
        findings: Vec<FindingDto>,
    },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
