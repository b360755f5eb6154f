//! Parse phase: RO-Crate metadata JSON → [`CrateGraph`].
//!
//! The loader expects a flattened document (`@context` + `@graph`). It does
//! not expand, frame or normalise: values keep the shape they were written in
//! so the profile rules can report on that shape.

pub mod graph;
pub mod types;
pub mod vocab;

pub use graph::{CrateGraph, EntityGraph, METADATA_DESCRIPTOR};
pub use types::*;
pub use vocab::Vocabulary;

use serde_json::{Map, Value as Json};

use crate::error::ParseError;

/// Deserialize crate metadata JSON into a [`CrateGraph`].
pub fn parse(json: &str) -> Result<CrateGraph, ParseError> {
    let document: Json = serde_json::from_str(json)?;
    from_document(&document)
}

/// Build a [`CrateGraph`] from an already-deserialized document.
pub fn from_document(document: &Json) -> Result<CrateGraph, ParseError> {
    let context = document.get("@context").cloned().unwrap_or(Json::Null);
    let nodes = document
        .get("@graph")
        .and_then(Json::as_array)
        .ok_or(ParseError::MissingGraph)?;

    let mut graph = CrateGraph::new(Vocabulary::from_context(&context));
    for (index, node) in nodes.iter().enumerate() {
        let object = node.as_object().ok_or(ParseError::NodeNotObject { index })?;
        let entity = entity_from_node(object)?;
        if let Some(id) = entity.id.clone() {
            if !graph.insert(entity) {
                return Err(ParseError::DuplicateId(id));
            }
        } else {
            graph.insert(entity);
        }
    }

    tracing::debug!(entities = graph.len(), terms = graph.vocabulary().len(), "parsed crate graph");
    Ok(graph)
}

fn entity_from_node(node: &Map<String, Json>) -> Result<Entity, ParseError> {
    let id = node.get("@id").and_then(Json::as_str).map(str::to_string);
    let types = match node.get("@type") {
        None => Vec::new(),
        Some(Json::String(t)) => vec![t.clone()],
        Some(Json::Array(items)) => items
            .iter()
            .map(|t| t.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseError::InvalidType {
                id: id.clone().unwrap_or_default(),
            })?,
        Some(_) => {
            return Err(ParseError::InvalidType {
                id: id.unwrap_or_default(),
            });
        }
    };

    let properties = node
        .iter()
        .filter(|(key, _)| key.as_str() != "@id" && key.as_str() != "@type")
        .map(|(key, raw)| (key.clone(), values_from_json(raw)))
        .collect();

    Ok(Entity {
        id,
        types,
        properties,
    })
}

/// Normalise a property to a value list; a single value becomes a list of one.
fn values_from_json(raw: &Json) -> Vec<Value> {
    match raw {
        Json::Array(items) => items.iter().filter_map(value_from_json).collect(),
        other => value_from_json(other).into_iter().collect(),
    }
}

fn value_from_json(raw: &Json) -> Option<Value> {
    match raw {
        Json::Null => None,
        Json::String(s) => Some(Value::Literal(s.clone())),
        Json::Object(map) => {
            if let Some(id) = map.get("@id").and_then(Json::as_str) {
                Some(Value::Reference(id.to_string()))
            } else if let Some(s) = map.get("@value").and_then(Json::as_str) {
                Some(Value::Literal(s.to_string()))
            } else {
                Some(Value::Other(raw.clone()))
            }
        }
        other => Some(Value::Other(other.clone())),
    }
}
