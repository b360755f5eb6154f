//! Entity and value model for a loaded crate.
//!
//! Entities come out of the loader already flattened: every nested node is
//! its own entity and properties point at one another through
//! [`Value::Reference`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::json;

// =============================================================================
// VALUES
// =============================================================================

/// One item of a property's value list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Value {
    Literal(String),
    /// `{"@id": ...}`; the target may or may not be in the same graph.
    Reference(String),
    /// Anything else the document held: numbers, booleans, objects without
    /// `@id`, nested arrays.
    Other(serde_json::Value),
}

impl Value {
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }

    pub fn reference(id: impl Into<String>) -> Self {
        Value::Reference(id.into())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Value::Reference(id) => Some(id),
            _ => None,
        }
    }

    /// Textual form of a literal or the id of a reference.
    ///
    /// Used for properties like `URL` that documents write either way.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Literal(s) | Value::Reference(s) => Some(s),
            Value::Other(_) => None,
        }
    }

    /// The value as it would appear in the JSON-LD document.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Literal(s) => json!(s),
            Value::Reference(id) => json!({ "@id": id }),
            Value::Other(v) => v.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct Entity {
    /// `None` when the source node carried no `@id`.
    pub id: Option<String>,
    pub types: Vec<String>,
    pub properties: BTreeMap<String, Vec<Value>>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Entity {
            id: Some(id.into()),
            ..Entity::default()
        }
    }

    /// An entity known only by a reference that did not resolve locally.
    pub fn stub(id: Option<&str>) -> Self {
        Entity {
            id: id.map(str::to_string),
            ..Entity::default()
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.properties.insert(name.into(), values);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Values of `name`, empty when the property is absent.
    pub fn property(&self, name: &str) -> &[Value] {
        self.properties.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_property(&self, name: &str) -> bool {
        !self.property(name).is_empty()
    }

    /// Values as the rule tables see them: `@id` and `@type` are presented
    /// as literal lists alongside the ordinary properties.
    pub fn values_for(&self, name: &str) -> Vec<Value> {
        match name {
            "@id" => self.id.iter().cloned().map(Value::Literal).collect(),
            "@type" => self.types.iter().cloned().map(Value::Literal).collect(),
            _ => self.property(name).to_vec(),
        }
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Human-readable handle for messages.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<no @id>")
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}
