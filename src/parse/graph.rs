//! The entity graph the profile rules query.
//!
//! [`EntityGraph`] is the whole of what validation needs from storage.
//! [`CrateGraph`] is the in-memory implementation the loader produces.

use std::collections::HashMap;

use super::types::{Entity, Value};
use super::vocab::Vocabulary;

/// Conventional `@id` of the RO-Crate metadata descriptor.
pub const METADATA_DESCRIPTOR: &str = "ro-crate-metadata.json";

pub trait EntityGraph {
    fn get_entity(&self, id: &str) -> Option<&Entity>;

    /// Existence check without fetching.
    fn get_item(&self, id: &str) -> bool {
        self.get_entity(id).is_some()
    }

    /// Every entity in the graph, in document order.
    fn entities(&self) -> Box<dyn Iterator<Item = &Entity> + '_>;

    /// Expand a property name against the vocabulary context.
    fn resolve_term(&self, term: &str) -> Option<String>;

    /// Set `property` on entity `id` to `values` if, and only if, the entity
    /// exists and the property is absent or empty. Returns whether anything
    /// changed; calling it again with the property filled is a no-op.
    fn fill_missing_property(&mut self, id: &str, property: &str, values: &[Value]) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct CrateGraph {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
    vocabulary: Vocabulary,
}

impl CrateGraph {
    pub fn new(vocabulary: Vocabulary) -> Self {
        CrateGraph {
            vocabulary,
            ..CrateGraph::default()
        }
    }

    /// Add an entity. Returns `false` (and leaves the graph unchanged) if an
    /// entity with the same `@id` is already present.
    pub fn insert(&mut self, entity: Entity) -> bool {
        if let Some(id) = entity.id() {
            if self.index.contains_key(id) {
                return false;
            }
            self.index.insert(id.to_string(), self.entities.len());
        }
        self.entities.push(entity);
        true
    }

    /// Builder-style [`insert`](Self::insert) for tests and fixtures; a
    /// duplicate id is silently dropped.
    pub fn with(mut self, entity: Entity) -> Self {
        self.insert(entity);
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The root Dataset: whatever the metadata descriptor is `about`,
    /// otherwise `./`.
    pub fn root_id(&self) -> &str {
        self.get_entity(METADATA_DESCRIPTOR)
            .and_then(|d| d.property("about").iter().find_map(Value::as_reference))
            .unwrap_or("./")
    }
}

impl EntityGraph for CrateGraph {
    fn get_entity(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    fn entities(&self) -> Box<dyn Iterator<Item = &Entity> + '_> {
        Box::new(self.entities.iter())
    }

    fn resolve_term(&self, term: &str) -> Option<String> {
        self.vocabulary.resolve(term)
    }

    fn fill_missing_property(&mut self, id: &str, property: &str, values: &[Value]) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        let entity = &mut self.entities[i];
        if entity.has_property(property) {
            return false;
        }
        entity
            .properties
            .insert(property.to_string(), values.to_vec());
        true
    }
}
