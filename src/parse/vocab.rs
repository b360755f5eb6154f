//! Term resolution against a crate's `@context`.
//!
//! Remote contexts are never fetched. The RO-Crate and LDaC context URLs map
//! to the context documents bundled under `contexts/`; anything a document
//! declares inline (`{"term": "iri"}`, `{"term": {"@id": "iri"}}`, `@vocab`)
//! is layered on top.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value as Json;

const RO_CRATE_URL: &str = "https://w3id.org/ro/crate/";
const LDAC_URL: &str = "https://w3id.org/ldac/context";

/// The RO-Crate 1.1 context: schema.org types and properties plus the terms
/// RO-Crate adds from Dublin Core, PCDM, PROV and PAV.
const RO_CRATE_CONTEXT: &str = include_str!("contexts/ro-crate-1.1.jsonld");

/// The LDaC context: LDaC vocabulary terms plus PCDM and GeoSPARQL.
const LDAC_CONTEXT: &str = include_str!("contexts/ldac.jsonld");

/// The bundled context standing in for a remote context URL, parsed once.
fn bundled(url: &str) -> Option<&'static Vocabulary> {
    static RO_CRATE: OnceLock<Vocabulary> = OnceLock::new();
    static LDAC: OnceLock<Vocabulary> = OnceLock::new();

    let (cell, source) = if url.starts_with(RO_CRATE_URL) {
        (&RO_CRATE, RO_CRATE_CONTEXT)
    } else if url.starts_with(LDAC_URL) {
        (&LDAC, LDAC_CONTEXT)
    } else {
        return None;
    };
    Some(cell.get_or_init(|| Vocabulary::from_document(source)))
}

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: BTreeMap<String, String>,
    vocab: Option<String>,
}

impl Vocabulary {
    /// Build from the document's `@context` (string, object or array of either).
    pub fn from_context(context: &Json) -> Self {
        let mut vocabulary = Vocabulary::default();
        vocabulary.add_context(context);
        vocabulary
    }

    /// Build from a context document (`{"@context": ...}`) held as text.
    fn from_document(source: &str) -> Self {
        match serde_json::from_str::<Json>(source) {
            Ok(document) => document
                .get("@context")
                .map(Vocabulary::from_context)
                .unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, "bundled context is not valid JSON");
                Vocabulary::default()
            }
        }
    }

    fn add_context(&mut self, context: &Json) {
        match context {
            Json::String(url) => self.add_remote(url),
            Json::Array(items) => items.iter().for_each(|c| self.add_context(c)),
            Json::Object(map) => {
                for (term, definition) in map {
                    if term == "@vocab" {
                        self.vocab = definition.as_str().map(str::to_string);
                        continue;
                    }
                    let iri = match definition {
                        Json::String(iri) => Some(iri.as_str()),
                        Json::Object(def) => def.get("@id").and_then(Json::as_str),
                        _ => None,
                    };
                    if let Some(iri) = iri {
                        self.define(term, iri);
                    }
                }
            }
            _ => {}
        }
    }

    fn add_remote(&mut self, url: &str) {
        match bundled(url) {
            Some(context) => {
                self.terms
                    .extend(context.terms.iter().map(|(t, iri)| (t.clone(), iri.clone())));
            }
            None => tracing::debug!(url, "unknown remote context, no terms bundled"),
        }
    }

    pub fn define(&mut self, term: &str, iri: &str) {
        self.terms.insert(term.to_string(), iri.to_string());
    }

    /// Expand `term` to an IRI, or `None` if the context does not define it.
    pub fn resolve(&self, term: &str) -> Option<String> {
        if let Some(iri) = self.terms.get(term) {
            return Some(iri.clone());
        }
        if term.starts_with("http://") || term.starts_with("https://") {
            return Some(term.to_string());
        }
        if let Some((prefix, suffix)) = term.split_once(':') {
            if !suffix.starts_with("//") {
                if let Some(ns) = self.terms.get(prefix) {
                    return Some(format!("{ns}{suffix}"));
                }
            }
        }
        self.vocab.as_ref().map(|v| format!("{v}{term}"))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.vocab.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ro_crate_context_resolves_schema_terms() {
        let vocab = Vocabulary::from_context(&json!("https://w3id.org/ro/crate/1.1/context"));
        assert_eq!(vocab.resolve("name").as_deref(), Some("http://schema.org/name"));
        assert_eq!(
            vocab.resolve("conformsTo").as_deref(),
            Some("http://purl.org/dc/terms/conformsTo")
        );
        assert_eq!(
            vocab.resolve("File").as_deref(),
            Some("http://schema.org/MediaObject")
        );
        assert!(vocab.resolve("communicationMode").is_none());
    }

    #[test]
    fn bundled_ro_crate_context_covers_schema_org() {
        let vocab = Vocabulary::from_context(&json!("https://w3id.org/ro/crate/1.1/context"));
        assert!(vocab.len() > 1000, "only {} terms bundled", vocab.len());
        for term in ["conditionsOfAccess", "usageInfo", "genre", "accessibilitySummary"] {
            assert_eq!(
                vocab.resolve(term),
                Some(format!("http://schema.org/{term}")),
                "{term}"
            );
        }
    }

    #[test]
    fn bundled_ldac_context_defines_its_prefix() {
        let vocab = Vocabulary::from_context(&json!("https://w3id.org/ldac/context"));
        assert_eq!(
            vocab.resolve("ldac:Song").as_deref(),
            Some("http://purl.archive.org/language-data-commons/terms#Song")
        );
        assert_eq!(
            vocab.resolve("asWKT").as_deref(),
            Some("http://www.opengis.net/ont/geosparql#asWKT")
        );
    }

    #[test]
    fn array_context_layers_inline_terms() {
        let vocab = Vocabulary::from_context(&json!([
            "https://w3id.org/ro/crate/1.1/context",
            "https://w3id.org/ldac/context",
            {"ldac": "http://purl.archive.org/language-data-commons/terms#",
             "speaker": {"@id": "ldac:speaker"}}
        ]));
        assert!(vocab.resolve("hasMember").is_some());
        assert_eq!(vocab.resolve("speaker").as_deref(), Some("ldac:speaker"));
        assert_eq!(
            vocab.resolve("ldac:Song").as_deref(),
            Some("http://purl.archive.org/language-data-commons/terms#Song")
        );
        assert!(vocab.resolve("undefinedTerm").is_none());
    }

    #[test]
    fn absolute_iris_and_vocab() {
        let vocab = Vocabulary::from_context(&json!({"@vocab": "http://example.org/"}));
        assert_eq!(
            vocab.resolve("http://schema.org/name").as_deref(),
            Some("http://schema.org/name")
        );
        assert_eq!(vocab.resolve("anything").as_deref(), Some("http://example.org/anything"));
    }
}
