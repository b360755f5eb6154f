#![allow(dead_code)]

use ldac_profile::parse::{CrateGraph, Entity, Value, Vocabulary};
use ldac_profile::validate::{Finding, Findings, Severity};
use serde_json::json;

pub const COLLECTION_PROFILE: &str = "https://w3id.org/ldac/profile#Collection";
pub const OBJECT_PROFILE: &str = "https://w3id.org/ldac/profile#Object";
pub const ENGLISH: &str = "https://glottolog.org/resource/languoid/id/stan1293";
pub const SPOKEN: &str = "http://purl.archive.org/language-data-commons/terms#SpokenLanguage";

// =============================================================================
// Value shorthands
// =============================================================================

pub fn lit(s: &str) -> Vec<Value> {
    vec![Value::literal(s)]
}

pub fn refs(ids: &[&str]) -> Vec<Value> {
    ids.iter().map(|id| Value::reference(*id)).collect()
}

// =============================================================================
// Entity builders
// =============================================================================

/// Licence file the default root points at.
pub fn licence() -> Entity {
    Entity::new("LICENSE.txt")
        .with_types(["File", "DataReuseLicense"])
        .with_property("name", lit("Licence"))
        .with_property("URL", lit("https://creativecommons.org/licenses/by/4.0/"))
}

pub fn english() -> Entity {
    Entity::new(ENGLISH)
        .with_types(["Language"])
        .with_property("name", lit("English"))
}

/// Root dataset with every Dataset property in order; the repository type
/// and profile are left to the caller.
fn root(id: &str, repository_type: &str, profile: &str) -> Entity {
    Entity::new(id)
        .with_types(["Dataset", repository_type])
        .with_property("name", lit("Sydney Speaks"))
        .with_property("description", lit("Recordings of Sydney English speakers"))
        .with_property("conformsTo", refs(&[profile]))
        .with_property("license", refs(&["LICENSE.txt"]))
        .with_property("datePublished", lit("2023-05"))
        .with_property("publisher", refs(&["https://ror.org/00rqy9422"]))
}

/// A conformant collection root with no members.
pub fn collection_root(id: &str) -> Entity {
    root(id, "RepositoryCollection", COLLECTION_PROFILE)
}

/// A conformant object root with no parts.
pub fn object_root(id: &str) -> Entity {
    root(id, "RepositoryObject", OBJECT_PROFILE)
}

/// A conformant collection member.
pub fn collection(id: &str) -> Entity {
    Entity::new(id)
        .with_types(["RepositoryCollection"])
        .with_property("name", lit("Sub-collection"))
        .with_property("description", lit("A sub-collection"))
        .with_property("conformsTo", refs(&[COLLECTION_PROFILE]))
}

/// A conformant object member.
pub fn object(id: &str) -> Entity {
    Entity::new(id)
        .with_types(["RepositoryObject"])
        .with_property("name", lit("Interview"))
        .with_property("conformsTo", refs(&[OBJECT_PROFILE]))
}

pub fn file(id: &str, types: &[&str]) -> Entity {
    let mut all = vec!["File"];
    all.extend_from_slice(types);
    Entity::new(id).with_types(all)
}

// =============================================================================
// Graph builders
// =============================================================================

/// An empty graph whose context knows the RO-Crate and LDaC terms.
pub fn empty_graph() -> CrateGraph {
    CrateGraph::new(Vocabulary::from_context(&json!([
        "https://w3id.org/ro/crate/1.1/context",
        "https://w3id.org/ldac/context"
    ])))
}

/// A graph holding `entities` plus the licence and English language entities.
pub fn crate_graph(entities: Vec<Entity>) -> CrateGraph {
    let graph = entities
        .into_iter()
        .fold(empty_graph(), |graph, entity| graph.with(entity));
    graph.with(licence()).with(english())
}

// =============================================================================
// Finding queries
// =============================================================================

pub fn messages(findings: &Findings, severity: Severity) -> Vec<&str> {
    findings
        .with_severity(severity)
        .map(|f| f.message.as_str())
        .collect()
}

pub fn errors(findings: &Findings) -> Vec<&str> {
    messages(findings, Severity::Error)
}

pub fn warnings(findings: &Findings) -> Vec<&str> {
    messages(findings, Severity::Warning)
}

pub fn infos(findings: &Findings) -> Vec<&str> {
    messages(findings, Severity::Info)
}

/// Findings whose message contains `needle`.
pub fn matching<'a>(findings: &'a Findings, needle: &str) -> Vec<&'a Finding> {
    findings
        .iter()
        .filter(|f| f.message.contains(needle))
        .collect()
}
