//! Integration tests for root Dataset validation: repository type dispatch,
//! licence, publication date, publisher and the context audit.

mod helpers;

use helpers::*;
use ldac_profile::parse::{self, Entity};
use ldac_profile::validate::registry::ProfileType;
use ldac_profile::validate::{Context, Severity, default_registry, validate_crate, validate_profile};

#[test]
fn collection_fixture_is_conformant() {
    let json = include_str!("fixtures/collection_crate.json");
    let mut graph = parse::parse(json).expect("Should parse");
    let findings = validate_crate(&mut graph);
    assert!(findings.is_conformant(), "unexpected errors:\n{findings}");
    assert!(warnings(&findings).is_empty(), "unexpected warnings:\n{findings}");
}

#[test]
fn object_fixture_is_conformant() {
    let json = include_str!("fixtures/object_crate.json");
    let mut graph = parse::parse(json).expect("Should parse");
    let findings = validate_crate(&mut graph);
    assert!(findings.is_conformant(), "unexpected errors:\n{findings}");
    assert!(warnings(&findings).is_empty(), "unexpected warnings:\n{findings}");
    assert_eq!(
        matching(&findings, "frictionless data table schema").len(),
        1
    );
}

#[test]
fn minimal_collection_root_is_conformant() {
    let mut graph = crate_graph(vec![collection_root("./")]);
    let findings = validate_profile(&mut graph, "./");
    assert!(findings.is_conformant(), "unexpected errors:\n{findings}");
    assert!(findings.infos().count() > 0);
}

#[test]
fn minimal_object_root_is_conformant() {
    let mut graph = crate_graph(vec![object_root("./")]);
    let findings = validate_profile(&mut graph, "./");
    assert!(findings.is_conformant(), "unexpected errors:\n{findings}");
    assert!(
        matching(&findings, "Does not have a `hasPart` property")
            .iter()
            .all(|f| f.severity == Severity::Info)
    );
}

#[test]
fn missing_root_is_an_error() {
    let mut graph = crate_graph(vec![]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["Root dataset './' is not in the crate"]);
}

#[test]
fn root_without_id_reports_one_identifier_error() {
    let mut root = collection_root("./");
    root.id = None;
    let mut graph = crate_graph(vec![]);
    let registry = default_registry();
    let mut ctx = Context::new(&mut graph, registry);
    ctx.validate_as(ProfileType::Dataset, &root);
    let findings = ctx.into_findings();

    assert_eq!(errors(&findings), vec!["There is no @id property"]);
    let error = findings.errors().next().expect("one error");
    assert_eq!(error.property, "@id");
    assert_eq!(error.entity_type, "RepositoryCollection");
    assert!(error.entity_id.is_none());
}

#[test]
fn relative_member_id_is_not_a_uri() {
    let mut graph = crate_graph(vec![
        collection_root("./").with_property("hasMember", refs(&["#interview-01"])),
        object("#interview-01"),
    ]);
    let findings = validate_profile(&mut graph, "./");
    let invalid = matching(&findings, "The value of @id is not a valid URI");
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].entity_id.as_deref(), Some("#interview-01"));
}

#[test]
fn name_multiplicity_is_distinct_from_absence() {
    let root = collection_root("./").with_property("name", vec![
        ldac_profile::Value::literal("Sydney Speaks"),
        ldac_profile::Value::literal("Sydney Speaks Corpus"),
    ]);
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["There is more than one name"]);
}

#[test]
fn empty_and_non_string_names() {
    let mut graph = crate_graph(vec![
        collection_root("./").with_property("name", lit("")),
    ]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["Value must have one or more characters"]);

    let mut graph = crate_graph(vec![
        collection_root("./").with_property("name", refs(&["#name"])),
    ]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["Value is not a string"]);
}

#[test]
fn dataset_only_root_falls_back_to_common() {
    let root = collection_root("./").with_types(["Dataset"]);
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");

    assert_eq!(
        errors(&findings),
        vec!["MUST have `RepositoryCollection` or `RepositoryObject` as values in `@type`"]
    );
    let root_tables: Vec<&str> = findings
        .for_entity("./")
        .map(|f| f.entity_type.as_str())
        .collect();
    assert!(root_tables.contains(&"Common"));
    assert!(!root_tables.contains(&"RepositoryCollection"));
    assert!(!root_tables.contains(&"RepositoryObject"));
}

#[test]
fn both_repository_types_report_at_dataset_and_collection() {
    let root = collection_root("./").with_types([
        "Dataset",
        "RepositoryCollection",
        "RepositoryObject",
    ]);
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");

    let both = matching(&findings, "MUST NOT have both");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].entity_type, "Dataset");
    assert_eq!(both[0].severity, Severity::Error);

    let excluded = matching(&findings, "@type MUST NOT include “RepositoryObject”");
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].entity_type, "RepositoryCollection");
    assert_eq!(excluded[0].severity, Severity::Error);
}

#[test]
fn missing_dataset_type_is_reported() {
    let root = object_root("./").with_types(["RepositoryObject"]);
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["@type MUST include “Dataset”"]);
}

#[test]
fn conforms_to_both_profiles_is_an_error() {
    let root = collection_root("./")
        .with_property("conformsTo", refs(&[COLLECTION_PROFILE, OBJECT_PROFILE]));
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    let errors = errors(&findings);
    assert!(errors.contains(&"Cannot have both Collection and Object profiles"));
    assert!(errors.contains(&"MUST NOT have Object profile"));
}

#[test]
fn conforms_to_neither_profile_is_an_error() {
    let root = collection_root("./").with_property("conformsTo", refs(&["https://example.org/p"]));
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert!(errors(&findings).contains(&"Does not conform to this profile"));
}

#[test]
fn licence_without_well_formed_url_is_the_only_error() {
    // Inserted first, so the default licence is dropped as a duplicate.
    let mut graph = crate_graph(vec![
        collection_root("./"),
        licence().with_property("URL", lit("see the licence text")),
    ]);
    let findings = validate_profile(&mut graph, "./");
    let errors = errors(&findings);
    assert_eq!(errors.len(), 1, "{findings}");
    assert!(errors[0].contains("does not have a `URL` property which is a well-formed URL"));
    assert!(errors[0].ends_with(r#"{"@id":"LICENSE.txt"}"#));
}

#[test]
fn licence_sub_conditions_are_reported_independently() {
    let root = collection_root("./").with_property("license", refs(&["COPYING"]));
    let mut graph = crate_graph(vec![root, Entity::new("COPYING").with_types(["File"])]);
    let findings = validate_profile(&mut graph, "./");
    let errors = errors(&findings);
    assert_eq!(errors.len(), 3, "{findings}");
    assert_eq!(errors[0], "License @id does not start with LICENSE");
    assert!(errors[1].contains("\"DataReuseLicense\""));
    assert!(errors[2].contains("well-formed URL"));
}

#[test]
fn licence_that_does_not_resolve() {
    let root = collection_root("./").with_property("license", refs(&["LICENSE-missing.txt"]));
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(
        errors(&findings),
        vec!["License property does not reference a licence file"]
    );
}

#[test]
fn date_published_forms() {
    for (date, ok) in [
        ("2000", true),
        ("2000-10", true),
        ("2000-10-01", true),
        ("2000-10-01T12:34:56+10", true),
        ("last year", false),
        ("", false),
    ] {
        let root = collection_root("./").with_property("datePublished", lit(date));
        let mut graph = crate_graph(vec![root]);
        let findings = validate_profile(&mut graph, "./");
        assert_eq!(findings.is_conformant(), ok, "{date}: {findings}");
    }
}

#[test]
fn date_published_multiplicity() {
    let root = collection_root("./").with_property("datePublished", vec![
        ldac_profile::Value::literal("2000"),
        ldac_profile::Value::literal("2001"),
    ]);
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["There is more than one datePublished value"]);
}

#[test]
fn publisher_must_be_a_url_reference() {
    let root = collection_root("./").with_property("publisher", refs(&["#sydney-uni"]));
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec![r##"Publisher @id is not a URL: {"@id":"#sydney-uni"}"##]);

    let mut root = collection_root("./");
    root.properties.remove("publisher");
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert_eq!(errors(&findings), vec!["Does not have a Publisher"]);
}

#[test]
fn undefined_property_names_warn_once() {
    let root = collection_root("./").with_property("speakerAge", lit("42"));
    let mut graph = crate_graph(vec![
        root,
        Entity::new("#other").with_property("speakerAge", lit("17")),
    ]);
    let findings = validate_profile(&mut graph, "./");
    assert!(findings.is_conformant());
    assert_eq!(
        warnings(&findings),
        vec!["Property `speakerAge` is not defined in the crate's context"]
    );
    let warning = findings.warnings().next().expect("one warning");
    assert_eq!(warning.property, "@context");
    assert_eq!(warning.entity_type, "Dataset");
}

#[test]
fn schema_org_terms_outside_the_profile_are_defined() {
    let root = collection_root("./")
        .with_property("conditionsOfAccess", lit("Open to registered researchers"))
        .with_property("usageInfo", refs(&["https://example.org/sydney-speaks/usage"]))
        .with_property("genre", lit("Sociolinguistic interview"))
        .with_property("accessibilitySummary", lit("Audio with time-aligned transcripts"));
    let mut graph = crate_graph(vec![root]);
    let findings = validate_profile(&mut graph, "./");
    assert!(findings.is_conformant(), "{findings}");
    assert!(warnings(&findings).is_empty(), "unexpected warnings:\n{findings}");
}

#[test]
fn object_table_rejects_collection_type() {
    let entity = object("https://example.org/sydney-speaks/interview-01")
        .with_types(["RepositoryCollection"]);
    let mut graph = crate_graph(vec![]);
    let registry = default_registry();
    let mut ctx = Context::new(&mut graph, registry);
    ctx.validate_as(ProfileType::RepositoryObject, &entity);
    let findings = ctx.into_findings();

    assert_eq!(
        errors(&findings),
        vec![
            "@type MUST include “RepositoryObject”",
            "@type MUST NOT include “RepositoryCollection”",
        ]
    );
    assert!(
        findings
            .errors()
            .all(|f| f.property == "@type" && f.entity_type == "RepositoryObject")
    );

    let mut ctx = Context::new(&mut graph, registry);
    ctx.validate_as(
        ProfileType::RepositoryObject,
        &object("https://example.org/sydney-speaks/interview-01"),
    );
    assert!(ctx.into_findings().is_conformant());
}

#[test]
fn validate_crate_uses_descriptor_root() {
    let mut graph = crate_graph(vec![
        Entity::new("ro-crate-metadata.json")
            .with_types(["CreativeWork"])
            .with_property("about", refs(&["https://example.org/corpus"])),
        collection_root("https://example.org/corpus"),
    ]);
    let findings = validate_crate(&mut graph);
    assert!(findings.is_conformant(), "{findings}");
    assert!(findings.for_entity("https://example.org/corpus").count() > 0);
}
