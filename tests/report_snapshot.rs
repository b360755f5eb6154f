//! Snapshot tests for rendered and serialized reports.

mod helpers;

use helpers::*;
use ldac_profile::parse::Entity;
use ldac_profile::validate::{Validator, default_registry};

#[test]
fn place_with_unresolved_geometry_report_snapshot() {
    let mut graph = crate_graph(vec![
        Entity::new("#sydney")
            .with_types(["Place"])
            .with_property("geo", refs(&["#sydney-geo", "#nowhere"])),
        Entity::new("#sydney-geo")
            .with_types(["Geometry"])
            .with_property("asWKT", lit("POINT (151.2 -33.8)")),
    ]);
    let findings = Validator::new(default_registry()).validate_entity(&mut graph, "#sydney");

    insta::assert_snapshot!("place_report", findings.to_string());
}

#[test]
fn geometry_without_coordinates_json_snapshot() {
    let mut graph = crate_graph(vec![
        Entity::new("#harbour")
            .with_types(["Place"])
            .with_property("geo", refs(&["#harbour-geo"])),
        Entity::new("#harbour-geo").with_types(["Geometry"]),
    ]);
    let findings = Validator::new(default_registry()).validate_entity(&mut graph, "#harbour");

    insta::assert_json_snapshot!("geometry_report_json", findings);
}
