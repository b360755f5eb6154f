//! Conformance checking of RO-Crate metadata against the Language Data Commons
//! (LDaC) profile.
//!
//! The crate is split the same way a document flows through it:
//!
//! - [`parse`] turns a flattened JSON-LD document into a [`CrateGraph`],
//! - [`validate`] walks the graph from the root Dataset, applying the profile's
//!   rule tables and collecting [`Findings`],
//! - [`wasm`] exposes the pipeline to the browser.
//!
//! ```
//! let json = r#"{
//!   "@context": "https://w3id.org/ro/crate/1.1/context",
//!   "@graph": [
//!     {"@id": "ro-crate-metadata.json", "@type": "CreativeWork", "about": {"@id": "./"}},
//!     {"@id": "./", "@type": ["Dataset", "RepositoryCollection"], "name": "Corpus"}
//!   ]
//! }"#;
//! let mut graph = ldac_profile::parse::parse(json).unwrap();
//! let findings = ldac_profile::validate_crate(&mut graph);
//! assert!(!findings.is_conformant());
//! ```

pub mod config;
pub mod error;
pub mod parse;
pub mod validate;
pub mod wasm;

pub use config::ProfileConfig;
pub use parse::{CrateGraph, Entity, EntityGraph, Value};
pub use validate::report::{Finding, Findings, Severity};
pub use validate::{Validator, validate_crate, validate_profile};
