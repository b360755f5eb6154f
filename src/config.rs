//! Profile constants: the profile URLs, authority prefixes and controlled
//! vocabularies the rule tables consult.
//!
//! All of it is data. A deployment that tracks a newer profile revision can
//! load its own values with [`ProfileConfig::from_json`]; any field left out
//! keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Namespace of the Language Data Commons terms.
pub const LDAC_TERMS: &str = "http://purl.archive.org/language-data-commons/terms#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    pub collection_profile_url: String,
    pub object_profile_url: String,
    /// A `Language` entity's `@id` must start with one of these.
    pub language_authorities: Vec<String>,
    pub license_id_prefix: String,
    pub communication_modes: Vec<String>,
    pub linguistic_genres: Vec<String>,
    pub annotation_types: Vec<String>,
    pub table_schema_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            collection_profile_url: "https://w3id.org/ldac/profile#Collection".into(),
            object_profile_url: "https://w3id.org/ldac/profile#Object".into(),
            language_authorities: vec![
                "https://collection.aiatsis.gov.au/austlang/language/".into(),
                "https://glottolog.org/resource/".into(),
            ],
            license_id_prefix: "LICENSE".into(),
            communication_modes: ldac_terms(&[
                "SpokenLanguage",
                "WrittenLanguage",
                "Song",
                "Gesture",
                "SignedLanguage",
                "WhistledLanguage",
            ]),
            linguistic_genres: ldac_terms(&[
                "Formulaic",
                "Thesaurus",
                "Dialogue",
                "Oratory",
                "Report",
                "Ludic",
                "Procedural",
                "Narrative",
                "Interview",
                "Drama",
                "Informational",
            ]),
            annotation_types: ldac_terms(&[
                "Phonemic",
                "Phonetic",
                "Phonological",
                "Syntactic",
                "Translation",
                "Semantic",
                "Transcription",
                "Prosodic",
            ]),
            table_schema_url: "https://specs.frictionlessdata.io/table-schema/".into(),
        }
    }
}

impl ProfileConfig {
    /// Load a configuration from JSON, defaulting any field that is absent.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn ldac_terms(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| format!("{LDAC_TERMS}{n}")).collect()
}
