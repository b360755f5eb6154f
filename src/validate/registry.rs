//! Rule registry: one rule table per profile type.
//!
//! A table is an ordered list of rules keyed by property name. Tables are
//! compositions: rules such as the `@id` format check are built once and the
//! same [`Arc<Rule>`] is placed in every table that uses it.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::context::Context;
use super::report::Severity;
use super::rules;
use crate::config::ProfileConfig;
use crate::parse::{Entity, Value};

// =============================================================================
// PROFILE TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ProfileType {
    Common,
    Dataset,
    RepositoryCollection,
    RepositoryObject,
    Language,
    PrimaryMaterial,
    DerivedMaterial,
    Annotation,
    Place,
    Geometry,
}

impl ProfileType {
    pub const ALL: [ProfileType; 10] = [
        ProfileType::Common,
        ProfileType::Dataset,
        ProfileType::RepositoryCollection,
        ProfileType::RepositoryObject,
        ProfileType::Language,
        ProfileType::PrimaryMaterial,
        ProfileType::DerivedMaterial,
        ProfileType::Annotation,
        ProfileType::Place,
        ProfileType::Geometry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileType::Common => "Common",
            ProfileType::Dataset => "Dataset",
            ProfileType::RepositoryCollection => "RepositoryCollection",
            ProfileType::RepositoryObject => "RepositoryObject",
            ProfileType::Language => "Language",
            ProfileType::PrimaryMaterial => "PrimaryMaterial",
            ProfileType::DerivedMaterial => "DerivedMaterial",
            ProfileType::Annotation => "Annotation",
            ProfileType::Place => "Place",
            ProfileType::Geometry => "Geometry",
        }
    }

    /// The profile type named by an `@type` value. `Common` is not a type
    /// an entity can declare.
    pub fn from_type_name(name: &str) -> Option<Self> {
        ProfileType::ALL
            .into_iter()
            .find(|t| *t != ProfileType::Common && t.as_str() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Clause modality. The severity a plain violation of the clause carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Must,
    Should,
    May,
}

impl Modality {
    pub fn severity(self) -> Severity {
        match self {
            Modality::Must => Severity::Error,
            Modality::Should => Severity::Warning,
            Modality::May => Severity::Info,
        }
    }
}

pub type Check = fn(&mut Context<'_>, &[Value], &Entity);

#[derive(Debug)]
pub struct Rule {
    pub property: &'static str,
    pub modality: Modality,
    pub clause: String,
    check: Check,
}

impl Rule {
    pub fn new(
        property: &'static str,
        modality: Modality,
        clause: impl Into<String>,
        check: Check,
    ) -> Arc<Rule> {
        Arc::new(Rule {
            property,
            modality,
            clause: clause.into(),
            check,
        })
    }

    /// Run the check in whatever scope `ctx` currently has. Use
    /// [`Context::apply`] to scope findings to this rule instead.
    pub fn run(&self, ctx: &mut Context<'_>, values: &[Value], entity: &Entity) {
        (self.check)(ctx, values, entity)
    }
}

#[derive(Debug)]
pub struct RuleTable {
    pub profile_type: ProfileType,
    rules: Vec<Arc<Rule>>,
}

impl RuleTable {
    pub fn new(profile_type: ProfileType, rules: Vec<Arc<Rule>>) -> Self {
        RuleTable {
            profile_type,
            rules,
        }
    }

    pub fn get(&self, property: &str) -> Option<&Arc<Rule>> {
        self.rules.iter().find(|r| r.property == property)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Rule>> {
        self.rules.iter()
    }

    pub fn properties(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.property)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Every rule table of the profile, plus the configuration the checks read.
/// Read-only once built; one registry can serve any number of runs.
#[derive(Debug)]
pub struct Registry {
    config: ProfileConfig,
    tables: Vec<RuleTable>,
    property_names: Arc<Rule>,
}

impl Registry {
    pub fn new(config: ProfileConfig) -> Self {
        let shared = rules::Shared::new(&config);
        let tables = ProfileType::ALL
            .into_iter()
            .map(|ty| RuleTable::new(ty, rules::table_rules(ty, &shared, &config)))
            .collect();
        Registry {
            config,
            tables,
            property_names: rules::dataset::property_names(),
        }
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn table(&self, ty: ProfileType) -> &RuleTable {
        &self.tables[ty.index()]
    }

    /// The graph-wide property name audit the Dataset `@type` rule runs.
    pub fn property_names(&self) -> &Arc<Rule> {
        &self.property_names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(ProfileConfig::default())
    }
}

/// Registry built from [`ProfileConfig::default`], created on first use.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::default)
}
