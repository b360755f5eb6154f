//! Findings: what a validation run reports.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One reported outcome, scoped to the entity and property being checked
/// when it was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub entity_id: Option<String>,
    /// Name of the rule table that was being applied.
    pub entity_type: String,
    pub property: String,
    pub clause: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity_id {
            Some(id) => write!(
                f,
                "[{}] {} (entity '{}', property '{}')",
                self.severity, self.message, id, self.property
            ),
            None => write!(
                f,
                "[{}] {} (property '{}')",
                self.severity, self.message, self.property
            ),
        }
    }
}

/// Findings of one top-level run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Findings(Vec<Finding>);

impl Findings {
    pub fn new() -> Self {
        Findings::default()
    }

    pub fn push(&mut self, finding: Finding) {
        tracing::trace!(
            severity = %finding.severity,
            entity = finding.entity_id.as_deref().unwrap_or(""),
            property = %finding.property,
            message = %finding.message,
            "finding"
        );
        self.0.push(finding);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.0.iter().filter(move |f| f.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Info)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }

    /// Conformant means no error-severity findings anywhere in the run.
    pub fn is_conformant(&self) -> bool {
        self.count(Severity::Error) == 0
    }

    pub fn for_entity<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.0
            .iter()
            .filter(move |f| f.entity_id.as_deref() == Some(id))
    }

    pub fn into_vec(self) -> Vec<Finding> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.0 {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}
