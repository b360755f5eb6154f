//! Type resolution: which rule table applies to an entity.

use super::registry::ProfileType;

/// Priority for entities reached without a prescribed type.
pub const DISPATCH_PRIORITY: [ProfileType; 9] = [
    ProfileType::Dataset,
    ProfileType::RepositoryCollection,
    ProfileType::RepositoryObject,
    ProfileType::PrimaryMaterial,
    ProfileType::DerivedMaterial,
    ProfileType::Annotation,
    ProfileType::Place,
    ProfileType::Geometry,
    ProfileType::Language,
];

/// Mutually exclusive repository types.
pub const REPOSITORY_TYPES: [ProfileType; 2] = [
    ProfileType::RepositoryCollection,
    ProfileType::RepositoryObject,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// First candidate declared, or `Common` when none is.
    pub resolved: ProfileType,
    /// Every candidate declared, in priority order.
    pub present: Vec<ProfileType>,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        self.present.is_empty()
    }

    /// More than one candidate declared. Whether that is a violation is for
    /// the caller to say.
    pub fn is_ambiguous(&self) -> bool {
        self.present.len() > 1
    }
}

/// Pick the first of `candidates` that `declared` names.
pub fn resolve_type<S: AsRef<str>>(declared: &[S], candidates: &[ProfileType]) -> Resolution {
    let present: Vec<ProfileType> = candidates
        .iter()
        .copied()
        .filter(|c| declared.iter().any(|d| d.as_ref() == c.as_str()))
        .collect();
    Resolution {
        resolved: present.first().copied().unwrap_or(ProfileType::Common),
        present,
    }
}
