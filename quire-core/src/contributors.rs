//! Folding a flat author list into Readium's named contributor roles.

use std::fmt::{self, Display};

use quire_model::Author;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Contributor roles Readium metadata has a dedicated key for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Author,
    Translator,
    Editor,
    Artist,
    Illustrator,
    Letterer,
    Penciler,
    Colorist,
    Inker,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Author,
        Role::Translator,
        Role::Editor,
        Role::Artist,
        Role::Illustrator,
        Role::Letterer,
        Role::Penciler,
        Role::Colorist,
        Role::Inker,
    ];

    /// Metadata key, which is also the canonical role spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Translator => "translator",
            Role::Editor => "editor",
            Role::Artist => "artist",
            Role::Illustrator => "illustrator",
            Role::Letterer => "letterer",
            Role::Penciler => "penciler",
            Role::Colorist => "colorist",
            Role::Inker => "inker",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw role string interpreted against the known roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContributorRole {
    /// Canonical spelling of a known role.
    Known(Role),
    /// Accepted alternate spelling. Sorts after the canonical spelling
    /// within the role's list.
    Variant(Role),
    /// Anything else, blank included.
    Other(String),
}

impl ContributorRole {
    /// Exact, case-sensitive match.
    pub fn parse(raw: &str) -> Self {
        if raw == "penciller" {
            return ContributorRole::Variant(Role::Penciler);
        }
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == raw)
            .map(ContributorRole::Known)
            .unwrap_or_else(|| ContributorRole::Other(raw.to_string()))
    }
}

/// Contributor names grouped by role, plus a `contributor` overflow list for
/// roles Readium has no key for.
///
/// Every author handed to [`ContributorRoleMap::from_authors`] lands in
/// exactly one list, so [`len`](Self::len) always equals the input length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContributorRoleMap {
    by_role: [Vec<String>; 9],
    contributor: Vec<String>,
}

impl ContributorRoleMap {
    pub fn from_authors(authors: &[Author]) -> Self {
        let mut map = Self::default();
        let mut variants = Vec::new();

        for author in authors {
            match ContributorRole::parse(&author.role) {
                ContributorRole::Known(role) => {
                    map.by_role[role.index()].push(author.name.clone())
                }
                ContributorRole::Variant(role) => {
                    variants.push((role, author.name.clone()))
                }
                ContributorRole::Other(_) => {
                    map.contributor.push(author.name.clone())
                }
            }
        }

        for (role, name) in variants {
            map.by_role[role.index()].push(name);
        }

        map
    }

    pub fn names(&self, role: Role) -> &[String] {
        &self.by_role[role.index()]
    }

    /// Names whose role has no dedicated key.
    pub fn contributors(&self) -> &[String] {
        &self.contributor
    }

    pub fn len(&self) -> usize {
        self.by_role.iter().map(Vec::len).sum::<usize>()
            + self.contributor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty role lists in metadata key order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &[String])> {
        Role::ALL
            .into_iter()
            .map(|role| (role, self.names(role)))
            .filter(|(_, names)| !names.is_empty())
    }
}

/// Serializes as metadata keys (`author`, `penciler`, ..., `contributor`),
/// omitting empty lists. Meant to be flattened into the metadata object.
impl Serialize for ContributorRoleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (role, names) in self.iter() {
            map.serialize_entry(role.as_str(), names)?;
        }
        if !self.contributor.is_empty() {
            map.serialize_entry("contributor", &self.contributor)?;
        }
        map.end()
    }
}
