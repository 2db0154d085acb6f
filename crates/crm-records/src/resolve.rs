//! Object-name resolution: loosely-specified names to canonical plurals.

use serde::{Deserialize, Serialize};

/// An object definition from the metadata endpoint: the two name forms the
/// API accepts for a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    #[serde(rename = "namePlural")]
    pub name_plural: String,
    #[serde(rename = "nameSingular")]
    pub name_singular: String,
}

/// Outcome of object-name resolution.
///
/// Resolution is best-effort by contract: a lookup failure or an unknown
/// name falls back to the caller's input instead of failing the command,
/// and the type makes that path explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name matched a known object; holds the canonical plural.
    Resolved(String),
    /// No match (or no lookup); holds the original, trimmed name.
    Fallback(String),
}

impl Resolution {
    /// The resource name to use in REST paths either way.
    pub fn name(&self) -> &str {
        match self {
            Resolution::Resolved(name) | Resolution::Fallback(name) => name,
        }
    }

    /// Consume into the resource name.
    pub fn into_name(self) -> String {
        match self {
            Resolution::Resolved(name) | Resolution::Fallback(name) => name,
        }
    }

    /// True when the name matched a known object definition.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Match a user-supplied name against known object definitions,
/// case-insensitively on either the plural or the singular form.
pub fn match_object(name: &str, defs: &[ObjectDef]) -> Resolution {
    for def in defs {
        if def.name_plural.eq_ignore_ascii_case(name)
            || def.name_singular.eq_ignore_ascii_case(name)
        {
            return Resolution::Resolved(def.name_plural.clone());
        }
    }
    Resolution::Fallback(name.to_string())
}
