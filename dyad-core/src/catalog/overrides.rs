use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::profile::TypeCode;

/// Hand-authored message and detail for one type pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideMessage {
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Deserialize)]
struct OverrideEntry {
    first: TypeCode,
    second: TypeCode,
    message: String,
    detail: String,
}

/// Optional exact-match table of authored compatibility narrative.
///
/// Lookup is order-insensitive: an entry authored for (a, b) also
/// answers (b, a). Authored text takes priority over generated
/// narrative; the table is empty unless content is injected.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityOverrides {
    entries: HashMap<(TypeCode, TypeCode), OverrideMessage>,
}

impl CompatibilityOverrides {
    /// Table with no entries; every lookup falls through to generated
    /// narrative.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an authored table from a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<OverrideEntry> = serde_json::from_str(json)?;
        let mut table = Self::default();
        for entry in raw {
            table.insert(
                entry.first,
                entry.second,
                OverrideMessage {
                    message: entry.message,
                    detail: entry.detail,
                },
            );
        }
        Ok(table)
    }

    pub fn insert(&mut self, a: TypeCode, b: TypeCode, message: OverrideMessage) {
        self.entries.insert(Self::key(a, b), message);
    }

    /// Authored narrative for the pair, regardless of argument order.
    pub fn get(&self, a: TypeCode, b: TypeCode) -> Option<&OverrideMessage> {
        self.entries.get(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical key: the pair in sorted order.
    fn key(a: TypeCode, b: TypeCode) -> (TypeCode, TypeCode) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TraitProfile;

    fn two_codes() -> (TypeCode, TypeCode) {
        let mut all = TraitProfile::all();
        let a = all.next().unwrap().code();
        let b = all.last().unwrap().code();
        (a, b)
    }

    #[test]
    fn lookup_ignores_argument_order() {
        let (a, b) = two_codes();
        let mut table = CompatibilityOverrides::empty();
        table.insert(
            a,
            b,
            OverrideMessage {
                message: "authored headline".to_string(),
                detail: "authored detail".to_string(),
            },
        );
        assert_eq!(table.get(a, b), table.get(b, a));
        assert!(table.get(a, b).is_some());
        assert!(table.get(a, a).is_none());
    }

    #[test]
    fn parses_entries_from_json() {
        let json = r#"[
            {
                "first": "assertive-logical-independent",
                "second": "receptive-intuitive-devoted",
                "message": "m",
                "detail": "d"
            }
        ]"#;
        let table = CompatibilityOverrides::from_json_str(json).unwrap();
        assert_eq!(table.len(), 1);
        let a: TypeCode = "assertive-logical-independent".parse().unwrap();
        let b: TypeCode = "receptive-intuitive-devoted".parse().unwrap();
        assert_eq!(table.get(b, a).unwrap().message, "m");
    }
}
