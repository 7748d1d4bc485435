use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a template within the index, fixed at index-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Language,
    Framework,
    Global,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Language => "language",
            TemplateKind::Framework => "framework",
            TemplateKind::Global => "global",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical identity of one selectable template.
///
/// Created when the remote template tree is enumerated and classified;
/// immutable thereafter. `id` is unique within an index snapshot and the
/// whole index is superseded wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Stable unique identifier: the source path minus its extension.
    /// Root templates use the bare name, `Global/` templates keep the prefix.
    pub id: String,

    /// Human-readable display name (currently equal to `id`).
    pub name: String,

    /// Source-relative path used to fetch the body content.
    pub path: String,

    pub kind: TemplateKind,
}

/// A template record paired with its fetched raw body.
///
/// Created transiently per merge or preview, never persisted.
#[derive(Debug, Clone)]
pub struct TemplateWithSource {
    pub meta: TemplateRecord,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(TemplateKind::Language.to_string(), "language");
        assert_eq!(TemplateKind::Framework.to_string(), "framework");
        assert_eq!(TemplateKind::Global.to_string(), "global");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&TemplateKind::Global).unwrap();
        assert_eq!(json, "\"global\"");

        let kind: TemplateKind = serde_json::from_str("\"language\"").unwrap();
        assert_eq!(kind, TemplateKind::Language);
    }
}
