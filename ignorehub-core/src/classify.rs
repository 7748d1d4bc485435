//! Classification of the raw upstream template tree into index records.

use crate::resolve::normalize;
use crate::template::{TemplateKind, TemplateRecord};

const TEMPLATE_EXTENSION: &str = ".gitignore";
const GLOBAL_PREFIX: &str = "Global/";

/// Normalized names of root templates that describe a language rather than a
/// framework or tool. Unknown root names default to `framework`.
const LANGUAGE_HINTS: &[&str] = &[
    "ada",
    "c",
    "clojure",
    "commonlisp",
    "cpp",
    "csharp",
    "d",
    "dart",
    "elixir",
    "elm",
    "erlang",
    "fortran",
    "fsharp",
    "go",
    "haskell",
    "java",
    "julia",
    "kotlin",
    "lua",
    "nim",
    "objectivec",
    "ocaml",
    "perl",
    "php",
    "purescript",
    "python",
    "r",
    "racket",
    "ruby",
    "rust",
    "scala",
    "scheme",
    "smalltalk",
    "swift",
    "zig",
];

/// Build the ordered template index from the path list of the remote tree.
///
/// Root `*.gitignore` entries become `language` or `framework` records,
/// `Global/*.gitignore` entries become `global` records with the `Global/`
/// prefix kept in their id; everything else is skipped.
pub fn classify_paths<I, S>(paths: I) -> Vec<TemplateRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some(stem) = path.strip_suffix(TEMPLATE_EXTENSION) else {
            continue;
        };

        let kind = if let Some(bare) = stem.strip_prefix(GLOBAL_PREFIX) {
            if bare.contains('/') {
                continue;
            }
            TemplateKind::Global
        } else if stem.contains('/') {
            continue;
        } else if LANGUAGE_HINTS.contains(&normalize(stem).as_str()) {
            TemplateKind::Language
        } else {
            TemplateKind::Framework
        };

        records.push(TemplateRecord {
            id: stem.to_string(),
            name: stem.to_string(),
            path: path.to_string(),
            kind,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(paths: &[&str]) -> Vec<TemplateRecord> {
        classify_paths(paths.iter().copied())
    }

    #[test]
    fn test_root_language_template() {
        let records = classified(&["Rust.gitignore"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "Rust");
        assert_eq!(records[0].name, "Rust");
        assert_eq!(records[0].path, "Rust.gitignore");
        assert_eq!(records[0].kind, TemplateKind::Language);
    }

    #[test]
    fn test_root_unknown_name_defaults_to_framework() {
        let records = classified(&["Node.gitignore", "Unity.gitignore"]);
        assert!(records.iter().all(|r| r.kind == TemplateKind::Framework));
    }

    #[test]
    fn test_global_template_keeps_prefix() {
        let records = classified(&["Global/Archives.gitignore"]);
        assert_eq!(records[0].id, "Global/Archives");
        assert_eq!(records[0].path, "Global/Archives.gitignore");
        assert_eq!(records[0].kind, TemplateKind::Global);
    }

    #[test]
    fn test_punctuated_language_names() {
        let records = classified(&["C++.gitignore", "C#.gitignore"]);
        assert!(records.iter().all(|r| r.kind == TemplateKind::Language));
    }

    #[test]
    fn test_skips_non_template_and_nested_paths() {
        let records = classified(&[
            "README.md",
            "LICENSE",
            "community/Golang/Hugo.gitignore",
            "Global/deep/Nested.gitignore",
        ]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_index_order_follows_input_order() {
        let records = classified(&["Node.gitignore", "Global/Vim.gitignore", "Rust.gitignore"]);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["Node", "Global/Vim", "Rust"]);
    }
}
