//! Project marker detection: suggests template queries from files present in
//! a project directory.

use std::path::Path;

/// How a marker decides whether it applies to a project directory.
pub enum Condition {
    /// A file or directory with this exact name exists at the root.
    Path(&'static str),
    /// Any file directly under the root has this extension.
    Extension(&'static str),
    /// Arbitrary check over the project root.
    Predicate(fn(&Path) -> bool),
}

impl Condition {
    fn matches(&self, root: &Path) -> bool {
        match self {
            Condition::Path(name) => root.join(name).exists(),
            Condition::Extension(ext) => std::fs::read_dir(root)
                .map(|entries| {
                    entries
                        .flatten()
                        .any(|entry| entry.path().extension().is_some_and(|e| e == *ext))
                })
                .unwrap_or(false),
            Condition::Predicate(check) => check(root),
        }
    }
}

/// A marker and the template query it votes for.
pub struct MarkerRule {
    pub query: &'static str,
    pub condition: Condition,
}

fn python_markers(root: &Path) -> bool {
    ["requirements.txt", "pyproject.toml", "setup.py"]
        .iter()
        .any(|marker| root.join(marker).exists())
}

fn java_build_files(root: &Path) -> bool {
    ["pom.xml", "build.gradle", "build.gradle.kts"]
        .iter()
        .any(|marker| root.join(marker).exists())
}

const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        query: "rust",
        condition: Condition::Path("Cargo.toml"),
    },
    MarkerRule {
        query: "node",
        condition: Condition::Path("package.json"),
    },
    MarkerRule {
        query: "go",
        condition: Condition::Path("go.mod"),
    },
    MarkerRule {
        query: "java",
        condition: Condition::Predicate(java_build_files),
    },
    MarkerRule {
        query: "python",
        condition: Condition::Predicate(python_markers),
    },
    MarkerRule {
        query: "python",
        condition: Condition::Extension("py"),
    },
    MarkerRule {
        query: "ruby",
        condition: Condition::Path("Gemfile"),
    },
    MarkerRule {
        query: "composer",
        condition: Condition::Path("composer.json"),
    },
    MarkerRule {
        query: "cmake",
        condition: Condition::Path("CMakeLists.txt"),
    },
    MarkerRule {
        query: "terraform",
        condition: Condition::Extension("tf"),
    },
    MarkerRule {
        query: "elixir",
        condition: Condition::Path("mix.exs"),
    },
    MarkerRule {
        query: "swift",
        condition: Condition::Path("Package.swift"),
    },
];

/// Template queries suggested by the markers present under `root`, in table
/// order, each query at most once.
pub fn detect_queries(root: &Path) -> Vec<String> {
    let mut queries: Vec<String> = Vec::new();
    for rule in MARKER_RULES {
        if rule.condition.matches(root) && !queries.iter().any(|q| q == rule.query) {
            queries.push(rule.query.to_string());
        }
    }
    queries
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detects_path_marker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();

        assert_eq!(detect_queries(temp.path()), ["rust"]);
    }

    #[test]
    fn test_detects_extension_marker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("main.tf"), "").unwrap();

        assert_eq!(detect_queries(temp.path()), ["terraform"]);
    }

    #[test]
    fn test_predicate_and_extension_vote_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "").unwrap();
        fs::write(temp.path().join("script.py"), "").unwrap();

        assert_eq!(detect_queries(temp.path()), ["python"]);
    }

    #[test]
    fn test_multiple_markers_in_table_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();

        assert_eq!(detect_queries(temp.path()), ["rust", "node"]);
    }

    #[test]
    fn test_empty_directory_detects_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(detect_queries(temp.path()).is_empty());
    }
}
