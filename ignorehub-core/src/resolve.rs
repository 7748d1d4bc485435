//! Free-text template query resolution.
//!
//! Maps user-typed template names onto canonical index records, tolerating
//! case and punctuation variation, known short-hands, and partial text.
//! Ambiguity is surfaced as data rather than guessed away.

use indexmap::IndexSet;

use crate::template::TemplateRecord;

/// Suggestions attached to an `unknown` issue are capped at this many.
const MAX_SUGGESTIONS: usize = 8;

/// Short-hands expanded before the normalized query itself is tried.
/// Targets are written in canonical form and normalized at expansion time.
const ALIASES: &[(&str, &[&str])] = &[
    ("csharp", &["csharp", "c#"]),
    ("dotnet", &["visualstudio"]),
    ("golang", &["go"]),
    ("js", &["javascript"]),
    ("kt", &["kotlin"]),
    ("nodejs", &["node"]),
    ("objc", &["objective-c"]),
    ("py", &["python"]),
    ("rb", &["ruby"]),
    ("rs", &["rust"]),
    ("ts", &["typescript"]),
];

/// Lowercase a token and strip every character outside `[a-z0-9]`.
/// Two tokens compare equal iff their normalized forms are identical.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// How a query failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// More than one record matched with no way to pick a single winner.
    Ambiguous,
    /// Nothing matched.
    Unknown,
}

/// A query that did not resolve to exactly one record.
#[derive(Debug, Clone)]
pub struct ResolveIssue {
    pub kind: IssueKind,
    /// The normalized candidate the outcome was observed for.
    pub query: String,
    /// The query as the user typed it.
    pub raw_query: String,
    /// Ambiguous: every conflicting record. Unknown: up to
    /// [`MAX_SUGGESTIONS`] suggestions, possibly none.
    pub matches: Vec<TemplateRecord>,
}

/// Outcome of resolving a batch of queries. Issues never abort the batch;
/// callers decide whether a non-empty issue list voids the selection.
#[derive(Debug, Clone, Default)]
pub struct ResolvedQueries {
    /// Resolved records in first-occurrence order, deduplicated by id.
    pub selected: Vec<TemplateRecord>,
    /// One issue per query that failed to resolve singly.
    pub issues: Vec<ResolveIssue>,
}

impl ResolvedQueries {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// The candidate query strings for one raw query: alias expansions first,
/// then the normalized raw query itself, deduplicated in that order.
fn candidate_queries(raw_query: &str) -> Vec<String> {
    let normalized = normalize(raw_query);
    let mut candidates: Vec<String> = Vec::new();

    if let Some((_, targets)) = ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        for target in *targets {
            let target = normalize(target);
            if !candidates.contains(&target) {
                candidates.push(target);
            }
        }
    }

    if !candidates.contains(&normalized) {
        candidates.push(normalized);
    }

    candidates
}

/// Whenever multiple matches are listed, they are sorted by kind then by
/// case-insensitive name.
fn sort_matches(records: &mut [TemplateRecord]) {
    records.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

fn issue(
    kind: IssueKind,
    query: &str,
    raw_query: &str,
    matches: Vec<&TemplateRecord>,
) -> ResolveIssue {
    let mut matches: Vec<TemplateRecord> = matches.into_iter().cloned().collect();
    sort_matches(&mut matches);
    ResolveIssue {
        kind,
        query: query.to_string(),
        raw_query: raw_query.to_string(),
        matches,
    }
}

/// Resolve one raw query against the index.
///
/// Each candidate query is tried in turn: first an exact pass over normalized
/// ids and names, then a substring pass, stopping at the first pass that
/// matches anything. A single match resolves; several are an ambiguity. When
/// every candidate comes up empty, a prefix pass over all candidates combined
/// gets one last chance to resolve singly, and otherwise the query is
/// unknown, carrying the first candidate's prefix matches as suggestions.
pub fn resolve_query(
    index: &[TemplateRecord],
    raw_query: &str,
) -> Result<TemplateRecord, ResolveIssue> {
    let candidates = candidate_queries(raw_query);

    // A query that normalizes to nothing would substring-match the entire
    // index; report it as unknown instead.
    if candidates.iter().all(|c| c.is_empty()) {
        return Err(ResolveIssue {
            kind: IssueKind::Unknown,
            query: String::new(),
            raw_query: raw_query.to_string(),
            matches: Vec::new(),
        });
    }

    for candidate in &candidates {
        let exact: Vec<&TemplateRecord> = index
            .iter()
            .filter(|t| normalize(&t.id) == *candidate || normalize(&t.name) == *candidate)
            .collect();
        match exact.len() {
            1 => return Ok(exact[0].clone()),
            n if n > 1 => return Err(issue(IssueKind::Ambiguous, candidate, raw_query, exact)),
            _ => {}
        }

        let substring: Vec<&TemplateRecord> = index
            .iter()
            .filter(|t| {
                normalize(&t.id).contains(candidate.as_str())
                    || normalize(&t.name).contains(candidate.as_str())
            })
            .collect();
        match substring.len() {
            1 => return Ok(substring[0].clone()),
            n if n > 1 => {
                return Err(issue(IssueKind::Ambiguous, candidate, raw_query, substring));
            }
            _ => {}
        }
    }

    // No candidate produced any match; fall back to a prefix pass across all
    // candidates combined, deduplicated by id.
    let mut seen_ids: IndexSet<&str> = IndexSet::new();
    let mut prefix: Vec<&TemplateRecord> = Vec::new();
    for candidate in &candidates {
        for record in index {
            if (normalize(&record.id).starts_with(candidate.as_str())
                || normalize(&record.name).starts_with(candidate.as_str()))
                && seen_ids.insert(record.id.as_str())
            {
                prefix.push(record);
            }
        }
    }
    if prefix.len() == 1 {
        return Ok(prefix[0].clone());
    }

    let first = &candidates[0];
    let suggestions: Vec<&TemplateRecord> = prefix
        .into_iter()
        .filter(|t| {
            normalize(&t.id).starts_with(first.as_str())
                || normalize(&t.name).starts_with(first.as_str())
        })
        .collect();
    let mut unknown = issue(IssueKind::Unknown, first, raw_query, suggestions);
    unknown.matches.truncate(MAX_SUGGESTIONS);
    Err(unknown)
}

/// Resolve a batch of raw queries.
///
/// Blank queries are skipped. Resolved records accumulate in encounter order,
/// deduplicated by id: a later query landing on an already-selected record is
/// dropped silently and is not an issue. Failed queries each contribute one
/// issue. This function itself never fails.
pub fn resolve_template_queries(index: &[TemplateRecord], queries: &[String]) -> ResolvedQueries {
    let mut selected_ids: IndexSet<String> = IndexSet::new();
    let mut result = ResolvedQueries::default();

    for raw_query in queries {
        if raw_query.trim().is_empty() {
            continue;
        }

        match resolve_query(index, raw_query) {
            Ok(record) => {
                if selected_ids.insert(record.id.clone()) {
                    result.selected.push(record);
                }
            }
            Err(issue) => result.issues.push(issue),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::template::TemplateKind;

    use super::*;

    fn record(id: &str, kind: TemplateKind) -> TemplateRecord {
        TemplateRecord {
            id: id.to_string(),
            name: id.to_string(),
            path: format!("{id}.gitignore"),
            kind,
        }
    }

    fn index() -> Vec<TemplateRecord> {
        vec![
            record("C", TemplateKind::Language),
            record("C#", TemplateKind::Language),
            record("Java", TemplateKind::Language),
            record("JavaScript", TemplateKind::Language),
            record("Python", TemplateKind::Language),
            record("Node", TemplateKind::Framework),
            record("Unity", TemplateKind::Framework),
            record("Global/VisualStudioCode", TemplateKind::Global),
        ]
    }

    fn queries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Visual Studio!"), "visualstudio");
        assert_eq!(normalize("C#"), "c");
        assert_eq!(normalize("Global/Vim"), "globalvim");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_exact_match_resolves() {
        let resolved = resolve_query(&index(), "python").unwrap();
        assert_eq!(resolved.id, "Python");
    }

    #[test]
    fn test_alias_resolves() {
        let resolved = resolve_query(&index(), "js").unwrap();
        assert_eq!(resolved.id, "JavaScript");

        let resolved = resolve_query(&index(), "py").unwrap();
        assert_eq!(resolved.id, "Python");
    }

    #[test]
    fn test_substring_single_match_resolves() {
        let resolved = resolve_query(&index(), "script").unwrap();
        assert_eq!(resolved.id, "JavaScript");
    }

    #[test]
    fn test_substring_ambiguity_lists_sorted_matches() {
        let issue = resolve_query(&index(), "ja").unwrap_err();
        assert_eq!(issue.kind, IssueKind::Ambiguous);
        assert_eq!(issue.raw_query, "ja");
        let names: Vec<&str> = issue.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Java", "JavaScript"]);
    }

    #[test]
    fn test_ambiguity_sorts_kind_before_name() {
        let mixed = vec![
            record("Nim", TemplateKind::Language),
            record("Nix", TemplateKind::Framework),
        ];
        let issue = resolve_query(&mixed, "ni").unwrap_err();
        let names: Vec<&str> = issue.matches.iter().map(|m| m.name.as_str()).collect();
        // framework sorts before language.
        assert_eq!(names, ["Nix", "Nim"]);
    }

    #[test]
    fn test_csharp_alias_collides_with_c() {
        // "csharp" expands to {csharp, c#}; "c#" normalizes to "c", which is
        // also the normalized form of the C template. The collision surfaces
        // as an ambiguity instead of a silent pick.
        let issue = resolve_query(&index(), "csharp").unwrap_err();
        assert_eq!(issue.kind, IssueKind::Ambiguous);
        let names: Vec<&str> = issue.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["C", "C#"]);
    }

    #[test]
    fn test_unknown_has_empty_suggestions() {
        let issue = resolve_query(&index(), "not-a-template").unwrap_err();
        assert_eq!(issue.kind, IssueKind::Unknown);
        assert_eq!(issue.raw_query, "not-a-template");
        assert!(issue.matches.is_empty());
    }

    #[test]
    fn test_unnormalizable_query_is_unknown() {
        let issue = resolve_query(&index(), "!!!").unwrap_err();
        assert_eq!(issue.kind, IssueKind::Unknown);
        assert!(issue.matches.is_empty());
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let resolved = resolve_query(&index(), "  JAVA  ").unwrap();
        assert_eq!(resolved.id, "Java");

        let resolved = resolve_query(&index(), "java-script").unwrap();
        assert_eq!(resolved.id, "JavaScript");
    }

    #[test]
    fn test_batch_dedup_preserves_first_occurrence_order() {
        let result = resolve_template_queries(&index(), &queries(&["node", "java", "node"]));
        assert!(result.is_clean());
        let ids: Vec<&str> = result.selected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["Node", "Java"]);
    }

    #[test]
    fn test_batch_skips_blank_queries() {
        let result = resolve_template_queries(&index(), &queries(&["", "  ", "node"]));
        assert!(result.is_clean());
        assert_eq!(result.selected.len(), 1);
    }

    #[test]
    fn test_batch_collects_every_issue() {
        let result = resolve_template_queries(&index(), &queries(&["ja", "nope", "node"]));
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].kind, IssueKind::Ambiguous);
        assert_eq!(result.issues[1].kind, IssueKind::Unknown);
        assert_eq!(result.selected.len(), 1);
    }

    #[test]
    fn test_alias_to_different_record_still_dedups_by_id() {
        let result = resolve_template_queries(&index(), &queries(&["python", "py"]));
        assert!(result.is_clean());
        assert_eq!(result.selected.len(), 1);
    }
}
