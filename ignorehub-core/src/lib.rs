//! Core types and pure operations for the ignorehub generator.
//!
//! Two components live here and everything else composes them: the merge
//! engine, which combines user-authored `.gitignore` content with fetched
//! template bodies into one idempotent output, and the query resolver, which
//! maps free-text template names onto canonical index records. Neither
//! performs any I/O.

mod classify;
mod merge;
mod resolve;
mod template;

pub use classify::classify_paths;
pub use merge::{
    GENERATED_END, GENERATED_START, MergeOptions, build_generated_block, collect_rule_set,
    merge_gitignore, strip_generated_block,
};
pub use resolve::{
    IssueKind, ResolveIssue, ResolvedQueries, normalize, resolve_query, resolve_template_queries,
};
pub use template::{TemplateKind, TemplateRecord, TemplateWithSource};
