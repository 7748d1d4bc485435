//! The merge engine: combines user-authored gitignore content with freshly
//! fetched template bodies into one idempotent, rule-deduplicated output.
//!
//! Everything here is a pure function over strings and in-memory records.
//! The generated region is delimited by sentinel marker lines; whatever sits
//! outside them is user-owned manual content and survives regeneration.

use std::collections::HashSet;

use crate::template::TemplateWithSource;

/// First line of the generated region.
pub const GENERATED_START: &str = "### IGNORE-HUB GENERATED START";
/// Last line of the generated region.
pub const GENERATED_END: &str = "### IGNORE-HUB GENERATED END";

/// Knobs for [`merge_gitignore`].
#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    /// Wrap the generated block in the sentinel marker lines.
    pub include_watermark: bool,
    /// Emit `## <name>` section headers instead of `### <kind>: <name>`.
    pub use_simple_section_separator: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            include_watermark: true,
            use_simple_section_separator: false,
        }
    }
}

fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_rule_line(trimmed: &str) -> bool {
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Remove every complete sentinel-delimited block from `content` and return
/// the remaining manual portion, newline-normalized and with trailing blank
/// lines trimmed.
///
/// A start sentinel with no matching end sentinel is kept as literal text;
/// absent any sentinels the input passes through unchanged (modulo the same
/// normalization).
pub fn strip_generated_block(content: &str) -> String {
    let normalized = normalize_newlines(content);
    let lines: Vec<&str> = normalized.lines().collect();

    let mut kept: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].trim() == GENERATED_START {
            if let Some(end) = lines[i + 1..].iter().position(|l| l.trim() == GENERATED_END) {
                i += end + 2;
                continue;
            }
        }
        kept.push(lines[i]);
        i += 1;
    }

    kept.join("\n").trim_end().to_string()
}

/// Collect the set of rule lines in `content`: every line that is non-empty
/// and not a comment after trimming, stored trimmed.
pub fn collect_rule_set(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| is_rule_line(line))
        .map(str::to_string)
        .collect()
}

/// Render the generated block for `templates`, in caller-supplied order.
///
/// A single running dedup set, seeded from `existing_rules`, is carried
/// across all templates: a rule line is emitted the first time it is seen and
/// dropped on every later occurrence, whether that occurrence is in the same
/// template or a later one. Comment and blank lines are never deduplicated.
/// Returns the empty string for an empty template list.
pub fn build_generated_block(
    templates: &[TemplateWithSource],
    existing_rules: &HashSet<String>,
    options: &MergeOptions,
) -> String {
    if templates.is_empty() {
        return String::new();
    }

    let mut seen = existing_rules.clone();
    let mut sections = Vec::with_capacity(templates.len());

    for template in templates {
        let meta = &template.meta;
        let header = if options.use_simple_section_separator {
            format!("## {}", meta.name)
        } else {
            format!("### {}: {}", meta.kind, meta.name)
        };

        let mut lines = vec![header];
        let body = normalize_newlines(&template.source);
        for line in body.lines() {
            let trimmed = line.trim();
            if !is_rule_line(trimmed) || seen.insert(trimmed.to_string()) {
                lines.push(line.to_string());
            }
        }

        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        sections.push(lines.join("\n"));
    }

    let body = sections.join("\n\n");
    if options.include_watermark {
        format!("{GENERATED_START}\n{body}\n{GENERATED_END}")
    } else {
        body
    }
}

/// Merge `templates` into `existing_content` and return the new file content.
///
/// The previous generated block (if any) is stripped first, the manual
/// remainder seeds the dedup set, and the freshly built block is appended
/// after one blank line. Re-running with the output as input and the same
/// templates and options reproduces the output byte for byte.
pub fn merge_gitignore(
    existing_content: Option<&str>,
    templates: &[TemplateWithSource],
    options: &MergeOptions,
) -> String {
    let manual = strip_generated_block(existing_content.unwrap_or_default());
    let existing_rules = collect_rule_set(&manual);
    let block = build_generated_block(templates, &existing_rules, options);

    if manual.is_empty() {
        format!("{block}\n")
    } else {
        format!("{manual}\n\n{block}\n")
    }
}
