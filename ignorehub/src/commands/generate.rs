use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, eyre};
use ignorehub_core::{
    IssueKind, MergeOptions, ResolveIssue, TemplateRecord, merge_gitignore,
    resolve_template_queries,
};
use ignorehub_remote::RemoteSource;

use crate::{detect, index, wizard};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Templates to merge, as comma-separated free-text queries
    #[arg(short, long, value_delimiter = ',')]
    pub templates: Vec<String>,

    /// Seed the template list from project markers
    #[arg(long)]
    pub detect: bool,

    /// Output file
    #[arg(short, long, default_value = ".gitignore")]
    pub output: PathBuf,

    /// Print the merged content instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Plain output: simple `##` section headers, no generated-block markers
    #[arg(long)]
    pub plain: bool,

    /// Ignore the cached index and fetch a fresh one
    #[arg(long)]
    pub refresh: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let source = RemoteSource::default();
        let records = index::load_index(&source, self.refresh).unwrap_or_exit();

        let selected = self.select_templates(&records)?;
        if selected.is_empty() {
            return Err(eyre!("no templates selected"));
        }

        let (fetched, failures) = source.fetch_bodies(&selected);
        for failure in &failures {
            eprintln!("warning: failed to fetch '{}': {}", failure.id, failure.error);
        }
        if fetched.is_empty() {
            return Err(eyre!("all template fetches failed"));
        }

        let existing = match std::fs::read_to_string(&self.output) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("failed to read {}", self.output.display()));
            }
        };

        let options = MergeOptions {
            include_watermark: !self.plain,
            use_simple_section_separator: self.plain,
        };
        let content = merge_gitignore(existing.as_deref(), &fetched, &options);

        if self.stdout {
            print!("{content}");
            return Ok(());
        }

        std::fs::write(&self.output, &content)
            .wrap_err_with(|| format!("failed to write {}", self.output.display()))?;

        println!(
            "Wrote {} ({} templates):",
            self.output.display(),
            fetched.len()
        );
        for template in &fetched {
            println!("  + {} ({})", template.meta.name, template.meta.kind);
        }

        Ok(())
    }

    /// Resolve the selection: explicit queries and detected markers when
    /// given, the interactive picker otherwise.
    fn select_templates(&self, records: &[TemplateRecord]) -> Result<Vec<TemplateRecord>> {
        let mut queries = self.templates.clone();
        if self.detect {
            queries.extend(detect::detect_queries(Path::new(".")));
        }

        if queries.is_empty() {
            if std::io::stdin().is_terminal() {
                return wizard::select_templates(records);
            }
            return Err(eyre!(
                "no templates given; pass --templates or run in a terminal for the interactive picker"
            ));
        }

        let resolution = resolve_template_queries(records, &queries);
        if !resolution.is_clean() {
            for issue in &resolution.issues {
                report_issue(issue);
            }
            return Err(eyre!(
                "{} template queries could not be resolved",
                resolution.issues.len()
            ));
        }

        Ok(resolution.selected)
    }
}

fn report_issue(issue: &ResolveIssue) {
    match issue.kind {
        IssueKind::Ambiguous => {
            eprintln!("'{}' is ambiguous; it matches:", issue.raw_query);
            for record in &issue.matches {
                eprintln!("  {} ({})", record.name, record.kind);
            }
        }
        IssueKind::Unknown => {
            eprintln!("no template matches '{}'", issue.raw_query);
            if !issue.matches.is_empty() {
                eprintln!("did you mean:");
                for record in &issue.matches {
                    eprintln!("  {} ({})", record.name, record.kind);
                }
            }
        }
    }
}
