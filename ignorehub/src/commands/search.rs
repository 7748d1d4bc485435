use clap::Args;
use eyre::Result;
use ignorehub_core::{IssueKind, resolve_query};
use ignorehub_remote::RemoteSource;

use crate::index;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct SearchCommand {
    /// Free-text template query
    pub query: String,

    /// Ignore the cached index and fetch a fresh one
    #[arg(long)]
    pub refresh: bool,
}

impl SearchCommand {
    pub fn run(&self) -> Result<()> {
        let source = RemoteSource::default();
        let records = index::load_index(&source, self.refresh).unwrap_or_exit();

        match resolve_query(&records, &self.query) {
            Ok(record) => {
                println!("{} ({})", record.name, record.kind);
                println!("  path: {}", record.path);
            }
            Err(issue) => match issue.kind {
                IssueKind::Ambiguous => {
                    println!(
                        "'{}' is ambiguous; it matches {} templates:",
                        self.query,
                        issue.matches.len()
                    );
                    for record in &issue.matches {
                        println!("  {} ({})", record.name, record.kind);
                    }
                }
                IssueKind::Unknown => {
                    println!("no template matches '{}'", self.query);
                    if !issue.matches.is_empty() {
                        println!("did you mean:");
                        for record in &issue.matches {
                            println!("  {} ({})", record.name, record.kind);
                        }
                    }
                }
            },
        }

        Ok(())
    }
}
