use clap::{Args, ValueEnum};
use eyre::Result;
use ignorehub_core::{TemplateKind, TemplateRecord};
use ignorehub_remote::RemoteSource;

use crate::index;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Only show templates of this kind
    #[arg(short, long)]
    pub kind: Option<KindFilter>,

    /// Ignore the cached index and fetch a fresh one
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindFilter {
    Language,
    Framework,
    Global,
}

impl From<KindFilter> for TemplateKind {
    fn from(filter: KindFilter) -> Self {
        match filter {
            KindFilter::Language => TemplateKind::Language,
            KindFilter::Framework => TemplateKind::Framework,
            KindFilter::Global => TemplateKind::Global,
        }
    }
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let source = RemoteSource::default();
        let records = index::load_index(&source, self.refresh).unwrap_or_exit();
        let filter: Option<TemplateKind> = self.kind.map(Into::into);

        let mut first = true;
        for kind in [
            TemplateKind::Language,
            TemplateKind::Framework,
            TemplateKind::Global,
        ] {
            if filter.is_some_and(|f| f != kind) {
                continue;
            }

            let mut group: Vec<&TemplateRecord> =
                records.iter().filter(|r| r.kind == kind).collect();
            if group.is_empty() {
                continue;
            }
            group.sort_by_key(|r| r.name.to_lowercase());

            if !first {
                println!();
            }
            first = false;

            println!("{} ({}):", kind, group.len());
            for record in group {
                println!("  {}", record.name);
            }
        }

        Ok(())
    }
}
