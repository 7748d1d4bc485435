use clap::Args;
use eyre::Result;
use ignorehub_remote::{IndexCache, RemoteSource};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RefreshCommand {}

impl RefreshCommand {
    pub fn run(&self) -> Result<()> {
        let source = RemoteSource::default();
        let records = source.fetch_index().unwrap_or_exit();

        match IndexCache::user() {
            Some(cache) => {
                cache.store(&records).unwrap_or_exit();
                println!(
                    "Cached {} templates at {}",
                    records.len(),
                    cache.path().display()
                );
            }
            None => {
                eprintln!("warning: no cache directory available");
                println!("Fetched {} templates", records.len());
            }
        }

        Ok(())
    }
}
