use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::detect;

#[derive(Args)]
pub struct DetectCommand {
    /// Project directory to inspect
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

impl DetectCommand {
    pub fn run(&self) -> Result<()> {
        let queries = detect::detect_queries(&self.dir);

        if queries.is_empty() {
            println!("No project markers detected");
        } else {
            println!("Detected templates:");
            for query in &queries {
                println!("  {query}");
            }
        }

        Ok(())
    }
}
