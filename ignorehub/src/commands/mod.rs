mod completions;
mod detect;
mod generate;
mod list;
mod refresh;
mod search;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use detect::DetectCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use refresh::RefreshCommand;
use search::SearchCommand;

/// Extension trait for exiting on remote errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ignorehub_remote::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ignorehub")]
#[command(version)]
#[command(about = "Generate .gitignore files from shared templates")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Search(cmd) => cmd.run(),
            Commands::Detect(cmd) => cmd.run(),
            Commands::Refresh(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate or update a .gitignore from selected templates
    Generate(GenerateCommand),

    /// List the available templates
    List(ListCommand),

    /// Resolve a single template query against the index
    Search(SearchCommand),

    /// Show the templates auto-detected from project markers
    Detect(DetectCommand),

    /// Re-fetch the template index and refresh the cache
    Refresh(RefreshCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
