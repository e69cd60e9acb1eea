mod clean;
mod completions;
mod generate;
mod init;
mod list;
mod scaffold;

use clap::{Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use scaffold::ScaffoldCommand;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudo_schema::Result<T> {
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

impl<T> UnwrapOrExit<T> for crudo_manifest::Result<T> {
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
#[command(name = "crudo")]
#[command(version)]
#[command(about = "Generate React CRUD interfaces from entity schemas")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Scaffold(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a project config and manifest
    Init(InitCommand),

    /// Write a starter entity schema
    Scaffold(ScaffoldCommand),

    /// Generate CRUD code from an entity schema
    Generate(GenerateCommand),

    /// List generated entities from the manifest
    List(ListCommand),

    /// Delete an entity's generated files and manifest entry
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
