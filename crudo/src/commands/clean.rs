use std::path::PathBuf;

use clap::Args;
use crudo_manifest::Ledger;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CleanCommand {
    /// Entity name as recorded in the manifest
    pub entity: String,

    /// Project root holding the manifest
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let ledger = Ledger::new(&self.root);
        let Some(entry) = ledger.entry(&self.entity).unwrap_or_exit() else {
            println!("No manifest entry for {}", self.entity);
            return Ok(());
        };

        println!("{} files recorded for {}:", entry.files.len(), self.entity);
        for file in &entry.files {
            println!("  {file}");
        }
        println!();

        if !self.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete these files and forget {}?", self.entity))
                .default(false)
                .interact()
                .wrap_err("failed to read the confirmation")?;
            if !confirmed {
                println!("Aborted");
                return Ok(());
            }
        }

        let report = ops::clean(
            &self.entity,
            &entry.files,
            ops::clean::CleanOptions { root: &self.root },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
