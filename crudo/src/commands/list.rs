use std::path::PathBuf;

use clap::Args;
use crudo_manifest::Ledger;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Project root holding the manifest
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Ledger::new(&self.root).load().unwrap_or_exit();

        if manifest.is_empty() {
            println!("No entities generated yet (run `crudo generate <schema>`)");
            return Ok(());
        }

        println!("{:<20} {:>5}  {}", "Entity", "Files", "Last modified");
        let mut total_files = 0;
        for entry in manifest.values() {
            total_files += entry.files.len();
            println!(
                "{:<20} {:>5}  {}",
                entry.entity,
                entry.files.len(),
                entry.last_modified.format("%Y-%m-%d %H:%M")
            );
        }
        println!();
        println!("{} entities, {} files", manifest.len(), total_files);

        Ok(())
    }
}
