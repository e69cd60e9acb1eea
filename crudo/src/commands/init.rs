use std::fs;
use std::path::PathBuf;

use clap::Args;
use crudo_manifest::Ledger;
use crudo_schema::{CONFIG_FILE_NAME, ProjectConfig};
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Project root (defaults to current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let config_path = self.root.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.force {
            bail!(
                "{} already exists (pass --force to overwrite)",
                config_path.display()
            );
        }

        let json = default_config_json()?;
        fs::create_dir_all(&self.root)
            .wrap_err_with(|| format!("failed to create {}", self.root.display()))?;
        fs::write(&config_path, json)
            .wrap_err_with(|| format!("failed to write {}", config_path.display()))?;

        Ledger::new(&self.root).ensure_manifest().unwrap_or_exit();

        println!("Created {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("  crudo scaffold Product");
        println!("  crudo generate schemas/product.json");

        Ok(())
    }
}

fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&ProjectConfig::default())
        .wrap_err("failed to serialize the default config")?;
    Ok(format!("{json}\n"))
}
