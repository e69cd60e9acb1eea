use std::path::PathBuf;

use clap::Args;
use crudo_codegen::Part;
use crudo_schema::{CONFIG_FILE_NAME, ProjectConfig, parse_config_file, parse_entity_file};
use eyre::Result;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Entity schema file
    pub schema: PathBuf,

    /// Project root the artifacts are written under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/crudo.config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite files that already exist on disk
    #[arg(long)]
    pub force: bool,

    /// Generate only these parts (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<Part>>,

    /// Skip these parts (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<Part>,

    /// Leave generated output untouched by the formatter
    #[arg(long)]
    pub no_format: bool,

    /// Print the artifacts instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = parse_entity_file(&self.schema).unwrap_or_exit();
        let config = self.load_config();

        let report = ops::generate(
            &schema,
            &config,
            ops::generate::GenerateOptions {
                root: &self.root,
                force: self.force,
                only: self.only.clone(),
                skip: self.skip.clone(),
                format: !self.no_format,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_config(&self) -> ProjectConfig {
        // An explicit --config must exist; the default location is optional
        // and falls back to the built-in defaults when absent.
        match &self.config {
            Some(path) => parse_config_file(path).unwrap_or_exit(),
            None => {
                let path = self.root.join(CONFIG_FILE_NAME);
                if path.exists() {
                    parse_config_file(&path).unwrap_or_exit()
                } else {
                    ProjectConfig::default()
                }
            }
        }
    }
}
