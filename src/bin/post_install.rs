//! Meson post-install hook for Stickerbook.
//!
//! Usage:
//!   post-install                 # schemas + icon cache (the common variant)
//!   post-install --schemas --icon-cache --force
//!   post-install --mime
//!
//! Skips every step when `DESTDIR` is set: the install is staged to an
//! alternate root and the final packaging step performs integration.

use anyhow::Result;
use clap::Parser;
use stickerbook_tools::install::{
    DEFAULT_ICON_THEME, InstallEnv, IntegrationSteps, integration_plan, run_integration,
};

#[derive(Parser, Debug)]
#[command(name = "post-install")]
#[command(about = "Compile GSettings schemas and refresh desktop caches after install")]
struct Cli {
    /// Compile the GSettings schema directory.
    #[arg(long)]
    schemas: bool,
    /// Refresh the icon theme cache.
    #[arg(long)]
    icon_cache: bool,
    /// Force-rebuild the icon cache (implies --icon-cache).
    #[arg(long)]
    force: bool,
    /// Icon theme directory under share/icons.
    #[arg(long, default_value = DEFAULT_ICON_THEME)]
    icon_theme: String,
    /// Update the shared mime database.
    #[arg(long)]
    mime: bool,
}

impl Cli {
    fn steps(&self) -> IntegrationSteps {
        let steps = IntegrationSteps {
            schemas: self.schemas,
            icon_cache: self.icon_cache || self.force,
            force_icon_cache: self.force,
            mime_database: self.mime,
        };
        if steps.is_empty() {
            IntegrationSteps::default_variant()
        } else {
            steps
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let install = InstallEnv::from_env();
    let plan = integration_plan(&install, cli.steps(), &cli.icon_theme)?;

    if plan.is_empty() {
        println!("DESTDIR is set; skipping system integration.");
        return Ok(());
    }

    run_integration(&plan)
}
