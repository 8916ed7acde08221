pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "package-depends")]
#[command(version)]
#[command(about = "Generate per-package dependency manifests from a DEPENDENCY.md file")]
pub struct CliConfig {
    /// Path to the DEPENDENCY.md file
    #[arg(value_name = "DEPENDENCY_FILE")]
    pub dependency_file: String,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the derived dependencies instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
