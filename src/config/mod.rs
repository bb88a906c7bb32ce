#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::ContextStyle;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ctxgen")]
#[command(about = "Generate a C context API (types, bounds, accessors) from a TYPES/DONNEES sheet")]
pub struct CliConfig {
    /// Sheet exported as CSV/TSV
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the include/src directories are relative to
    #[arg(long)]
    pub output_root: Option<String>,

    #[arg(long)]
    pub include_dir: Option<String>,

    #[arg(long)]
    pub src_dir: Option<String>,

    /// Cell delimiter (single character or "tab")
    #[arg(long)]
    pub delimiter: Option<String>,

    #[arg(long, value_enum)]
    pub context_style: Option<ContextStyle>,

    /// Parse the sheet and print the records as JSON without writing files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML 設定（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(root) = &self.output_root {
            config.output.root = root.clone();
        }
        if let Some(include_dir) = &self.include_dir {
            config.output.include_dir = include_dir.clone();
        }
        if let Some(src_dir) = &self.src_dir {
            config.output.src_dir = src_dir.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.input.delimiter = delimiter.clone();
        }
        if let Some(style) = self.context_style {
            tracing::info!("🔧 Context style overridden to: {:?}", style);
            config.generation.context_style = style;
        }

        Ok(config)
    }
}
