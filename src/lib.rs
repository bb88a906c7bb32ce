pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use app::pipelines::codegen_pipeline::CodegenPipeline;
pub use config::toml_config::TomlConfig;
pub use core::{engine::GeneratorEngine, generator::generate_sources};
pub use domain::model::{ContextStyle, GeneratorOptions, Sheet};
pub use utils::error::{CodegenError, Result};
