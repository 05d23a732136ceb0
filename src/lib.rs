pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{etl::EtlEngine, extract::TemplateExtractor, pipeline::TemplatePipeline};
pub use crate::utils::error::{EtlError, Result};
