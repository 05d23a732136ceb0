#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Sibling fields assumed to follow the checklist array in the report sources.
pub const DEFAULT_BOUNDARY_FIELDS: &str = "ins,cont,diel,test,comments,temp,nameplate";

pub fn default_boundary_fields() -> Vec<String> {
    DEFAULT_BOUNDARY_FIELDS
        .split(',')
        .map(str::to_string)
        .collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "template-etl")]
#[command(about = "Extracts report template data from report component sources")]
pub struct CliConfig {
    #[arg(long, default_value = "./src/components/reports")]
    pub reports_dir: String,

    #[arg(long, default_value = "./src/data/report_templates_generated.json")]
    pub output_path: String,

    #[arg(long, default_value = "Report.tsx")]
    pub report_suffix: String,

    #[arg(long, value_delimiter = ',', default_value = DEFAULT_BOUNDARY_FIELDS)]
    pub boundary_fields: Vec<String>,

    #[arg(long, help = "Load the full configuration from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Write compact JSON instead of pretty-printed")]
    pub compact: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn reports_dir(&self) -> &str {
        &self.reports_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_suffix(&self) -> &str {
        &self.report_suffix
    }

    fn boundary_fields(&self) -> &[String] {
        &self.boundary_fields
    }

    fn pretty_output(&self) -> bool {
        !self.compact
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("reports_dir", &self.reports_dir)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_suffix("report_suffix", &self.report_suffix)?;
        validation::validate_field_list("boundary_fields", &self.boundary_fields)?;
        Ok(())
    }
}
