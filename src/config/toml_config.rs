use crate::config::default_boundary_fields;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub scan: ScanConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub reports_dir: String,
    #[serde(default = "default_report_suffix")]
    pub report_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_boundary_fields")]
    pub boundary_fields: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            boundary_fields: default_boundary_fields(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_report_suffix() -> String {
    "Report.tsx".to_string()
}

fn default_pretty() -> bool {
    true
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("scan.reports_dir", &self.scan.reports_dir)?;
        validation::validate_suffix("scan.report_suffix", &self.scan.report_suffix)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_field_list("extract.boundary_fields", &self.extract.boundary_fields)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn reports_dir(&self) -> &str {
        &self.scan.reports_dir
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn report_suffix(&self) -> &str {
        &self.scan.report_suffix
    }

    fn boundary_fields(&self) -> &[String] {
        &self.extract.boundary_fields
    }

    fn pretty_output(&self) -> bool {
        self.load.pretty
    }
}
