pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, PlateauMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "plateau-mowers"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Simulate mowers moving on a rectangular plateau")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(short, long, help = "Mission file (stdin when omitted)"))]
    pub input: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Report file (stdout when omitted)"))]
    pub output: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Path to TOML configuration file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub plateau_mode: Option<PlateauMode>,

    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub format: Option<OutputFormat>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,
}

impl CliConfig {
    /// 命令列參數優先，未指定的欄位才採用 TOML 的值
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if self.input.is_none() {
            self.input = toml.input_path().map(str::to_string);
        }
        if self.output.is_none() {
            self.output = toml.output_path().map(str::to_string);
        }
        if self.plateau_mode.is_none() {
            self.plateau_mode = toml.simulation.as_ref().and_then(|s| s.plateau_mode);
        }
        if self.format.is_none() {
            self.format = toml.output.as_ref().and_then(|o| o.format);
        }
        self.verbose |= toml.verbose_logging();
        self.json_logs |= toml.json_logging();
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn plateau_mode(&self) -> PlateauMode {
        self.plateau_mode.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
