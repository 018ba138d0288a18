use crate::domain::model::LessonSelection;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "interface-lessons")]
#[command(about = "Runs small lessons on trait dispatch and closure capture")]
pub struct CliConfig {
    /// Lesson to run
    #[arg(short, long, value_enum, default_value_t = LessonSelection::All)]
    pub lesson: LessonSelection,

    /// Path to a TOML scenario file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for lesson lines
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Panic instead of returning an error when calling through an unset reference
    #[arg(long)]
    pub panic_on_unset: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
