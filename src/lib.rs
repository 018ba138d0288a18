pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{MemoryConsole, StdoutConsole};
pub use app::lessons::build_lessons;
pub use config::ScenarioConfig;
pub use crate::core::engine::LessonEngine;
pub use domain::model::{LessonSelection, RunSummary};
pub use utils::error::{LessonError, Result};
