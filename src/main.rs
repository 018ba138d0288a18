use clap::Parser;
use interface_lessons::utils::{logger, validation::Validate};
use interface_lessons::{
    build_lessons, CliConfig, LessonEngine, LessonError, MemoryConsole, OutputFormat,
    ScenarioConfig, StdoutConsole,
};

fn load_scenario(path: &str) -> Result<ScenarioConfig, LessonError> {
    let scenario = ScenarioConfig::from_file(path)?;
    scenario.validate()?;
    Ok(scenario)
}

fn exit_with(e: &LessonError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting interface-lessons");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let scenario = match config.config.as_deref().map(load_scenario).transpose() {
        Ok(scenario) => scenario,
        Err(e) => exit_with(&e),
    };
    if let Some(scenario) = &scenario {
        tracing::info!("📁 Loaded scenario '{}'", scenario.name());
    }

    let lessons = build_lessons(config.lesson, scenario.as_ref(), config.panic_on_unset);
    let engine = LessonEngine::new(lessons);
    tracing::debug!("Lessons: {:?}", engine.lesson_names());

    let outcome = match config.format {
        OutputFormat::Text => engine.run(&mut StdoutConsole::new()).map(|_| ()),
        OutputFormat::Json => {
            // JSON 模式先收集輸出，最後一次印出
            let mut console = MemoryConsole::new();
            engine.run(&mut console).and_then(|summary| {
                let json = serde_json::to_string_pretty(&summary)?;
                println!("{}", json);
                Ok(())
            })
        }
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
}
