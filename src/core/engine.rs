use crate::domain::model::RunSummary;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;

/// Counts what passes through so the engine can report it.
struct TeeConsole<'a> {
    inner: &'a mut dyn Console,
    lines: Vec<String>,
}

impl Console for TeeConsole<'_> {
    fn print_line(&mut self, line: &str) -> Result<()> {
        self.inner.print_line(line)?;
        self.lines.push(line.to_string());
        Ok(())
    }
}

pub struct LessonEngine {
    lessons: Vec<Box<dyn Lesson>>,
}

impl LessonEngine {
    pub fn new(lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self { lessons }
    }

    pub fn lesson_names(&self) -> Vec<&str> {
        self.lessons.iter().map(|lesson| lesson.name()).collect()
    }

    /// Runs every lesson in order, stopping at the first failure.
    pub fn run(&self, console: &mut dyn Console) -> Result<RunSummary> {
        tracing::info!("Starting {} lesson(s)", self.lessons.len());

        let mut tee = TeeConsole {
            inner: console,
            lines: Vec::new(),
        };
        let mut summary = RunSummary::default();

        for lesson in &self.lessons {
            tracing::info!("▶ Lesson: {}", lesson.name());
            let before = tee.lines.len();

            if let Err(e) = lesson.run(&mut tee) {
                tracing::error!("❌ Lesson '{}' failed: {}", lesson.name(), e);
                return Err(e);
            }

            tracing::debug!(
                "Lesson '{}' wrote {} line(s)",
                lesson.name(),
                tee.lines.len() - before
            );
            summary.lessons.push(lesson.name().to_string());
        }

        summary.lines = tee.lines;
        tracing::info!(
            "✅ Finished {} lesson(s), {} line(s) written",
            summary.lessons.len(),
            summary.lines.len()
        );
        Ok(summary)
    }
}
