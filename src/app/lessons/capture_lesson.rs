use crate::core::capture::{capture_loop, CaptureMode};
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;

pub const DEFAULT_ITERATIONS: usize = 3;

pub struct CaptureLesson {
    iterations: usize,
}

impl CaptureLesson {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

impl Default for CaptureLesson {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Lesson for CaptureLesson {
    fn name(&self) -> &str {
        "capture"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for mode in [CaptureMode::SharedCell, CaptureMode::Snapshot] {
            console.print_line(mode.heading())?;
            for value in capture_loop(self.iterations, mode) {
                console.print_line(&value.to_string())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_prints_both_variants() {
        let mut console = MemoryConsole::new();
        CaptureLesson::default().run(&mut console).unwrap();

        let expected: Vec<String> = ["CaptureLoop", "3", "3", "3", "CaptureLoop2", "0", "1", "2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(console.lines(), expected.as_slice());
    }
}
