use crate::domain::ports::{Attacker, Console};
use crate::utils::error::Result;

/// Does nothing but report that it was hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingDummy;

impl Attacker for TrainingDummy {
    fn attack(&self, console: &mut dyn Console) -> Result<()> {
        console.print_line("허수아비를 공격합니다.")
    }
}
