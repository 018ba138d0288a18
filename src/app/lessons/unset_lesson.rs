use crate::core::dispatcher::{attack, try_attack};
use crate::core::slot::CapabilitySlot;
use crate::domain::ports::{Attacker, Console, Lesson};
use crate::utils::error::Result;

/// Calls through an attacker slot that was declared but never bound.
pub struct UnsetLesson {
    panic_on_unset: bool,
}

impl UnsetLesson {
    pub fn new(panic_on_unset: bool) -> Self {
        Self { panic_on_unset }
    }
}

impl Lesson for UnsetLesson {
    fn name(&self) -> &str {
        "unset"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let slot: CapabilitySlot<dyn Attacker> = CapabilitySlot::unset("Attacker");

        // slot.bind(Box::new(TrainingDummy)) would make this succeed.
        if self.panic_on_unset {
            attack(&slot, console)
        } else {
            try_attack(&slot, console)
        }
    }
}
