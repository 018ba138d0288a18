//! Dispatch written once against each capability contract.
//!
//! None of these functions know which implementer they were handed. They take
//! `?Sized` type parameters so a concrete value and a `&dyn` trait object go
//! through the same code.

use crate::core::slot::CapabilitySlot;
use crate::domain::ports::{Attacker, Console, PaymentMethod, Report, Sender};
use crate::utils::error::Result;
use crate::utils::validation::{validate_amount, validate_non_empty_string};

/// Settles `amount` with `method`, prints the confirmation and returns it.
pub fn handle_payment<P>(method: &P, amount: f64, console: &mut dyn Console) -> Result<String>
where
    P: PaymentMethod + ?Sized,
{
    validate_amount(amount)?;

    let result = method.process_payment(amount);
    tracing::debug!(amount, "payment processed");
    console.print_line(&result)?;
    Ok(result)
}

pub fn send_book<S>(name: &str, sender: &S, console: &mut dyn Console) -> Result<()>
where
    S: Sender + ?Sized,
{
    validate_non_empty_string("parcel.title", name)?;

    tracing::debug!(parcel = name, "sending parcel");
    sender.send(name, console)
}

/// Forwards the report contents, then confirms delivery to `recipient`.
pub fn report_send<R>(report: &R, recipient: &str, console: &mut dyn Console) -> Result<()>
where
    R: Report + ?Sized,
{
    validate_non_empty_string("report.recipient", recipient)?;

    console.print_line(&report.contents())?;
    console.print_line(&format!("{}에게 보냈습니다", recipient))?;
    tracing::debug!(recipient, "report forwarded");
    Ok(())
}

/// Attacks through the slot. Panics when nothing is bound.
pub fn attack(slot: &CapabilitySlot<dyn Attacker>, console: &mut dyn Console) -> Result<()> {
    slot.get().attack(console)
}

pub fn try_attack(slot: &CapabilitySlot<dyn Attacker>, console: &mut dyn Console) -> Result<()> {
    slot.try_get()?.attack(console)
}
