use crate::utils::error::Result;

/// Anything that can settle a payment and describe what it did.
pub trait PaymentMethod {
    fn process_payment(&self, amount: f64) -> String;
}

/// Anything that can ship a parcel. Sending is a side effect on the console.
pub trait Sender {
    fn send(&self, parcel: &str, console: &mut dyn Console) -> Result<()>;
}

/// A report whose contents can be forwarded to someone.
pub trait Report {
    fn contents(&self) -> String;
}

pub trait Attacker {
    fn attack(&self, console: &mut dyn Console) -> Result<()>;
}

/// Line-oriented output sink. Every dispatcher writes through this.
pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;
}

pub trait Lesson {
    fn name(&self) -> &str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}
