// Adapters layer: concrete implementers of the domain ports.

pub mod attacker;
pub mod carrier;
pub mod console;
pub mod payment;
pub mod report;

pub use attacker::TrainingDummy;
pub use carrier::{sender_for, DhlSender, FedexSender};
pub use console::{MemoryConsole, StdoutConsole};
pub use payment::{payment_method, BankTransfer, Cash, CreditCard, PayPal};
pub use report::{report_for, MarketingReport, SalesReport};
