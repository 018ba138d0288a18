use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    Cash,
    BankTransfer,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 4] = [
        PaymentKind::CreditCard,
        PaymentKind::PayPal,
        PaymentKind::Cash,
        PaymentKind::BankTransfer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierKind {
    Dhl,
    Fedex,
}

impl CarrierKind {
    pub const ALL: [CarrierKind; 2] = [CarrierKind::Dhl, CarrierKind::Fedex];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    Marketing,
    Sales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub method: PaymentKind,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelOrder {
    pub carrier: CarrierKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOrder {
    #[serde(default)]
    pub kind: ReportKind,
    pub body: String,
    pub recipient: String,
}

/// Lines a run produced, in the shape `--format json` prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lessons: Vec<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum LessonSelection {
    Payment,
    Parcel,
    Report,
    Capture,
    Unset,
    #[default]
    All,
}
