use crate::domain::model::PaymentKind;
use crate::domain::ports::PaymentMethod;

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

impl PaymentMethod for CreditCard {
    fn process_payment(&self, amount: f64) -> String {
        format!("신용카드로 {:.2}원 결제 완료!", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

impl PaymentMethod for PayPal {
    fn process_payment(&self, amount: f64) -> String {
        format!("페이팔로 {:.2}원 결제 완료!", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cash;

impl PaymentMethod for Cash {
    fn process_payment(&self, amount: f64) -> String {
        format!("현금으로 {:.2}원 결제 완료!", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransfer;

impl PaymentMethod for BankTransfer {
    fn process_payment(&self, amount: f64) -> String {
        format!("계좌이체로 {:.2}원 결제 완료!", amount)
    }
}

/// Builds the implementer a scenario file asked for.
pub fn payment_method(kind: PaymentKind) -> Box<dyn PaymentMethod> {
    match kind {
        PaymentKind::CreditCard => Box::new(CreditCard),
        PaymentKind::PayPal => Box::new(PayPal),
        PaymentKind::Cash => Box::new(Cash),
        PaymentKind::BankTransfer => Box::new(BankTransfer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_credit_card_formats_two_decimals() {
        assert_eq!(
            CreditCard.process_payment(50000.0),
            "신용카드로 50000.00원 결제 완료!"
        );
        assert_eq!(Cash.process_payment(12.345), "현금으로 12.35원 결제 완료!");
    }

    #[test]
    fn test_every_kind_has_its_own_label() {
        let labels: HashSet<String> = PaymentKind::ALL
            .iter()
            .map(|kind| payment_method(*kind).process_payment(1.0).replace("1.00", ""))
            .collect();
        assert_eq!(labels.len(), PaymentKind::ALL.len());
    }
}
