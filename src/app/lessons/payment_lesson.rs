use crate::adapters::payment_method;
use crate::core::dispatcher::handle_payment;
use crate::domain::model::{PaymentKind, PaymentOrder};
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;

pub struct PaymentLesson {
    orders: Vec<PaymentOrder>,
}

impl PaymentLesson {
    pub fn new(orders: Vec<PaymentOrder>) -> Self {
        Self { orders }
    }

    /// One order per payment method, as the checkout demo runs it.
    pub fn builtin() -> Self {
        let amounts = [50000.0, 30000.0, 45000.0, 100000.0];
        let orders = PaymentKind::ALL
            .iter()
            .zip(amounts)
            .map(|(method, amount)| PaymentOrder {
                method: *method,
                amount,
            })
            .collect();
        Self::new(orders)
    }
}

impl Lesson for PaymentLesson {
    fn name(&self) -> &str {
        "payment"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for order in &self.orders {
            let method = payment_method(order.method);
            handle_payment(method.as_ref(), order.amount, console)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_builtin_checkout() {
        let mut console = MemoryConsole::new();
        PaymentLesson::builtin().run(&mut console).unwrap();

        assert_eq!(
            console.lines(),
            &[
                "신용카드로 50000.00원 결제 완료!".to_string(),
                "페이팔로 30000.00원 결제 완료!".to_string(),
                "현금으로 45000.00원 결제 완료!".to_string(),
                "계좌이체로 100000.00원 결제 완료!".to_string(),
            ]
        );
    }
}
