use crate::adapters::report_for;
use crate::core::dispatcher::report_send;
use crate::domain::model::{ReportKind, ReportOrder};
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;

pub struct ReportLesson {
    orders: Vec<ReportOrder>,
}

impl ReportLesson {
    pub fn new(orders: Vec<ReportOrder>) -> Self {
        Self { orders }
    }

    pub fn builtin() -> Self {
        Self::new(vec![ReportOrder {
            kind: ReportKind::Marketing,
            body: "3분기 신규 고객 유입 분석".to_string(),
            recipient: "marketing@example.com".to_string(),
        }])
    }
}

impl Lesson for ReportLesson {
    fn name(&self) -> &str {
        "report"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for order in &self.orders {
            let report = report_for(order);
            report_send(report.as_ref(), &order.recipient, console)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_builtin_report_is_forwarded() {
        let mut console = MemoryConsole::new();
        ReportLesson::builtin().run(&mut console).unwrap();

        assert_eq!(console.lines().len(), 2);
        assert_eq!(console.lines()[1], "marketing@example.com에게 보냈습니다");
    }
}
