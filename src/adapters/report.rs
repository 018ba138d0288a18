use crate::domain::model::{ReportKind, ReportOrder};
use crate::domain::ports::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingReport {
    pub body: String,
}

impl MarketingReport {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Report for MarketingReport {
    fn contents(&self) -> String {
        format!("[마케팅 보고서] {}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub body: String,
}

impl SalesReport {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Report for SalesReport {
    fn contents(&self) -> String {
        format!("[영업 보고서] {}", self.body)
    }
}

pub fn report_for(order: &ReportOrder) -> Box<dyn Report> {
    match order.kind {
        ReportKind::Marketing => Box::new(MarketingReport::new(order.body.clone())),
        ReportKind::Sales => Box::new(SalesReport::new(order.body.clone())),
    }
}
