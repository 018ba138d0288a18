use interface_lessons::adapters::{
    payment_method, BankTransfer, Cash, CreditCard, DhlSender, FedexSender, MarketingReport,
    MemoryConsole, PayPal, TrainingDummy,
};
use interface_lessons::core::dispatcher::{
    attack, handle_payment, report_send, send_book, try_attack,
};
use interface_lessons::core::slot::CapabilitySlot;
use interface_lessons::domain::model::PaymentKind;
use interface_lessons::domain::ports::{Attacker, PaymentMethod, Sender};
use interface_lessons::LessonError;
use std::collections::HashSet;

fn label(method: &dyn PaymentMethod) -> String {
    method.process_payment(0.0).replace("0.00", "")
}

#[test]
fn test_end_to_end_credit_card_payment() {
    let mut console = MemoryConsole::new();
    let result = handle_payment(&CreditCard, 50000.0, &mut console).unwrap();

    assert_eq!(result, "신용카드로 50000.00원 결제 완료!");
    assert_eq!(console.lines(), &[result]);
}

#[test]
fn test_every_method_reports_amount_and_distinct_label() {
    let methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCard),
        Box::new(PayPal),
        Box::new(Cash),
        Box::new(BankTransfer),
    ];
    let amounts = [0.0, 0.5, 1.0, 12345.678, 100000.0];

    let mut console = MemoryConsole::new();
    for method in &methods {
        for amount in amounts {
            let result = handle_payment(method.as_ref(), amount, &mut console).unwrap();
            assert!(result.contains(&format!("{:.2}", amount)), "{}", result);
            assert!(result.ends_with("원 결제 완료!"));
        }
    }

    let labels: HashSet<String> = methods.iter().map(|m| label(m.as_ref())).collect();
    assert_eq!(labels.len(), methods.len());
}

#[test]
fn test_factory_matches_concrete_types() {
    assert_eq!(
        payment_method(PaymentKind::Cash).process_payment(45000.0),
        Cash.process_payment(45000.0)
    );
    assert_eq!(
        payment_method(PaymentKind::BankTransfer).process_payment(100000.0),
        "계좌이체로 100000.00원 결제 완료!"
    );
}

#[test]
fn test_invalid_amounts_never_reach_the_method() {
    let mut console = MemoryConsole::new();
    for amount in [-0.01, f64::NAN, f64::NEG_INFINITY] {
        let err = handle_payment(&PayPal, amount, &mut console).unwrap_err();
        assert!(matches!(err, LessonError::InvalidAmount { .. }));
    }
    assert!(console.lines().is_empty());
}

#[test]
fn test_parcel_line_contains_label_and_carrier() {
    let senders: Vec<(&str, Box<dyn Sender>)> = vec![
        ("DHL", Box::new(DhlSender) as Box<dyn Sender>),
        ("Fedex", Box::new(FedexSender) as Box<dyn Sender>),
    ];

    for (carrier, sender) in &senders {
        for title in ["어린 왕자", "그리스인 조르바", "x"] {
            let mut console = MemoryConsole::new();
            send_book(title, sender.as_ref(), &mut console).unwrap();

            assert_eq!(console.lines().len(), 1);
            assert!(console.lines()[0].contains(title));
            assert!(console.lines()[0].contains(carrier));
        }
    }
}

#[test]
fn test_report_send_forwards_contents_then_confirms() {
    let mut console = MemoryConsole::new();
    report_send(&MarketingReport::new("주간 캠페인 성과"), "김팀장", &mut console).unwrap();

    assert_eq!(console.lines()[0], "[마케팅 보고서] 주간 캠페인 성과");
    assert_eq!(console.lines()[1], "김팀장에게 보냈습니다");
}

#[test]
fn test_report_send_rejects_blank_recipient() {
    let mut console = MemoryConsole::new();
    assert!(report_send(&MarketingReport::new("본문"), "", &mut console).is_err());
    assert!(console.lines().is_empty());
}

#[test]
fn test_unset_slot_errors_then_works_once_bound() {
    let mut console = MemoryConsole::new();
    let mut slot: CapabilitySlot<dyn Attacker> = CapabilitySlot::unset("Attacker");

    assert!(matches!(
        try_attack(&slot, &mut console),
        Err(LessonError::UnboundCapability { .. })
    ));

    slot.bind(Box::new(TrainingDummy));
    attack(&slot, &mut console).unwrap();
    assert_eq!(console.lines().len(), 1);
}

#[test]
#[should_panic(expected = "called through an unset Attacker reference")]
fn test_unset_slot_panics_loudly() {
    let mut console = MemoryConsole::new();
    let slot: CapabilitySlot<dyn Attacker> = CapabilitySlot::unset("Attacker");
    let _ = attack(&slot, &mut console);
}
