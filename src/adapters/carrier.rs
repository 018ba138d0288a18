use crate::domain::model::CarrierKind;
use crate::domain::ports::{Console, Sender};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct DhlSender;

impl Sender for DhlSender {
    fn send(&self, parcel: &str, console: &mut dyn Console) -> Result<()> {
        console.print_line(&format!("DHL에서 택배 {}를 보냅니다.", parcel))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FedexSender;

impl Sender for FedexSender {
    fn send(&self, parcel: &str, console: &mut dyn Console) -> Result<()> {
        console.print_line(&format!("Fedex에서 택배 {}를 보냅니다.", parcel))
    }
}

pub fn sender_for(kind: CarrierKind) -> Box<dyn Sender> {
    match kind {
        CarrierKind::Dhl => Box::new(DhlSender),
        CarrierKind::Fedex => Box::new(FedexSender),
    }
}
