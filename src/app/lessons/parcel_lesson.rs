use crate::adapters::{sender_for, FedexSender};
use crate::core::dispatcher::send_book;
use crate::domain::model::{CarrierKind, ParcelOrder};
use crate::domain::ports::{Console, Lesson, Sender};
use crate::utils::error::Result;

const BOOKS: [&str; 2] = ["어린 왕자", "그리스인 조르바"];

/// The version without a contract: switching carriers means editing every
/// call site that names `FedexSender`.
pub fn send_book_by_fedex(
    name: &str,
    sender: &FedexSender,
    console: &mut dyn Console,
) -> Result<()> {
    sender.send(name, console)
}

pub struct ParcelLesson {
    orders: Vec<ParcelOrder>,
    include_concrete: bool,
}

impl ParcelLesson {
    pub fn new(orders: Vec<ParcelOrder>) -> Self {
        Self {
            orders,
            include_concrete: false,
        }
    }

    pub fn builtin() -> Self {
        let orders = CarrierKind::ALL
            .iter()
            .flat_map(|carrier| {
                BOOKS.into_iter().map(move |title| ParcelOrder {
                    carrier: *carrier,
                    title: title.to_string(),
                })
            })
            .collect();

        Self {
            orders,
            include_concrete: true,
        }
    }
}

impl Lesson for ParcelLesson {
    fn name(&self) -> &str {
        "parcel"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        if self.include_concrete {
            let fedex = FedexSender;
            for title in BOOKS {
                send_book_by_fedex(title, &fedex, console)?;
            }
        }

        for order in &self.orders {
            let sender = sender_for(order.carrier);
            send_book(&order.title, sender.as_ref(), console)?;
        }
        Ok(())
    }
}
