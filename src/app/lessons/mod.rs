pub mod capture_lesson;
pub mod parcel_lesson;
pub mod payment_lesson;
pub mod report_lesson;
pub mod unset_lesson;

pub use capture_lesson::CaptureLesson;
pub use parcel_lesson::ParcelLesson;
pub use payment_lesson::PaymentLesson;
pub use report_lesson::ReportLesson;
pub use unset_lesson::UnsetLesson;

use crate::config::toml_config::ScenarioConfig;
use crate::domain::model::LessonSelection;
use crate::domain::ports::Lesson;

/// Picks the lessons to run. Scenario sections replace the built-in orders;
/// anything the scenario leaves out keeps its built-in data.
pub fn build_lessons(
    selection: LessonSelection,
    scenario: Option<&ScenarioConfig>,
    panic_on_unset: bool,
) -> Vec<Box<dyn Lesson>> {
    let payment = || -> Box<dyn Lesson> {
        match scenario.and_then(|s| s.payments.clone()) {
            Some(orders) => Box::new(PaymentLesson::new(orders)),
            None => Box::new(PaymentLesson::builtin()),
        }
    };
    let parcel = || -> Box<dyn Lesson> {
        match scenario.and_then(|s| s.parcels.clone()) {
            Some(orders) => Box::new(ParcelLesson::new(orders)),
            None => Box::new(ParcelLesson::builtin()),
        }
    };
    let report = || -> Box<dyn Lesson> {
        match scenario.and_then(|s| s.reports.clone()) {
            Some(orders) => Box::new(ReportLesson::new(orders)),
            None => Box::new(ReportLesson::builtin()),
        }
    };
    let capture = || -> Box<dyn Lesson> {
        match scenario.and_then(|s| s.capture_iterations()) {
            Some(iterations) => Box::new(CaptureLesson::new(iterations)),
            None => Box::new(CaptureLesson::default()),
        }
    };

    let unset = || -> Box<dyn Lesson> { Box::new(UnsetLesson::new(panic_on_unset)) };

    match selection {
        LessonSelection::Payment => vec![payment()],
        LessonSelection::Parcel => vec![parcel()],
        LessonSelection::Report => vec![report()],
        LessonSelection::Capture => vec![capture()],
        LessonSelection::Unset => vec![unset()],
        // `unset` always fails, so it only runs when asked for by name.
        LessonSelection::All => vec![payment(), parcel(), report(), capture()],
    }
}
