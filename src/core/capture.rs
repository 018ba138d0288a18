//! Deferred callbacks built inside a counting loop.
//!
//! `SharedCell` callbacks all alias the loop counter, so once the loop is
//! done every one of them reads its final value. `Snapshot` callbacks each
//! own a copy taken at their iteration.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    SharedCell,
    Snapshot,
}

impl CaptureMode {
    pub fn heading(&self) -> &'static str {
        match self {
            CaptureMode::SharedCell => "CaptureLoop",
            CaptureMode::Snapshot => "CaptureLoop2",
        }
    }
}

pub type Callback = Box<dyn Fn() -> usize>;

pub fn build_callbacks(iterations: usize, mode: CaptureMode) -> Vec<Callback> {
    let mut callbacks: Vec<Callback> = Vec::with_capacity(iterations);

    match mode {
        CaptureMode::SharedCell => {
            let counter = Rc::new(Cell::new(0usize));
            while counter.get() < iterations {
                let shared = Rc::clone(&counter);
                callbacks.push(Box::new(move || shared.get()));
                counter.set(counter.get() + 1);
            }
        }
        CaptureMode::Snapshot => {
            for i in 0..iterations {
                let value = i;
                callbacks.push(Box::new(move || value));
            }
        }
    }

    callbacks
}

pub fn observe(callbacks: &[Callback]) -> Vec<usize> {
    callbacks.iter().map(|callback| callback()).collect()
}

/// Builds the callbacks, lets the loop finish, then calls each one in order.
pub fn capture_loop(iterations: usize, mode: CaptureMode) -> Vec<usize> {
    let callbacks = build_callbacks(iterations, mode);
    let observed = observe(&callbacks);
    tracing::debug!(?mode, ?observed, "capture loop finished");
    observed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_cell_sees_final_value() {
        assert_eq!(capture_loop(3, CaptureMode::SharedCell), vec![3, 3, 3]);
    }

    #[test]
    fn test_snapshot_sees_own_iteration() {
        assert_eq!(capture_loop(3, CaptureMode::Snapshot), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_iterations_builds_nothing() {
        assert!(build_callbacks(0, CaptureMode::SharedCell).is_empty());
        assert!(capture_loop(0, CaptureMode::Snapshot).is_empty());
    }

    #[test]
    fn test_callbacks_can_be_called_repeatedly() {
        let callbacks = build_callbacks(2, CaptureMode::Snapshot);
        assert_eq!(observe(&callbacks), observe(&callbacks));
    }
}
