//! Cooperative cancellation for long-running diffs.
//!
//! The engine polls the callback at throttled intervals between element
//! comparisons. A trip unwinds the whole recursive computation as
//! [`DiffError::Cancelled`]; no partial block list is ever observable.

use crate::diff::DiffError;
use std::sync::atomic::{AtomicBool, Ordering};

const CANCEL_CHECK_EVERY_TICKS: u64 = 256;

pub trait CancelCallback: Send {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCancel;

impl CancelCallback for NoCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelCallback for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Throttles callback polling so hot loops pay one increment per tick.
pub(crate) struct CancelController<'a> {
    callback: &'a dyn CancelCallback,
    tick: u64,
}

impl<'a> CancelController<'a> {
    pub(crate) fn new(callback: &'a dyn CancelCallback) -> Self {
        Self { callback, tick: 0 }
    }

    pub(crate) fn check(&mut self) -> Result<(), DiffError> {
        self.tick = self.tick.wrapping_add(1);
        let should_poll = self.tick == 1 || self.tick % CANCEL_CHECK_EVERY_TICKS == 0;
        if should_poll && self.callback.is_cancelled() {
            return Err(DiffError::Cancelled);
        }
        Ok(())
    }
}
