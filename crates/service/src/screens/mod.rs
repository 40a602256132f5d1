//! Admin screen controllers.
//!
//! Each screen keeps its state behind a short-lived mutex (never held across
//! an `.await`) and allows one mutating operation at a time.

pub mod about;
pub mod crud;
pub mod tickets;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::errors::ScreenError;

pub use about::AboutScreen;
pub use crud::{CrudScreen, DeleteOutcome, Mode, ScreenState};
pub use tickets::TicketsPanel;

/// Where a screen's list stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError(String),
}

/// Asks the user to confirm a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// One-in-flight flag for mutating operations.
#[derive(Default)]
pub(crate) struct BusyFlag(AtomicBool);

pub(crate) struct BusyGuard<'a>(&'a AtomicBool);

impl BusyFlag {
    pub(crate) fn acquire(&self) -> Result<BusyGuard<'_>, ScreenError> {
        if self.0.swap(true, Ordering::AcqRel) {
            return Err(ScreenError::Busy);
        }
        Ok(BusyGuard(&self.0))
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Lock screen state, recovering from a poisoned lock.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
