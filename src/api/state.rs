//! Application state for the Leave & Overtime Accrual Engine API.
//!
//! This module defines the shared application state available to all
//! request handlers, including the clock the engine reads "today" from.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::config::PolicyLoader;
use crate::store::Ledger;

/// Source of the current date.
///
/// The engine never reads the wall clock directly; handlers ask the
/// state for today's date, so tests can pin it.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Use the system UTC date.
    System,
    /// Always report a fixed date.
    Fixed(NaiveDate),
}

impl Clock {
    /// The current date according to this clock.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Shared application state.
///
/// Contains the loaded leave policy, the ledger behind a single lock,
/// and the clock. One lock over the whole ledger keeps each command's
/// read-modify-write of an employee's balances atomic with respect to
/// other requests.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyLoader>,
    ledger: Arc<RwLock<Ledger>>,
    clock: Clock,
}

impl AppState {
    /// Creates application state with the system clock.
    pub fn new(policy: PolicyLoader, ledger: Ledger) -> Self {
        Self {
            policy: Arc::new(policy),
            ledger: Arc::new(RwLock::new(ledger)),
            clock: Clock::System,
        }
    }

    /// Replaces the clock; used by tests to pin the current date.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a reference to the loaded policy.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }

    /// Returns the shared ledger.
    pub fn ledger(&self) -> &RwLock<Ledger> {
        &self.ledger
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
