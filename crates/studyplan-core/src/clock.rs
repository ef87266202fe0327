//! Source of "today" for plan generation.
//!
//! Generation reads the current date exactly once per call. Routing that read
//! through [`Clock`] keeps the rest of the pipeline deterministic: with a
//! [`FixedClock`], identical inputs always yield identical plans.

use chrono::{Local, NaiveDate};

/// Supplies the calendar date treated as day 0 of a plan.
pub trait Clock {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the wrapped date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
