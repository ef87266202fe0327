//! Per-invocation context: resolved config, state store and the date used
//! as "today" for the whole command.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::NaiveDate;

use studyplan_core::locale::TextCopy;
use studyplan_core::{Clock, FixedClock, SystemClock};

use crate::config::StudyplanConfig;
use crate::store::{StateStore, StoredData};

#[derive(Debug, Clone)]
pub struct Context {
    pub config: StudyplanConfig,
    pub store: StateStore,
    /// Today, read once when the command starts.
    pub clock: FixedClock,
}

impl Context {
    /// Resolve config and pin "today" (`today_override` or the local date).
    pub fn resolve(cli_state: Option<&Path>, today_override: Option<NaiveDate>) -> Result<Self> {
        let config = StudyplanConfig::resolve(cli_state)?;
        let store = StateStore::new(config.state_path.clone());
        let today = today_override.unwrap_or_else(|| SystemClock.today());
        tracing::debug!(state = %config.state_path.display(), %today, "context resolved");
        Ok(Self {
            config,
            store,
            clock: FixedClock(today),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Load stored data or fail with the "no plan yet" hint.
    pub fn require_state(&self) -> Result<StoredData> {
        match self.store.load()? {
            Some(data) => Ok(data),
            None => bail!(
                "{}",
                TextCopy::for_language(self.config.default_language).no_plan_yet
            ),
        }
    }
}
