//! The user directory store.
//!
//! [`Store`] owns one [`UsersState`] for the whole session and is its only
//! writer. Every change goes through [`UsersReducer`]; the asynchronous load
//! is split into a start intent and a completion intent so the state itself
//! never waits on the network.

mod intent;
mod reducer;
mod state;

pub use intent::UsersIntent;
pub use reducer::{UsersReducer, GENERIC_LOAD_ERROR};
pub use state::{LoadPhase, UsersState};

use tracing::{debug, info, warn};

use crate::directory::{FilterField, Record};
use crate::mvi::Reducer;
use crate::source::{LoadError, RecordSource};

#[derive(Debug, Default)]
pub struct Store {
    state: UsersState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: UsersIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = UsersReducer::reduce(state, intent);
    }

    /// Overwrite one filter and recompute the visible records.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %field, value = %value, "Filter updated");
        self.dispatch(UsersIntent::SetFilter { field, value });
    }

    pub fn begin_load(&mut self) {
        debug!("Load started");
        self.dispatch(UsersIntent::LoadStarted);
    }

    pub fn finish_load(&mut self, result: Result<Vec<Record>, LoadError>) {
        match &result {
            Ok(records) => info!(count = records.len(), "Load succeeded"),
            Err(err) => warn!(error = %err, "Load failed"),
        }
        self.dispatch(UsersIntent::from_load_result(result));
    }

    /// Run one full load cycle against `source`.
    pub async fn load_records<S: RecordSource>(&mut self, source: &S) {
        self.begin_load();
        let result = source.fetch_records().await;
        self.finish_load(result);
    }
}
