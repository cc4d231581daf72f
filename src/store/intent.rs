use crate::directory::{FilterField, Record};
use crate::mvi::Intent;
use crate::source::LoadError;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A load cycle began: raise the loading flag, drop the previous error.
    LoadStarted,
    LoadSucceeded { records: Vec<Record> },
    /// An empty message falls back to a generic one.
    LoadFailed { message: String },
    SetFilter { field: FilterField, value: String },
}

impl Intent for UsersIntent {}

impl UsersIntent {
    /// Completion intent for a finished fetch.
    pub fn from_load_result(result: Result<Vec<Record>, LoadError>) -> Self {
        match result {
            Ok(records) => UsersIntent::LoadSucceeded { records },
            Err(err) => UsersIntent::LoadFailed {
                message: err.to_string(),
            },
        }
    }
}
