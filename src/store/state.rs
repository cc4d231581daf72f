use crate::directory::{FilterSet, Record};
use crate::mvi::UiState;

/// Everything the view needs to render the directory.
///
/// `visible_records` is always `filters` applied to `all_records`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub all_records: Vec<Record>,
    pub visible_records: Vec<Record>,
    pub filters: FilterSet,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl UiState for UsersState {}

/// Where the current load cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Failed,
}

impl UsersState {
    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.error_message.is_some() {
            LoadPhase::Failed
        } else {
            LoadPhase::Idle
        }
    }
}
