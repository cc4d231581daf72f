use crate::mvi::Reducer;
use crate::store::intent::UsersIntent;
use crate::store::state::UsersState;

/// Shown when a load fails without any description.
pub const GENERIC_LOAD_ERROR: &str = "Something went wrong";

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::LoadStarted => UsersState {
                is_loading: true,
                error_message: None,
                ..state
            },
            UsersIntent::LoadSucceeded { records } => {
                // Re-derive from whatever filters are active, so edits made
                // while the fetch was in flight still apply.
                let visible_records = state.filters.apply(&records);
                UsersState {
                    all_records: records,
                    visible_records,
                    is_loading: false,
                    ..state
                }
            }
            UsersIntent::LoadFailed { message } => {
                let message = if message.is_empty() {
                    GENERIC_LOAD_ERROR.to_string()
                } else {
                    message
                };
                // Previously loaded records stay in place.
                UsersState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state
                }
            }
            UsersIntent::SetFilter { field, value } => {
                let mut filters = state.filters;
                filters.set(field, value);
                let visible_records = filters.apply(&state.all_records);
                UsersState {
                    filters,
                    visible_records,
                    ..state
                }
            }
        }
    }
}
