use crate::explorer::intent::ExplorerIntent;
use crate::explorer::mvi::Reducer;
use crate::explorer::state::{ExplorerState, LoadState};

pub struct ExplorerReducer;

impl Reducer for ExplorerReducer {
    type State = ExplorerState;
    type Intent = ExplorerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ExplorerIntent::SetFilter(text) => {
                if state.params.filter_text != text {
                    state.params.filter_text = text;
                    state.params.page_index = 0;
                }
                state
            }
            ExplorerIntent::SetSort(direction) => {
                if state.params.sort_direction != direction {
                    state.params.sort_direction = direction;
                    state.params.page_index = 0;
                }
                state
            }
            ExplorerIntent::SetPage(page_index) => {
                state.params.page_index = page_index;
                state
            }
            ExplorerIntent::NextPage => {
                if state.params.page_index < state.total_pages().saturating_sub(1) {
                    state.params.page_index += 1;
                }
                state
            }
            ExplorerIntent::PrevPage => {
                state.params.page_index = state.params.page_index.saturating_sub(1);
                state
            }
            ExplorerIntent::SetPageSize(page_size) => {
                if page_size > 0 && page_size != state.params.page_size {
                    state.params.page_size = page_size;
                    state.params.page_index = 0;
                }
                state
            }
            ExplorerIntent::RequestIssued { token, term } => {
                // Tokens only move forward
                if token > state.latest_token {
                    state.latest_token = token;
                    state.load = LoadState::Loading { token };
                    if term.is_some() {
                        state.last_search = term;
                    }
                }
                state
            }
            ExplorerIntent::Loaded { token, fetched } => {
                if token == state.latest_token {
                    state.items = fetched.countries;
                    state.load = LoadState::Ready {
                        origin: fetched.origin,
                    };
                }
                state
            }
            ExplorerIntent::LoadFailed { token, message } => {
                if token == state.latest_token {
                    state.load = LoadState::Failed { message };
                }
                state
            }
        }
    }
}
