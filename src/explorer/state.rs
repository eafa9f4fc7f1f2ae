use crate::engine::{derive, filter_items, EngineError};
use crate::explorer::mvi::UiState;
use crate::model::{Country, DerivedView, QueryParams};
use crate::source::DataOrigin;

/// Progress of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading { token: u64 },
    Ready { origin: DataOrigin },
    /// The latest fetch failed. Previously loaded items are kept.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplorerState {
    pub params: QueryParams,
    pub load: LoadState,
    /// Latest accepted dataset, unfiltered.
    pub items: Vec<Country>,
    /// Token of the most recently issued request. Zero before the first.
    pub latest_token: u64,
    /// Last term sent upstream as a search.
    pub last_search: Option<String>,
}

impl UiState for ExplorerState {}

impl ExplorerState {
    pub fn with_params(params: QueryParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Derive the current page from the loaded items.
    pub fn view(&self) -> Result<DerivedView<Country>, EngineError> {
        derive(&self.items, &self.params)
    }

    /// Page count for the current filter and page size.
    pub fn total_pages(&self) -> usize {
        if self.params.page_size == 0 {
            return 0;
        }
        filter_items(&self.items, &self.params.filter_text)
            .len()
            .div_ceil(self.params.page_size)
    }
}
