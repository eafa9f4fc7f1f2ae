use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::engine::EngineError;
use crate::explorer::intent::ExplorerIntent;
use crate::explorer::mvi::Reducer;
use crate::explorer::reducer::ExplorerReducer;
use crate::explorer::state::ExplorerState;
use crate::model::{Country, DerivedView, QueryParams, SortDirection, DEFAULT_PAGE_SIZE};
use crate::source::{CountrySource, Fetched, SourceError};

/// Knobs for [`Explorer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerSettings {
    /// Quiet period after the last filter change before searching upstream.
    pub debounce: Duration,
    pub page_size: usize,
    pub sort: SortDirection,
    /// Send filter text upstream as a name search. When off, filtering is
    /// purely local over the full directory.
    pub remote_search: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortDirection::Ascending,
            remote_search: false,
        }
    }
}

/// Async controller that owns the explorer state.
///
/// Every state change is published on a watch channel; front ends
/// [`subscribe`](Explorer::subscribe) and re-render on change. Each fetch
/// carries a token and its result is dropped unless that token is still
/// the latest issued, so the last request always wins.
///
/// Methods that start fetches must be called from within a tokio runtime.
pub struct Explorer<S> {
    shared: Arc<Shared<S>>,
    pending_search: Mutex<Option<JoinHandle<()>>>,
}

struct Shared<S> {
    source: Arc<S>,
    settings: ExplorerSettings,
    state: Mutex<ExplorerState>,
    publisher: watch::Sender<ExplorerState>,
    next_token: AtomicU64,
}

impl<S: CountrySource> Explorer<S> {
    /// Create an explorer over `source`. No fetch is started.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidPageSize`] when `settings.page_size` is 0.
    pub fn new(source: Arc<S>, settings: ExplorerSettings) -> Result<Self, EngineError> {
        if settings.page_size == 0 {
            return Err(EngineError::InvalidPageSize);
        }

        let initial = ExplorerState::with_params(QueryParams::new(
            "",
            settings.sort,
            0,
            settings.page_size,
        ));
        let (publisher, _) = watch::channel(initial.clone());

        Ok(Self {
            shared: Arc::new(Shared {
                source,
                settings,
                state: Mutex::new(initial),
                publisher,
                next_token: AtomicU64::new(0),
            }),
            pending_search: Mutex::new(None),
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ExplorerState> {
        self.shared.publisher.subscribe()
    }

    pub fn state(&self) -> ExplorerState {
        self.shared.state.lock().clone()
    }

    pub fn view(&self) -> Result<DerivedView<Country>, EngineError> {
        self.shared.state.lock().view()
    }

    /// Apply an intent and publish the resulting state.
    pub fn dispatch(&self, intent: ExplorerIntent) -> ExplorerState {
        self.shared.dispatch(intent)
    }

    /// Start a fetch right away, bypassing the debounce window.
    ///
    /// With remote search on, the current filter text is the search term.
    pub fn refresh(&self) -> JoinHandle<()> {
        self.cancel_pending_search();
        let term = self
            .shared
            .settings
            .remote_search
            .then(|| self.shared.state.lock().params.filter_text.clone());
        Shared::spawn_fetch(&self.shared, term)
    }

    /// Update the filter text.
    ///
    /// The view updates immediately. With remote search on, an upstream
    /// search is also scheduled once no further call has arrived for the
    /// debounce window; a term equal to the last one sent is skipped.
    pub fn set_filter(&self, text: impl Into<String>) -> ExplorerState {
        let text = text.into();
        let state = self.dispatch(ExplorerIntent::SetFilter(text.clone()));
        if self.shared.settings.remote_search {
            self.schedule_search(text);
        }
        state
    }

    pub fn set_sort(&self, direction: SortDirection) -> ExplorerState {
        self.dispatch(ExplorerIntent::SetSort(direction))
    }

    pub fn set_page(&self, page_index: usize) -> ExplorerState {
        self.dispatch(ExplorerIntent::SetPage(page_index))
    }

    pub fn next_page(&self) -> ExplorerState {
        self.dispatch(ExplorerIntent::NextPage)
    }

    pub fn prev_page(&self) -> ExplorerState {
        self.dispatch(ExplorerIntent::PrevPage)
    }

    pub fn set_page_size(&self, page_size: usize) -> ExplorerState {
        self.dispatch(ExplorerIntent::SetPageSize(page_size))
    }

    fn schedule_search(&self, term: String) {
        let shared = Arc::clone(&self.shared);
        let debounce = shared.settings.debounce;

        // Only the timer is cancelled on re-schedule. A fetch that already
        // started runs to completion and is filtered by its token.
        let timer = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let already_sent = shared.state.lock().last_search.as_deref() == Some(term.as_str());
            if already_sent {
                tracing::debug!(term = term.as_str(), "search term unchanged, skipping fetch");
                return;
            }
            Shared::spawn_fetch(&shared, Some(term));
        });

        if let Some(previous) = self.pending_search.lock().replace(timer) {
            previous.abort();
        }
    }

    fn cancel_pending_search(&self) {
        if let Some(previous) = self.pending_search.lock().take() {
            previous.abort();
        }
    }
}

impl<S> Drop for Explorer<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_search.get_mut().take() {
            pending.abort();
        }
    }
}

impl<S: CountrySource> Shared<S> {
    fn dispatch(&self, intent: ExplorerIntent) -> ExplorerState {
        // Publish under the lock so subscribers never see states out of order.
        let mut guard = self.state.lock();
        let next = ExplorerReducer::reduce(std::mem::take(&mut *guard), intent);
        *guard = next.clone();
        self.publisher.send_replace(next.clone());
        next
    }

    fn spawn_fetch(shared: &Arc<Self>, term: Option<String>) -> JoinHandle<()> {
        let token = shared.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        shared.dispatch(ExplorerIntent::RequestIssued {
            token,
            term: term.clone(),
        });
        tracing::debug!(token, term = ?term, "request issued");

        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            let result = match term.as_deref() {
                Some(term) => shared.source.search(term).await,
                None => shared.source.fetch_all().await,
            };
            shared.complete(token, result);
        })
    }

    fn complete(&self, token: u64, result: Result<Fetched, SourceError>) {
        let latest = self.state.lock().latest_token;
        if token != latest {
            tracing::debug!(token, latest, "discarding stale response");
            return;
        }

        let intent = match result {
            Ok(fetched) => {
                tracing::debug!(
                    token,
                    count = fetched.countries.len(),
                    origin = ?fetched.origin,
                    "response accepted"
                );
                ExplorerIntent::Loaded { token, fetched }
            }
            Err(err) => {
                tracing::warn!(token, error = %err, "fetch failed");
                ExplorerIntent::LoadFailed {
                    token,
                    message: err.to_string(),
                }
            }
        };
        // The reducer re-checks the token, so a request issued between the
        // check above and this dispatch still wins.
        self.dispatch(intent);
    }
}
