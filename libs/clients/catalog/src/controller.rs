//! Catalog browsing state machine.
//!
//! [`CatalogController`] owns the list state (items, pagination, search
//! query, loading flag) and exposes the user intents as methods. State is
//! published through a `tokio::sync::watch` channel.
//!
//! Every request carries a [`CancelToken`]. Starting a request or typing a
//! new search term cancels the request before it, and a response is
//! committed only if its token is still live at commit time, checked under
//! the same lock that registers new requests. A superseded request therefore
//! never overwrites newer state. After [`CatalogController::unmount`] no new
//! request starts until the next [`CatalogController::mount`].

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

use crate::api::CatalogApi;
use crate::cancel::CancelToken;
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::error::ClientError;
use crate::models::{Item, ItemQuery, Pagination};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Item>,
    pub pagination: Pagination,
    pub search_query: String,
    pub loading: bool,
}

pub struct CatalogController<A: CatalogApi> {
    inner: Arc<Inner<A>>,
}

impl<A: CatalogApi> Clone for CatalogController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<A> {
    api: A,
    state: watch::Sender<CatalogState>,
    in_flight: Mutex<InFlight>,
    debouncer: Debouncer,
}

/// The most recently started request.
#[derive(Default)]
struct InFlight {
    generation: u64,
    token: Option<CancelToken>,
    unmounted: bool,
}

impl<A: CatalogApi> CatalogController<A> {
    pub fn new(api: A) -> Self {
        Self::with_debounce(api, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(api: A, window: Duration) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                state,
                in_flight: Mutex::new(InFlight::default()),
                debouncer: Debouncer::new(window),
            }),
        }
    }

    /// Receiver that observes every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.inner.state.borrow().clone()
    }

    /// Starts the initial load in the background.
    pub fn mount(&self) -> JoinHandle<()> {
        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.unmounted = false;
        }

        let controller = self.clone();
        tokio::spawn(async move { controller.initial_fetch().await })
    }

    /// Cancels the in-flight request and any pending debounced search.
    /// Requests that try to start afterwards are dropped.
    pub fn unmount(&self) {
        self.inner.debouncer.cancel();

        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.unmounted = true;
            if let Some(token) = &in_flight.token {
                token.cancel();
            }
        }
        debug!("Catalog controller unmounted");
    }

    /// First page at the current limit with no search.
    pub async fn initial_fetch(&self) {
        let limit = self.current_limit();
        self.fetch_items(CancelToken::new(), 1, limit, String::new())
            .await;
    }

    /// Records `query` right away, cancels the request in flight and
    /// fetches page 1 for the new query once typing pauses for the debounce
    /// window.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner.state.send_modify(|state| {
            state.search_query = query.clone();
        });

        if let Ok(in_flight) = self.inner.in_flight.lock() {
            if let Some(token) = &in_flight.token {
                token.cancel();
            }
        }

        let controller = self.clone();
        self.inner.debouncer.schedule(async move {
            let limit = controller.current_limit();
            controller
                .fetch_items(CancelToken::new(), 1, limit, query)
                .await;
        });
    }

    /// Fetches page 1 for the current query immediately, dropping any
    /// pending debounced search.
    pub async fn submit_search(&self) {
        self.inner.debouncer.cancel();

        let (limit, query) = {
            let state = self.inner.state.borrow();
            (state.pagination.limit, state.search_query.clone())
        };
        self.fetch_items(CancelToken::new(), 1, limit, query).await;
    }

    /// Fetches page `page` at the current limit and query.
    pub async fn go_to_page(&self, page: u64) {
        let (limit, query) = {
            let state = self.inner.state.borrow();
            (state.pagination.limit, state.search_query.clone())
        };
        self.fetch_items(CancelToken::new(), page, limit, query)
            .await;
    }

    /// Moves forward one page when the current page has a successor.
    pub async fn next_page(&self) {
        let pagination = self.state().pagination;
        if pagination.has_next_page {
            self.go_to_page(pagination.page + 1).await;
        }
    }

    /// Moves back one page when the current page has a predecessor.
    pub async fn prev_page(&self) {
        let pagination = self.state().pagination;
        if pagination.has_prev_page {
            self.go_to_page(pagination.page - 1).await;
        }
    }

    /// Performs one list request under `token`, superseding whatever was in
    /// flight.
    ///
    /// On success the items and pagination are replaced wholesale. On
    /// cancellation or failure the previous state is kept. The loading flag
    /// is cleared at the end unless a newer request has taken over.
    #[instrument(skip(self, token))]
    pub async fn fetch_items(&self, token: CancelToken, page: u64, limit: u64, query: String) {
        let Some(generation) = self.begin(&token) else {
            debug!("Controller unmounted, request dropped");
            return;
        };
        let request = ItemQuery::new(page, limit, query);

        let result = token
            .run(self.inner.api.fetch_items(&request))
            .await
            .and_then(|response| response);

        let Ok(in_flight) = self.inner.in_flight.lock() else {
            return;
        };

        match result {
            Ok(_) if token.is_cancelled() => debug!("Discarding response of superseded request"),
            Ok(body) => self.inner.state.send_modify(|state| {
                state.items = body.items;
                state.pagination = body.pagination;
            }),
            Err(ClientError::Cancelled) => debug!("Request cancelled"),
            Err(e) => error!(error = %e, "Error fetching items"),
        }

        if in_flight.generation == generation {
            self.inner.state.send_if_modified(|state| {
                let was_loading = state.loading;
                state.loading = false;
                was_loading
            });
        }
    }

    /// Registers `token` as the live request, cancelling its predecessor,
    /// and raises the loading flag. Returns `None` once unmounted.
    fn begin(&self, token: &CancelToken) -> Option<u64> {
        let generation = match self.inner.in_flight.lock() {
            Ok(mut in_flight) => {
                if in_flight.unmounted {
                    token.cancel();
                    return None;
                }
                if let Some(previous) = in_flight.token.replace(token.clone()) {
                    previous.cancel();
                }
                in_flight.generation += 1;
                in_flight.generation
            }
            Err(_) => 0,
        };

        self.inner.state.send_if_modified(|state| {
            let was_loading = state.loading;
            state.loading = true;
            !was_loading
        });
        Some(generation)
    }

    fn current_limit(&self) -> u64 {
        self.inner.state.borrow().pagination.limit
    }
}
