//! Data-fetch hook: GET a resource, expose `{data, loading, error}`, and
//! allow a manual refetch after a mutation elsewhere invalidates the data.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::use_api;

/// Observable state of one GET in flight or settled.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully fetched value. Kept across a failed refetch of the
    /// same URL so the view does not blank out on a transient error, but
    /// dropped when the URL changes so a new page never shows the previous
    /// page's record.
    pub data: Option<T>,
    /// True from call start until the response (success or failure) is
    /// processed.
    pub loading: bool,
    /// Human-readable message for the last failure; cleared by the next
    /// successful fetch.
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Transition at request start. A changed URL invalidates what was on
    /// screen; a refetch of the same URL keeps it visible while reloading.
    fn begin(&mut self, url_changed: bool) {
        if url_changed {
            *self = Self::default();
        } else {
            self.loading = true;
        }
    }

    /// Transition when the response (or its failure) has been processed.
    fn complete(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}

/// Drive a GET against the context [`ApiClient`](api::ApiClient).
///
/// `url` returns the request path relative to the API base; any signals it
/// reads subscribe the fetch, so a changed URL re-runs the GET
/// automatically. Call [`UseFetch::refetch`] to re-run it on demand.
///
/// ```ignore
/// let startups: UseFetch<Vec<Startup>> = use_fetch(|| "/startups".to_string());
/// ```
pub fn use_fetch<T, F>(mut url: F) -> UseFetch<T>
where
    T: DeserializeOwned + 'static,
    F: FnMut() -> String + 'static,
{
    let client = use_api();
    let mut state = use_signal(FetchState::<T>::default);
    let mut current_url = use_signal(|| Option::<String>::None);

    let resource = use_resource(move || {
        // Reading the URL here ties the resource to whatever the closure
        // reads: a route change that produces a new URL restarts the fetch.
        let url = url();
        let client = client.clone();
        async move {
            let url_changed = current_url.peek().as_deref() != Some(url.as_str());
            if url_changed {
                current_url.set(Some(url.clone()));
            }
            state.with_mut(|s| s.begin(url_changed));
            let result = client
                .get_json::<T>(&url, "Failed to fetch data")
                .await
                .map_err(|err| err.message());
            state.with_mut(|s| s.complete(result));
        }
    });

    UseFetch { state, resource }
}

/// Handle returned by [`use_fetch`].
pub struct UseFetch<T: 'static> {
    state: Signal<FetchState<T>>,
    resource: Resource<()>,
}

impl<T> Clone for UseFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UseFetch<T> {}

impl<T: Clone> UseFetch<T> {
    /// The last successfully fetched value, if any.
    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }

    /// Whether a request is currently in flight.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// The last failure message, if the most recent fetch failed.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Re-issue the same GET, e.g. after a delete elsewhere changed the
    /// server state.
    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}
