//! Reactive query client over [`QueryCache`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `QueryClient` via context. Components read through
//! [`use_query`]; mutation handlers call [`QueryClient::invalidate`] after the
//! backend acknowledges the write. Readers depend on a per-key generation
//! memo, so storing a fetch result never re-triggers anyone, while an
//! invalidation re-runs exactly the resources whose key it matched.
//!
//! Concurrent readers of one key share a single request: the first reader
//! registers its fetch as in flight under the key's generation, and any
//! reader arriving before it lands awaits that same future. An
//! invalidation moves the generation on, so later readers start afresh.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::query_cache::{QueryCache, QueryKey};
use crate::net::error::BackendError;

type SharedFetch = Shared<LocalBoxFuture<'static, Result<serde_json::Value, BackendError>>>;

/// Process-wide handle to the query cache. Cached values are stored as JSON
/// so one cache can hold every result type.
#[derive(Clone, Copy, Debug)]
pub struct QueryClient {
    cache: RwSignal<QueryCache<serde_json::Value>>,
    in_flight: StoredValue<HashMap<QueryKey, (u64, SharedFetch)>, LocalStorage>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self { cache: RwSignal::new(QueryCache::default()), in_flight: StoredValue::new_local(HashMap::new()) }
    }

    /// Mark everything under `prefix` stale; active readers re-fetch.
    pub fn invalidate(&self, prefix: &QueryKey) {
        self.cache.update(|c| *c = std::mem::take(c).invalidate(prefix));
    }

    pub fn invalidate_all(&self, prefixes: &[QueryKey]) {
        if prefixes.is_empty() {
            return;
        }
        self.cache.update(|c| {
            let mut next = std::mem::take(c);
            for prefix in prefixes {
                next = next.invalidate(prefix);
            }
            *c = next;
        });
    }

    /// Tracked read of a key's generation.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.cache.with(|c| c.generation(key))
    }

    fn cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.cache
            .with_untracked(|c| c.fresh(key).cloned())
            .and_then(|value| serde_json::from_value(value).ok())
    }

    fn begin_fetch(&self, key: &QueryKey) -> u64 {
        let mut generation = 0;
        self.cache.update(|c| generation = c.begin_fetch(key));
        generation
    }

    fn complete_fetch(&self, key: &QueryKey, value: serde_json::Value, started_generation: u64) {
        self.cache.update(|c| c.complete_fetch(key, value, started_generation));
    }

    /// The request in flight for `key` under its current generation, or a
    /// new one built by `start`.
    fn shared_fetch(
        &self,
        key: &QueryKey,
        start: impl FnOnce() -> LocalBoxFuture<'static, Result<serde_json::Value, BackendError>>,
    ) -> SharedFetch {
        let current = self.cache.with_untracked(|c| c.generation(key));
        let joined = self.in_flight.with_value(|m| {
            m.get(key).filter(|(generation, _)| *generation == current).map(|(_, fetch)| fetch.clone())
        });
        if let Some(fetch) = joined {
            return fetch;
        }

        let started = self.begin_fetch(key);
        let request = start();
        let client = *self;
        let owned_key = key.clone();
        let fetch = async move {
            let result = request.await;
            match &result {
                Ok(value) => client.complete_fetch(&owned_key, value.clone(), started),
                Err(e) => leptos::logging::error!("query {:?}/{:?} failed: {e}", owned_key.kind, owned_key.scope),
            }
            client.in_flight.update_value(|m| {
                if m.get(&owned_key).is_some_and(|(generation, _)| *generation == started) {
                    m.remove(&owned_key);
                }
            });
            result
        }
        .boxed_local()
        .shared();

        self.in_flight.update_value(|m| {
            m.insert(key.clone(), (started, fetch.clone()));
        });
        fetch
    }
}

/// Read `key` through the cache, fetching with `fetch` when it is missing
/// or stale.
///
/// `key` is reactive: when it changes (new scope, bumped refresh trigger)
/// or is invalidated, the returned resource re-runs. Readers of a key that
/// is already being fetched wait for that request instead of issuing their
/// own. Fetch failures are logged once and handed to every waiting reader.
pub fn use_query<T, K, F, Fut>(key: K, fetch: F) -> LocalResource<Result<T, BackendError>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    K: Fn() -> QueryKey + Send + Sync + 'static,
    F: Fn(QueryKey) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, BackendError>> + 'static,
{
    let client = expect_context::<QueryClient>();
    let key = Memo::new(move |_| key());
    let generation = Memo::new(move |_| client.generation(&key.get()));

    LocalResource::new(move || {
        let key = key.get();
        let _ = generation.get();
        let fetch = fetch.clone();
        async move {
            if let Some(hit) = client.cached::<T>(&key) {
                return Ok(hit);
            }
            let request = client.shared_fetch(&key, || {
                let key = key.clone();
                async move {
                    let data = fetch(key).await?;
                    serde_json::to_value(&data).map_err(|e| BackendError::Decode(e.to_string()))
                }
                .boxed_local()
            });
            let value = request.await?;
            serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
        }
    })
}
