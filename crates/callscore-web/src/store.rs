//! Shared polling store
//!
//! One cache entry per backend endpoint, provided through Leptos context.
//! Mounted views subscribe instead of polling on their own, so any number
//! of views share a single in-flight request and a single cache entry.
//! The poll loop for an entry starts with its first subscriber and is
//! abandoned when the last one unmounts; a result arriving after that is
//! discarded, never applied.

use crate::services::fetch::fetch_json;
use callscore_core::types::{Record, Statistics};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Interval between polls of an endpoint
pub const POLL_INTERVAL_MS: u32 = 60_000;

/// Lifecycle of a polled cache entry. A failed refresh replaces the data;
/// stale values are never shown.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// A fetch is in flight and no fresh data exists
    Loading,
    /// The last fetch succeeded
    Ready(T),
    /// The last fetch failed, with the user-facing message
    Failed(String),
}

/// One polled endpoint: its state signal, subscriber count and the epoch
/// used to abandon in-flight loops
struct Entry<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    subscribers: StoredValue<usize>,
    epoch: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for Entry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Entry<T> {}

impl<T> Entry<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            state: RwSignal::new(FetchState::Loading),
            subscribers: StoredValue::new(0),
            epoch: StoredValue::new(0),
        }
    }

    /// Register the calling component as a subscriber for the lifetime of
    /// its reactive owner
    fn subscribe(self, path: &'static str, error_message: &'static str) -> ReadSignal<FetchState<T>> {
        let previous = self.subscribers.get_value();
        self.subscribers.set_value(previous + 1);
        if previous == 0 {
            self.spawn_poll_loop(path, error_message);
        }

        on_cleanup(move || {
            let remaining = self.subscribers.get_value().saturating_sub(1);
            self.subscribers.set_value(remaining);
            if remaining == 0 {
                // Abandon the loop; an in-flight result is discarded
                self.epoch.update_value(|epoch| *epoch += 1);
            }
        });

        self.state.read_only()
    }

    fn spawn_poll_loop(self, path: &'static str, error_message: &'static str) {
        self.epoch.update_value(|epoch| *epoch += 1);
        let epoch = self.epoch.get_value();

        leptos::task::spawn_local(async move {
            loop {
                self.state.set(FetchState::Loading);
                let fetched = fetch_json::<T>(path).await;
                if self.epoch.get_value() != epoch {
                    break;
                }
                match fetched {
                    Ok(data) => self.state.set(FetchState::Ready(data)),
                    Err(err) => {
                        debug!("poll of {path} failed: {err}");
                        self.state.set(FetchState::Failed(error_message.to_string()));
                    }
                }

                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if self.epoch.get_value() != epoch {
                    break;
                }
            }
        });
    }
}

/// The application-wide polling store
#[derive(Clone, Copy)]
pub struct PollStore {
    statistics: Entry<Statistics>,
    records: Entry<Vec<Record>>,
}

impl PollStore {
    /// Create an empty store; entries stay idle until first subscribed
    #[must_use]
    pub fn new() -> Self {
        Self {
            statistics: Entry::new(),
            records: Entry::new(),
        }
    }

    /// Subscribe the calling component to aggregate statistics
    pub fn subscribe_statistics(self) -> ReadSignal<FetchState<Statistics>> {
        self.statistics
            .subscribe("/api/statistics", "Помилка завантаження статистики")
    }

    /// Subscribe the calling component to the records list
    pub fn subscribe_records(self) -> ReadSignal<FetchState<Vec<Record>>> {
        self.records
            .subscribe("/api/evaluations", "Помилка завантаження записів")
    }
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fetch_state_transitions_compare() {
        let loading: FetchState<Statistics> = FetchState::Loading;
        assert_eq!(loading, FetchState::Loading);

        let failed: FetchState<Statistics> = FetchState::Failed("помилка".to_string());
        assert_ne!(failed, FetchState::Loading);

        let ready = FetchState::Ready(Statistics::default());
        assert_ne!(ready, FetchState::Loading);
    }
}
