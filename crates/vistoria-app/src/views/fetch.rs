//! # Fetch-State Envelope
//!
//! The `{items, is_loading, error, last_sync}` record shared by the clients
//! and inspections containers, and its reducer.
//!
//! Contract:
//! - `Start` sets `is_loading` and clears `error`, whatever came before.
//! - `Success` clears both, replaces the collection wholesale and stamps
//!   `last_sync` strictly later than any earlier stamp.
//! - `Failure` clears `is_loading`, records the message and keeps the items.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one fetchable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            last_sync: None,
        }
    }
}

/// Transitions of a [`FetchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAction<T> {
    Start,
    /// `at` is the clock reading when the response was applied.
    Success { items: Vec<T>, at: DateTime<Utc> },
    Failure(String),
}

/// Stamp for a success applied at `at`, given the previous stamp.
///
/// Never returns a value at or before `previous`.
#[must_use]
pub fn next_sync_stamp(previous: Option<DateTime<Utc>>, at: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if at <= prev => prev + Duration::milliseconds(1),
        _ => at,
    }
}

/// `(state, action) -> state`.
#[must_use]
pub fn reduce_fetch<T>(state: FetchState<T>, action: FetchAction<T>) -> FetchState<T> {
    match action {
        FetchAction::Start => FetchState {
            is_loading: true,
            error: None,
            ..state
        },
        FetchAction::Success { items, at } => FetchState {
            items,
            is_loading: false,
            error: None,
            last_sync: Some(next_sync_stamp(state.last_sync, at)),
        },
        FetchAction::Failure(message) => FetchState {
            is_loading: false,
            error: Some(message),
            ..state
        },
    }
}

impl<T> FetchState<T> {
    /// Apply `action` in place.
    pub fn apply(&mut self, action: FetchAction<T>) {
        let current = std::mem::take(self);
        *self = reduce_fetch(current, action);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[derive(Debug, Clone)]
    enum Step {
        Start,
        Success(Vec<u8>, i64),
        Failure(String),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Start),
            (proptest::collection::vec(any::<u8>(), 0..5), 0i64..10_000)
                .prop_map(|(items, ms)| Step::Success(items, ms)),
            "[a-z]{1,8}".prop_map(Step::Failure),
        ]
    }

    fn action(step: Step) -> FetchAction<u8> {
        match step {
            Step::Start => FetchAction::Start,
            Step::Success(items, ms) => FetchAction::Success { items, at: at(ms) },
            Step::Failure(msg) => FetchAction::Failure(msg),
        }
    }

    proptest! {
        #[test]
        fn prop_reducer_contract(history in proptest::collection::vec(step(), 0..12), last in step()) {
            let mut state = FetchState::<u8>::default();
            for s in history {
                state.apply(action(s));
            }
            let before = state.clone();
            let after = reduce_fetch(state, action(last.clone()));

            match last {
                Step::Start => {
                    prop_assert!(after.is_loading);
                    prop_assert_eq!(after.error, None);
                    prop_assert_eq!(after.items, before.items);
                    prop_assert_eq!(after.last_sync, before.last_sync);
                }
                Step::Success(items, _) => {
                    prop_assert!(!after.is_loading);
                    prop_assert_eq!(after.error, None);
                    prop_assert_eq!(after.items, items);
                    let stamp = after.last_sync.unwrap();
                    if let Some(prev) = before.last_sync {
                        prop_assert!(stamp > prev);
                    }
                }
                Step::Failure(msg) => {
                    prop_assert!(!after.is_loading);
                    prop_assert_eq!(after.error, Some(msg));
                    prop_assert_eq!(after.items, before.items);
                    prop_assert_eq!(after.last_sync, before.last_sync);
                }
            }
        }
    }

    #[test]
    fn test_stamp_advances_when_clock_stalls() {
        let first = reduce_fetch(
            FetchState::default(),
            FetchAction::Success {
                items: vec![1u8],
                at: at(5_000),
            },
        );
        let second = reduce_fetch(
            first.clone(),
            FetchAction::Success {
                items: vec![2u8],
                at: at(5_000),
            },
        );
        assert_eq!(second.last_sync, Some(at(5_001)));

        let third = reduce_fetch(
            second,
            FetchAction::Success {
                items: vec![],
                at: at(1_000),
            },
        );
        assert_eq!(third.last_sync, Some(at(5_002)));
    }

    #[test]
    fn test_failure_keeps_last_sync() {
        let synced = reduce_fetch(
            FetchState::default(),
            FetchAction::Success {
                items: vec![1u8, 2],
                at: at(10),
            },
        );
        let failed = reduce_fetch(synced, FetchAction::Failure("boom".to_string()));
        assert_eq!(failed.items, vec![1, 2]);
        assert_eq!(failed.last_sync, Some(at(10)));
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
