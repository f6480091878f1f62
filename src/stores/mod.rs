// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client-side state over the services: each store owns its slice of state
//! and is the only writer to it.

pub mod dashboard;
pub mod transactions;

pub use dashboard::{DashboardState, DashboardStore, FetchOutcome};
pub use transactions::{AddOutcome, TransactionState, TransactionStore};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State is only ever replaced wholesale, so a panic mid-update cannot leave
/// it half written and a poisoned lock is safe to reuse.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps a store's loading flag raised until dropped.
pub(crate) struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    pub(crate) fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub(crate) fn is_loading(counter: &AtomicUsize) -> bool {
    counter.load(Ordering::SeqCst) > 0
}
