// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The week's transactions and the known category names.
//!
//! Both lists are caches of server state. Successful writes update them in
//! place; nothing reconciles them with the server until the next [`load`].
//!
//! [`load`]: TransactionStore::load

use super::{InFlight, is_loading, lock};
use crate::error::Result;
use crate::models::{Transaction, TransactionRequest};
use crate::services::TransactionService;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

pub const LOAD_FAILED: &str = "Failed to load transactions";
pub const ADD_FAILED: &str = "Failed to add transaction";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionState {
    /// Newest first.
    pub transactions: Vec<Transaction>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Result of a successful [`TransactionStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub transaction: Transaction,
    /// True only for the call that put the category name into the list.
    pub is_new_category: bool,
}

#[derive(Default)]
struct Inner {
    transactions: Vec<Transaction>,
    categories: Vec<String>,
    error: Option<String>,
}

pub struct TransactionStore {
    service: TransactionService,
    state: Mutex<Inner>,
    in_flight: AtomicUsize,
}

impl TransactionStore {
    pub fn new(service: TransactionService) -> Self {
        Self {
            service,
            state: Mutex::new(Inner::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Creates the store and loads transactions and categories together.
    /// Failures end up in the store state; see [`Self::load`] and
    /// [`Self::load_categories`].
    pub async fn mount(service: TransactionService) -> Self {
        let store = Self::new(service);
        let _ = tokio::join!(store.load(), store.load_categories());
        store
    }

    pub fn snapshot(&self) -> TransactionState {
        let s = lock(&self.state);
        TransactionState {
            transactions: s.transactions.clone(),
            categories: s.categories.clone(),
            loading: self.loading(),
            error: s.error.clone(),
        }
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        lock(&self.state).transactions.clone()
    }

    pub fn categories(&self) -> Vec<String> {
        lock(&self.state).categories.clone()
    }

    pub fn loading(&self) -> bool {
        is_loading(&self.in_flight)
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    /// Replaces the list with the current week's transactions. On failure
    /// the previous list stays and the error message is set.
    pub async fn load(&self) -> Result<()> {
        let _busy = InFlight::start(&self.in_flight);
        match self.service.current_week_transactions().await {
            Ok(list) => {
                let mut s = lock(&self.state);
                s.transactions = list;
                s.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("{LOAD_FAILED}: {e}");
                lock(&self.state).error = Some(LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Refreshes the category names. A failure is logged and returned but
    /// never becomes the store's error, and the old list is kept.
    pub async fn load_categories(&self) -> Result<usize> {
        match self.service.categories().await {
            Ok(names) => {
                let n = names.len();
                lock(&self.state).categories = names;
                Ok(n)
            }
            Err(e) => {
                tracing::warn!("Failed to load categories: {e}");
                Err(e)
            }
        }
    }

    /// Submits `req` and, on success, puts the returned transaction at the
    /// head of the list. The category name is appended if it is not known
    /// yet; checking and appending happen under one lock.
    pub async fn add(&self, req: &TransactionRequest) -> Result<AddOutcome> {
        let _busy = InFlight::start(&self.in_flight);
        let transaction = match self.service.add_transaction(req).await {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("{ADD_FAILED}: {e}");
                lock(&self.state).error = Some(ADD_FAILED.to_string());
                return Err(e);
            }
        };

        let mut s = lock(&self.state);
        s.transactions.insert(0, transaction.clone());
        let is_new_category = !s.categories.contains(&req.category_name);
        if is_new_category {
            s.categories.push(req.category_name.clone());
        }
        tracing::debug!(
            id = transaction.id,
            category = %req.category_name,
            is_new_category,
            "transaction added"
        );
        Ok(AddOutcome {
            transaction,
            is_new_category,
        })
    }

    pub async fn refresh(&self) -> Result<()> {
        self.load().await
    }
}
