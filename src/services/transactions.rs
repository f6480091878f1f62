// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Category, Transaction, TransactionRequest};

#[derive(Debug, Clone)]
pub struct TransactionService {
    api: ApiClient,
    prefix: String,
}

impl TransactionService {
    pub fn new(api: ApiClient, cfg: &Config) -> Self {
        Self {
            api,
            prefix: cfg.spending_prefix.clone(),
        }
    }

    fn path(&self, tail: &str) -> String {
        format!("{}/{}", self.prefix, tail)
    }

    pub async fn add_transaction(&self, req: &TransactionRequest) -> Result<Transaction> {
        self.api.post(&self.path("transactions"), req).await
    }

    pub async fn current_week_transactions(&self) -> Result<Vec<Transaction>> {
        self.api.get(&self.path("current-week")).await
    }

    /// Category names, in the order the server lists them.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let cats: Vec<Category> = self.api.get(&self.path("categories")).await?;
        Ok(cats.into_iter().map(|c| c.name).collect())
    }
}
