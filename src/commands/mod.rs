// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod config;
pub mod dashboard;
pub mod transactions;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::{DashboardService, TransactionService};

/// Everything a command needs to reach the API.
#[derive(Debug, Clone)]
pub struct Ctx {
    pub config: Config,
    pub api: ApiClient,
}

impl Ctx {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self { config, api })
    }

    pub fn transaction_service(&self) -> TransactionService {
        TransactionService::new(self.api.clone(), &self.config)
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.api.clone(), &self.config)
    }
}
