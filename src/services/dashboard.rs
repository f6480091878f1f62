// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    DashboardSummary, SpendingComparison, TodayStats, WeekBreakdown, WeeklyTrendData,
};

/// Read-only aggregates computed by the server.
#[derive(Debug, Clone)]
pub struct DashboardService {
    api: ApiClient,
    prefix: String,
}

impl DashboardService {
    pub fn new(api: ApiClient, cfg: &Config) -> Self {
        Self {
            api,
            prefix: cfg.dashboard_prefix.clone(),
        }
    }

    fn path(&self, tail: &str) -> String {
        format!("{}/{}", self.prefix, tail)
    }

    /// Today, this week and trend totals.
    pub async fn summary(&self) -> Result<DashboardSummary> {
        self.api.get(&self.path("summary")).await
    }

    /// Totals for the last few weeks, oldest first.
    pub async fn weekly_trend(&self) -> Result<Vec<WeeklyTrendData>> {
        self.api.get(&self.path("weekly-trend")).await
    }

    pub async fn today(&self) -> Result<TodayStats> {
        self.api.get(&self.path("today")).await
    }

    pub async fn current_week(&self) -> Result<WeekBreakdown> {
        self.api.get(&self.path("current-week")).await
    }

    pub async fn comparison(&self) -> Result<SpendingComparison> {
        self.api.get(&self.path("comparison")).await
    }
}
