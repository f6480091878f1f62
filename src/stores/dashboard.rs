// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{InFlight, is_loading, lock};
use crate::error::{Error, Result};
use crate::models::{DashboardSummary, WeeklyTrendData};
use crate::services::DashboardService;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// `None` until the first successful fetch.
    pub summary: Option<DashboardSummary>,
    pub weekly_trend: Vec<WeeklyTrendData>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// This fetch was the latest one and its result is now in the state.
    Committed,
    /// A newer fetch started while this one was in flight; its result was
    /// dropped.
    Superseded,
}

#[derive(Default)]
struct Inner {
    summary: Option<DashboardSummary>,
    weekly_trend: Vec<WeeklyTrendData>,
    error: Option<String>,
    generation: u64,
}

/// Snapshot of the server's spending aggregates.
pub struct DashboardStore {
    service: DashboardService,
    state: Mutex<Inner>,
    in_flight: AtomicUsize,
}

impl DashboardStore {
    pub fn new(service: DashboardService) -> Self {
        Self {
            service,
            state: Mutex::new(Inner::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Creates the store and fetches once.
    pub async fn mount(service: DashboardService) -> Self {
        let store = Self::new(service);
        let _ = store.fetch().await;
        store
    }

    pub fn snapshot(&self) -> DashboardState {
        let s = lock(&self.state);
        DashboardState {
            summary: s.summary.clone(),
            weekly_trend: s.weekly_trend.clone(),
            loading: self.loading(),
            error: s.error.clone(),
        }
    }

    pub fn loading(&self) -> bool {
        is_loading(&self.in_flight)
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    /// Fetches the summary and the weekly trend concurrently and commits
    /// both, or the first error to arrive, unless a newer fetch has started
    /// in the meantime.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let _busy = InFlight::start(&self.in_flight);
        let generation = {
            let mut s = lock(&self.state);
            s.generation += 1;
            s.error = None;
            s.generation
        };

        let ((summary, summary_at), (trend, trend_at)) = tokio::join!(
            settle(self.service.summary()),
            settle(self.service.weekly_trend())
        );
        let result = match (summary, trend) {
            (Ok(summary), Ok(trend)) => Ok((summary, trend)),
            (Err(a), Err(b)) => Err(if trend_at < summary_at { b } else { a }),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        };

        let mut s = lock(&self.state);
        if s.generation != generation {
            tracing::debug!(
                generation,
                latest = s.generation,
                "discarding stale dashboard response"
            );
            return Ok(FetchOutcome::Superseded);
        }
        match result {
            Ok((summary, trend)) => {
                s.summary = Some(summary);
                s.weekly_trend = trend;
                Ok(FetchOutcome::Committed)
            }
            Err(e) => {
                tracing::error!("Dashboard data fetch error: {e}");
                s.error = Some(message_for(&e));
                Err(e)
            }
        }
    }

    pub async fn refetch(&self) -> Result<FetchOutcome> {
        self.fetch().await
    }

    pub async fn refresh(&self) -> Result<FetchOutcome> {
        self.fetch().await
    }
}

async fn settle<T>(fut: impl Future<Output = Result<T>>) -> (Result<T>, Instant) {
    let out = fut.await;
    (out, Instant::now())
}

fn message_for(e: &Error) -> String {
    let msg = e.to_string();
    if msg.is_empty() {
        "Failed to load dashboard data".to_string()
    } else {
        msg
    }
}
