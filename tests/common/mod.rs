// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use spendtracker::{
    api::ApiClient,
    config::Config,
    services::{DashboardService, TransactionService},
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Knobs and recorded traffic of the fake spendingtracker backend.
#[derive(Default)]
pub struct MockState {
    pub transactions: Mutex<Vec<Value>>,
    pub categories: Mutex<Vec<Value>>,
    pub next_id: AtomicI64,
    pub fail_add: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_categories: AtomicBool,
    pub fail_summary: AtomicBool,
    pub fail_trend: AtomicBool,
    pub add_delay_ms: AtomicU64,
    pub summary_delay_ms: AtomicU64,
    pub trend_delay_ms: AtomicU64,
    /// Per-call summary delays, consumed front to back before `summary_delay_ms`.
    pub summary_delays: Mutex<VecDeque<u64>>,
    pub summary_calls: AtomicUsize,
    pub content_types: Mutex<Vec<Option<String>>>,
}

impl MockState {
    pub fn with_categories(names: &[&str]) -> Self {
        let state = MockState::default();
        {
            let mut cats = state.categories.lock().unwrap();
            for (i, n) in names.iter().enumerate() {
                cats.push(json!({ "id": i as i64 + 1, "name": n }));
            }
        }
        state
    }
}

pub struct MockApi {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockApi {
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            ..Config::default()
        }
        .validated()
        .unwrap()
    }

    pub fn transaction_service(&self) -> TransactionService {
        let cfg = self.config();
        TransactionService::new(ApiClient::new(&cfg).unwrap(), &cfg)
    }

    pub fn dashboard_service(&self) -> DashboardService {
        let cfg = self.config();
        DashboardService::new(ApiClient::new(&cfg).unwrap(), &cfg)
    }
}

pub async fn spawn(state: MockState) -> MockApi {
    spawn_with_prefixes(state, "/api/spending", "/api/dashboard").await
}

/// Serves the API under the given prefixes; an empty prefix serves bare paths.
pub async fn spawn_with_prefixes(state: MockState, spending: &str, dashboard: &str) -> MockApi {
    let state = Arc::new(state);
    let spending_routes = Router::new()
        .route("/transactions", post(add_transaction))
        .route("/current-week", get(current_week))
        .route("/categories", get(categories));
    let dashboard_routes = Router::new()
        .route("/summary", get(summary))
        .route("/weekly-trend", get(weekly_trend))
        .route("/today", get(today))
        .route("/current-week", get(week_breakdown))
        .route("/comparison", get(comparison));

    let app = Router::new()
        .merge(mount(spending, spending_routes))
        .merge(mount(dashboard, dashboard_routes))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockApi {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn mount(prefix: &str, routes: Router<Arc<MockState>>) -> Router<Arc<MockState>> {
    if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    }
}

fn record(state: &MockState, headers: &HeaderMap) {
    let ct = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.content_types.lock().unwrap().push(ct);
}

fn boom() -> Response {
    fail_with("boom")
}

fn fail_with(body: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

async fn pause(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

async fn add_transaction(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &headers);
    pause(state.add_delay_ms.load(Ordering::SeqCst)).await;
    if state.fail_add.load(Ordering::SeqCst) {
        return boom();
    }
    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let category = body["categoryName"].as_str().unwrap_or_default().to_string();
    {
        let mut cats = state.categories.lock().unwrap();
        if !cats.iter().any(|c| c["name"] == category.as_str()) {
            let cid = cats.len() as i64 + 1;
            cats.push(json!({ "id": cid, "name": category }));
        }
    }
    let tx = json!({
        "id": id,
        "amount": body["amount"],
        "categoryName": category,
        "note": body.get("note").cloned().unwrap_or(Value::Null),
        "createdAt": "2024-01-15T10:00:00Z",
    });
    state.transactions.lock().unwrap().insert(0, tx.clone());
    Json(tx).into_response()
}

async fn current_week(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    if state.fail_list.load(Ordering::SeqCst) {
        return boom();
    }
    Json(state.transactions.lock().unwrap().clone()).into_response()
}

async fn categories(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    if state.fail_categories.load(Ordering::SeqCst) {
        return boom();
    }
    Json(state.categories.lock().unwrap().clone()).into_response()
}

/// `totalSpent` is the 1-based call number, so tests can tell responses apart.
async fn summary(State(state): State<Arc<MockState>>) -> Response {
    let call = state.summary_calls.fetch_add(1, Ordering::SeqCst) + 1;
    let delay = state
        .summary_delays
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| state.summary_delay_ms.load(Ordering::SeqCst));
    pause(delay).await;
    if state.fail_summary.load(Ordering::SeqCst) {
        return fail_with("summary boom");
    }
    Json(json!({
        "totalSpent": call as i64 * 1000,
        "trendData": { "direction": "up", "percentage": 12.5 },
        "weeklyStats": { "spent": 3500, "transactions": 7, "categories": 3, "dailyAverage": 500 }
    }))
    .into_response()
}

async fn weekly_trend(State(state): State<Arc<MockState>>) -> Response {
    pause(state.trend_delay_ms.load(Ordering::SeqCst)).await;
    if state.fail_trend.load(Ordering::SeqCst) {
        return fail_with("trend boom");
    }
    Json(json!([
        { "weekStart": "Jan 1, 2024", "totalSpent": 4200, "transactionCount": 9 },
        { "weekStart": "Jan 8, 2024", "weekEnd": "Jan 14, 2024", "totalSpent": 3500, "transactionCount": 7, "averageDaily": 500 }
    ]))
    .into_response()
}

async fn today() -> Json<Value> {
    Json(json!({ "todayTotal": 850, "todayTransactions": 3, "todayCategories": 2 }))
}

async fn week_breakdown() -> Json<Value> {
    Json(json!({
        "weekTotal": 3500,
        "dailyBreakdown": [
            { "date": "2024-01-15", "dayName": "Monday", "amount": 1200, "transactionCount": 2 }
        ],
        "categoryBreakdown": [
            { "categoryName": "Food", "amount": 2100, "percentage": 60.0, "transactionCount": 4 }
        ]
    }))
}

async fn comparison() -> Json<Value> {
    let cmp = json!({ "current": 3500, "previous": 3000, "percentageChange": 16.7, "trend": "up" });
    Json(json!({ "thisWeekVsLast": cmp, "thisMonthVsLast": cmp }))
}
