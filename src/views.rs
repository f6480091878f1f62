// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Plain-text rendering of store state. Nothing here talks to the network.

use crate::models::{
    Comparison, DashboardSummary, SpendingComparison, TodayStats, Transaction, WeekBreakdown,
    WeeklyTrendData,
};
use crate::stores::DashboardState;
use crate::utils::{fmt_date, fmt_ksh, fmt_ksh_whole, pretty_table};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

pub fn total(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.amount).sum()
}

/// One listing line: amount, category, date and the note when there is one.
pub fn transaction_line(t: &Transaction) -> String {
    let mut line = format!(
        "{}  {}  {}",
        fmt_ksh(&t.amount),
        t.category_name,
        fmt_date(&t.created_at)
    );
    if let Some(note) = t.note.as_deref().filter(|n| !n.is_empty()) {
        let _ = write!(line, "  ({})", note);
    }
    line
}

pub fn transaction_list(title: &str, transactions: &[Transaction]) -> String {
    let mut out = format!(
        "{}    Total: {}\n",
        title,
        fmt_ksh(&total(transactions))
    );
    if transactions.is_empty() {
        out.push_str("No transactions yet");
        return out;
    }
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                fmt_ksh(&t.amount),
                t.category_name.clone(),
                t.note.clone().unwrap_or_default(),
                fmt_date(&t.created_at),
            ]
        })
        .collect();
    let _ = write!(
        out,
        "{}",
        pretty_table(&["Amount", "Category", "Note", "Date"], rows)
    );
    out
}

/// Full dashboard, or the error screen when the last fetch failed.
pub fn dashboard(state: &DashboardState) -> String {
    if let Some(err) = &state.error {
        return error_screen(err);
    }
    let mut out = String::new();
    match &state.summary {
        Some(s) => out.push_str(&summary(s)),
        None if state.loading => out.push_str("Loading...\n"),
        None => out.push_str("No dashboard data yet\n"),
    }
    out.push('\n');
    out.push_str(&weekly_chart(&state.weekly_trend));
    out
}

pub fn error_screen(msg: &str) -> String {
    format!("Error: {}\nRun the command again to retry.", msg)
}

pub fn summary(s: &DashboardSummary) -> String {
    let w = &s.weekly_stats;
    let mut out = String::new();
    let _ = writeln!(out, "Total Spent: {}", fmt_ksh_whole(&s.total_spent));
    let _ = writeln!(
        out,
        "{} {:.1}% from last month",
        s.trend_data.direction.arrow(),
        s.trend_data.percentage
    );
    let _ = writeln!(
        out,
        "{}",
        pretty_table(
            &["This week", "Transactions", "Categories", "Daily avg"],
            vec![vec![
                fmt_ksh_whole(&w.spent),
                w.transactions.to_string(),
                w.categories.to_string(),
                fmt_ksh_whole(&w.daily_average),
            ]],
        )
    );
    out
}

/// Horizontal bars scaled to the largest week.
pub fn weekly_chart(data: &[WeeklyTrendData]) -> String {
    let mut out = String::from("Weekly Spending Trend\n");
    if data.is_empty() {
        out.push_str("No trend data");
        return out;
    }
    let max = data
        .iter()
        .map(|w| w.total_spent)
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = data.iter().map(|w| w.week_start.len()).max().unwrap_or(0);
    for w in data {
        let _ = writeln!(
            out,
            "{:<lw$}  {:<bw$}  {} ({} tx)",
            w.week_start,
            "█".repeat(bar_len(w.total_spent, max)),
            fmt_ksh_whole(&w.total_spent),
            w.transaction_count,
            lw = label_width,
            bw = BAR_WIDTH,
        );
    }
    out
}

fn bar_len(value: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0);
    ((ratio * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
}

pub fn today(t: &TodayStats) -> String {
    format!(
        "Today: {} across {} transactions in {} categories",
        fmt_ksh_whole(&t.today_total),
        t.today_transactions,
        t.today_categories
    )
}

pub fn week_breakdown(w: &WeekBreakdown) -> String {
    let mut out = format!("This week: {}\n", fmt_ksh_whole(&w.week_total));
    let days = w
        .daily_breakdown
        .iter()
        .map(|d| {
            vec![
                d.day_name.clone().unwrap_or_else(|| fmt_date(&d.date)),
                fmt_ksh_whole(&d.amount),
                d.transaction_count.to_string(),
            ]
        })
        .collect();
    let _ = writeln!(
        out,
        "{}",
        pretty_table(&["Day", "Spent", "Transactions"], days)
    );
    let cats = w
        .category_breakdown
        .iter()
        .map(|c| {
            vec![
                c.category_name.clone(),
                fmt_ksh_whole(&c.amount),
                format!("{:.1}%", c.percentage),
            ]
        })
        .collect();
    let _ = write!(
        out,
        "{}",
        pretty_table(&["Category", "Spent", "Share"], cats)
    );
    out
}

pub fn comparison(c: &SpendingComparison) -> String {
    fn row(label: &str, c: &Comparison) -> Vec<String> {
        vec![
            label.to_string(),
            fmt_ksh_whole(&c.current),
            fmt_ksh_whole(&c.previous),
            format!("{} {:.1}%", c.trend.arrow(), c.percentage_change),
        ]
    }
    pretty_table(
        &["Period", "Current", "Previous", "Change"],
        vec![
            row("Week vs last", &c.this_week_vs_last),
            row("Month vs last", &c.this_month_vs_last),
        ],
    )
    .to_string()
}
