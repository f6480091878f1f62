// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ctx;
use crate::stores::DashboardStore;
use crate::utils::maybe_print_json;
use crate::views;
use anyhow::{Result, bail};

pub async fn handle(ctx: &Ctx, m: &clap::ArgMatches) -> Result<()> {
    let service = ctx.dashboard_service();
    match m.subcommand() {
        Some(("today", sub)) => {
            let stats = service.today().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
                println!("{}", views::today(&stats));
            }
        }
        Some(("week", sub)) => {
            let week = service.current_week().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &week)? {
                println!("{}", views::week_breakdown(&week));
            }
        }
        Some(("compare", sub)) => {
            let cmp = service.comparison().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cmp)? {
                println!("{}", views::comparison(&cmp));
            }
        }
        _ => {
            let store = DashboardStore::mount(service).await;
            let state = store.snapshot();
            if state.error.is_some() {
                eprintln!("{}", views::dashboard(&state));
                bail!("dashboard data unavailable");
            }
            println!("{}", views::dashboard(&state));
        }
    }
    Ok(())
}
