// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ctx;
use crate::config::config_path;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(ctx: &Ctx, m: &clap::ArgMatches) -> Result<()> {
    let path = config_path()?;
    match m.subcommand() {
        Some(("init", _)) => {
            ctx.config.save(&path)?;
            println!("Configuration written to {}", path.display());
        }
        _ => {
            let c = &ctx.config;
            let rows = vec![
                vec!["config file".into(), path.display().to_string()],
                vec!["base url".into(), c.base_url.clone()],
                vec!["spending prefix".into(), c.spending_prefix.clone()],
                vec!["dashboard prefix".into(), c.dashboard_prefix.clone()],
                vec![
                    "timeout".into(),
                    c.timeout_secs
                        .map(|s| format!("{}s", s))
                        .unwrap_or_else(|| "none".into()),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
    }
    Ok(())
}
