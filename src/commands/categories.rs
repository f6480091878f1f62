// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ctx;
use crate::stores::TransactionStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub async fn handle(ctx: &Ctx, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let store = TransactionStore::new(ctx.transaction_service());
        store
            .load_categories()
            .await
            .context("Failed to load categories")?;
        let names = store.categories();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &names)? {
            let data = names.into_iter().map(|n| vec![n]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
    }
    Ok(())
}
