// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ctx;
use crate::form::TransactionForm;
use crate::stores::TransactionStore;
use crate::utils::maybe_print_json;
use crate::views::{transaction_line, transaction_list};
use anyhow::{Context, Result};

pub async fn handle(ctx: &Ctx, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ctx, sub).await?,
        Some(("list", sub)) => list(ctx, sub).await?,
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> TransactionForm {
    let get = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    TransactionForm::new(get("amount"), get("category")).with_note(get("note"))
}

async fn add(ctx: &Ctx, sub: &clap::ArgMatches) -> Result<()> {
    let form = form_from_args(sub);
    for line in record(ctx, &form).await? {
        println!("{}", line);
    }
    Ok(())
}

/// Submits `form` and returns the lines to show the user. Category novelty
/// is only reported when the known names could be loaded first.
pub async fn record(ctx: &Ctx, form: &TransactionForm) -> Result<Vec<String>> {
    let req = form.submit()?;
    let store = TransactionStore::new(ctx.transaction_service());
    let categories_known = store.load_categories().await.is_ok();
    let outcome = store
        .add(&req)
        .await
        .context("Failed to add transaction. Please try again.")?;
    let mut lines = vec![format!("Recorded {}", transaction_line(&outcome.transaction))];
    if !categories_known {
        lines.push(
            "Warning: categories could not be loaded; cannot tell if the category is new".into(),
        );
    } else if outcome.is_new_category {
        lines.push(format!("New category '{}'", req.category_name));
    }
    Ok(lines)
}

async fn list(ctx: &Ctx, sub: &clap::ArgMatches) -> Result<()> {
    let store = TransactionStore::new(ctx.transaction_service());
    if let Err(e) = store.load().await {
        let msg = store.error().unwrap_or_else(|| e.to_string());
        return Err(anyhow::Error::new(e).context(msg));
    }
    let data = store.transactions();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", transaction_list("This Week's Expenses", &data));
    }
    Ok(())
}
