// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendtracker::{cli, commands, config::Config};

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let matches = cli::build_cli().get_matches();
    let config = Config::load(&cli::overrides(&matches))?;
    let ctx = commands::Ctx::new(config)?;

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&ctx, sub).await?,
        Some(("category", sub)) => commands::categories::handle(&ctx, sub).await?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ctx, sub).await?,
        Some(("config", sub)) => commands::config::handle(&ctx, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
