// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Overrides;
use clap::{Arg, ArgAction, ArgMatches, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendtracker")
        .version(crate_version!())
        .about("Record expenses and view weekly spending")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Base URL of the spendingtracker API"),
        )
        .arg(
            Arg::new("spending-prefix")
                .long("spending-prefix")
                .global(true)
                .help("Path prefix of the transaction endpoints (\"\" for bare paths)"),
        )
        .arg(
            Arg::new("dashboard-prefix")
                .long("dashboard-prefix")
                .global(true)
                .help("Path prefix of the dashboard endpoints (\"\" for bare paths)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List this week's expenses"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(json_flags(
                    Command::new("list").about("List known categories"),
                )),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Spending dashboard")
                .subcommand(Command::new("show").about("Summary and weekly trend (default)"))
                .subcommand(json_flags(Command::new("today").about("Today's totals")))
                .subcommand(json_flags(
                    Command::new("week").about("This week by day and category"),
                ))
                .subcommand(json_flags(
                    Command::new("compare").about("This week and month against the previous"),
                )),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("init").about("Write the effective configuration to the config file")),
        )
}

pub fn overrides(m: &ArgMatches) -> Overrides {
    Overrides {
        base_url: m.get_one::<String>("api-url").cloned(),
        spending_prefix: m.get_one::<String>("spending-prefix").cloned(),
        dashboard_prefix: m.get_one::<String>("dashboard-prefix").cloned(),
        timeout_secs: m.get_one::<u64>("timeout").copied(),
    }
}
