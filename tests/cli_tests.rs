// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendtracker::{Error, cli, commands::transactions::form_from_args};

#[test]
fn tx_add_args_build_request() {
    let matches = cli::build_cli().get_matches_from([
        "spendtracker",
        "tx",
        "add",
        "--amount",
        "50.00",
        "--category",
        " Food ",
        "--note",
        "lunch",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            let req = form_from_args(add_m).submit().unwrap();
            assert_eq!(req.amount, Decimal::new(5000, 2));
            assert_eq!(req.category_name, "Food");
            assert_eq!(req.note.as_deref(), Some("lunch"));
        } else {
            panic!("no add subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn empty_category_is_rejected_before_sending() {
    let matches = cli::build_cli().get_matches_from([
        "spendtracker", "tx", "add", "--amount", "10", "--category", "",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, add_m) = tx_m.subcommand().unwrap();
    assert!(matches!(
        form_from_args(add_m).submit(),
        Err(Error::Validation(_))
    ));
}

#[test]
fn global_flags_become_overrides() {
    let matches = cli::build_cli().get_matches_from([
        "spendtracker",
        "dashboard",
        "--api-url",
        "http://api.local:9000",
        "--spending-prefix",
        "",
        "--timeout",
        "3",
    ]);
    let o = cli::overrides(&matches);
    assert_eq!(o.base_url.as_deref(), Some("http://api.local:9000"));
    assert_eq!(o.spending_prefix.as_deref(), Some(""));
    assert_eq!(o.dashboard_prefix, None);
    assert_eq!(o.timeout_secs, Some(3));
}
