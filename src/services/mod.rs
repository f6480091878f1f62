// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One service per remote resource. Each method is exactly one HTTP call.

pub mod dashboard;
pub mod transactions;

pub use dashboard::DashboardService;
pub use transactions::TransactionService;
