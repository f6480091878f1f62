// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

pub use error::{Error, Result};
