// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

mod account_cmd;
mod key_cmd;

pub use account_cmd::*;
pub use key_cmd::*;

use anyhow::{format_err, Result};

/// First of the positional value and the flag value; empty counts as missing.
fn required_arg(name: &str, positional: &Option<String>, flag: &Option<String>) -> Result<String> {
    positional
        .as_ref()
        .or(flag.as_ref())
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| format_err!("missing required argument: {}", name))
}
