// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

mod info_cmd;

pub use info_cmd::*;
