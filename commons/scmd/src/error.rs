// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdError {
    #[error(transparent)]
    ClapError(#[from] clap::Error),
    #[error("Invalid command: {cmd}\n{help}")]
    InvalidCommand { cmd: String, help: String },
    #[error("{help}")]
    NeedHelp { help: String },
}
