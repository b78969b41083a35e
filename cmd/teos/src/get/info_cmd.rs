// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::cli_state::CliState;
use anyhow::Result;
use clap::Parser;
use scmd::{CommandAction, ExecContext};
use teos_config::TeosOpt;
use teos_logger::prelude::*;
use teos_rpc_api::ChainInfo;

/// Get current blockchain information
#[derive(Debug, Parser)]
#[clap(name = "info")]
pub struct GetInfoOpt {}

pub struct GetInfoCommand;

impl CommandAction for GetInfoCommand {
    type State = CliState;
    type GlobalOpt = TeosOpt;
    type Opt = GetInfoOpt;
    type ReturnItem = ChainInfo;

    fn run(&self, ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>) -> Result<ChainInfo> {
        debug!("get info from {}", ctx.state().config().rpc.node_url());
        Ok(ctx.state().chain().get_info()?)
    }
}
