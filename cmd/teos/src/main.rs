// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use scmd::{CmdContext, OutputFormat};
use std::sync::Arc;
use teos_cmd::{add_command, CliState, TeosOpt};
use teos_logger::prelude::*;
use teos_rpc_client::RpcClient;

fn run() -> Result<()> {
    let logger_handle = teos_logger::init();
    let stderr_handle = logger_handle.clone();
    let context = CmdContext::<CliState, TeosOpt>::with_initializer(move |opt| -> Result<CliState> {
        let config = teos_config::load_config_with_opt(opt)?;
        if config.logger.level() > logger_handle.level() {
            logger_handle.update_level(config.logger.level())?;
        }
        if let Some(log_path) = config.logger.log_path() {
            logger_handle.enable_file(log_path.to_path_buf())?;
        }
        info!("Teos opts: {}", opt);
        info!("Node: {}, wallet: {}", config.rpc.node_url(), config.rpc.wallet_url());
        let client = RpcClient::new(
            config.rpc.node_url(),
            config.rpc.wallet_url(),
            config.rpc.timeout(),
        )?;
        Ok(CliState::with_client(Arc::new(config), client))
    })
    .with_output_format_action(move |format| {
        // stderr carries only the json result under --both.
        if format == OutputFormat::Both {
            if let Err(e) = stderr_handle.disable_stderr() {
                println!("disable stderr log failed: {}", e);
            }
        }
    });
    add_command(context).exec()
}

fn main() {
    // exec has already printed the error.
    if run().is_err() {
        std::process::exit(1);
    }
}
