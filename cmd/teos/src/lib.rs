// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use scmd::{CmdContext, Command};

pub mod cli_state;
pub mod create;
pub mod get;
pub mod helper;
pub mod view;

pub use cli_state::CliState;
pub use create::{create_account, create_key, CreateAccountRequest, CreateKeyRequest};
pub use teos_config::TeosOpt;
pub use teos_transaction_builder::TransactionOptions;

pub fn add_command(context: CmdContext<CliState, TeosOpt>) -> CmdContext<CliState, TeosOpt> {
    context
        .command(
            Command::with_name("create")
                .with_about("Create various items, on and off the blockchain")
                .subcommand(create::CreateAccountCommand)
                .subcommand(create::CreateKeyCommand),
        )
        .command(
            Command::with_name("get")
                .with_about("Retrieve various items and information from the blockchain")
                .subcommand(get::GetInfoCommand),
        )
}
