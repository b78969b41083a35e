// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::cli_state::CliState;
use crate::create::required_arg;
use crate::helper::{print_request_arg, send_actions};
use crate::view::TransactionView;
use anyhow::{ensure, format_err, Result};
use clap::Parser;
use scmd::{CommandAction, ExecContext};
use serde::{Deserialize, Serialize};
use teos_config::TeosOpt;
use teos_logger::prelude::*;
use teos_rpc_api::{AbiJsonToBinRequest, Action};
use teos_transaction_builder::{
    new_account_args, parse_permissions, TransactionOptions, DEFAULT_EXPIRATION_SECS,
    NEW_ACCOUNT_ACTION, SYSTEM_ACCOUNT,
};

/// Create a new account on the blockchain
#[derive(Debug, Parser)]
#[clap(name = "account")]
pub struct CreateAccountOpt {
    #[clap(value_name = "creator", conflicts_with = "creator")]
    /// The name of the account creating the new account.
    creator_arg: Option<String>,

    #[clap(value_name = "name", conflicts_with = "name")]
    /// The name of the new account.
    name_arg: Option<String>,

    #[clap(value_name = "ownerKey", conflicts_with = "owner-key")]
    /// The owner public key for the new account.
    owner_key_arg: Option<String>,

    #[clap(value_name = "activeKey", conflicts_with = "active-key")]
    /// The active public key for the new account.
    active_key_arg: Option<String>,

    #[clap(short = 'c', long)]
    creator: Option<String>,

    #[clap(short = 'n', long)]
    name: Option<String>,

    #[clap(name = "owner-key", short = 'o', long = "ownerKey")]
    owner_key: Option<String>,

    #[clap(name = "active-key", short = 'a', long = "activeKey")]
    active_key: Option<String>,

    #[clap(short = 'p', long)]
    /// An account and permission level to authorize, as in 'account@permission'.
    permission: Option<String>,

    #[clap(short = 'x', long, default_value_t = DEFAULT_EXPIRATION_SECS)]
    /// The time in seconds before a transaction expires.
    expiration: u64,

    #[clap(short = 's', long = "skip-sign")]
    /// Specify that unlocked wallet keys should not be used to sign the transaction.
    skip_sign: bool,

    #[clap(short = 'd', long = "dont-broadcast")]
    /// Don't broadcast the transaction to the network, just print it.
    dont_broadcast: bool,

    #[clap(short = 'f', long = "force-unique")]
    /// Force the transaction to be unique, at the cost of extra bandwidth.
    force_unique: bool,

    #[clap(long = "max-cpu-usage", default_value_t = 0)]
    /// Upper limit on the milliseconds of cpu usage budget, 0 means no limit.
    max_cpu_usage: u64,

    #[clap(long = "max-net-usage", default_value_t = 0)]
    /// Upper limit on the net usage budget in bytes, 0 means no limit.
    max_net_usage: u64,

    #[clap(long)]
    /// A json request, overriding every other argument.
    jarg: Option<String>,
}

impl CreateAccountOpt {
    pub fn to_request(&self) -> Result<CreateAccountRequest> {
        if let Some(jarg) = self.jarg.as_ref() {
            return CreateAccountRequest::from_json(jarg);
        }
        let request = CreateAccountRequest {
            creator: required_arg("creator", &self.creator_arg, &self.creator)?,
            name: required_arg("name", &self.name_arg, &self.name)?,
            owner_key: required_arg("ownerKey", &self.owner_key_arg, &self.owner_key)?,
            active_key: required_arg("activeKey", &self.active_key_arg, &self.active_key)?,
            options: TransactionOptions {
                permission: self.permission.clone().unwrap_or_default(),
                expiration: self.expiration,
                skip_sign: self.skip_sign,
                dont_broadcast: self.dont_broadcast,
                force_unique: self.force_unique,
                max_cpu_usage: self.max_cpu_usage,
                max_net_usage: self.max_net_usage,
            },
        };
        Ok(request)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct CreateAccountRequest {
    pub creator: String,
    pub name: String,
    #[serde(rename = "ownerKey")]
    pub owner_key: String,
    #[serde(rename = "activeKey")]
    pub active_key: String,
    #[serde(flatten)]
    pub options: TransactionOptions,
}

impl CreateAccountRequest {
    /// Decode a `--jarg` request; every field must be present.
    pub fn from_json(jarg: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(jarg)
            .map_err(|e| format_err!("invalid json request: {}", e))?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("creator", &self.creator),
            ("name", &self.name),
            ("ownerKey", &self.owner_key),
            ("activeKey", &self.active_key),
        ] {
            ensure!(!value.is_empty(), "missing required argument: {}", field);
        }
        Ok(())
    }
}

/// Create `request.name`, owned by the two keys, with `request.creator` paying.
pub fn create_account(state: &CliState, request: &CreateAccountRequest) -> Result<TransactionView> {
    request.validate()?;
    let authorization = parse_permissions(&request.options.permission, &request.creator)?;
    let info = state.chain().get_info()?;
    let args = new_account_args(
        &request.creator,
        &request.name,
        &request.owner_key,
        &request.active_key,
    );
    let bin = state.chain().abi_json_to_bin(AbiJsonToBinRequest {
        code: SYSTEM_ACCOUNT.to_string(),
        action: NEW_ACCOUNT_ACTION.to_string(),
        args,
    })?;
    let data = hex::decode(bin.binargs.as_str())
        .map_err(|e| format_err!("invalid binargs returned by node: {}", e))?;
    let action = Action {
        account: SYSTEM_ACCOUNT.to_string(),
        name: NEW_ACCOUNT_ACTION.to_string(),
        authorization,
        data,
    };
    debug!("create account {} by {}", request.name, request.creator);
    send_actions(state, &info, vec![action], &request.options)
}

pub struct CreateAccountCommand;

impl CommandAction for CreateAccountCommand {
    type State = CliState;
    type GlobalOpt = TeosOpt;
    type Opt = CreateAccountOpt;
    type ReturnItem = TransactionView;

    fn run(
        &self,
        ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>,
    ) -> Result<TransactionView> {
        let request = ctx.opt().to_request()?;
        print_request_arg(ctx.global_opt().arg, &request)?;
        create_account(ctx.state(), &request)
    }
}
