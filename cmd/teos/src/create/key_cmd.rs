// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::cli_state::CliState;
use crate::helper::print_request_arg;
use crate::view::KeyPairView;
use anyhow::{format_err, Result};
use clap::Parser;
use scmd::{CommandAction, ExecContext};
use serde::{Deserialize, Serialize};
use teos_config::TeosOpt;

pub const DEFAULT_KEY_NAME: &str = "default";

/// Create a new keypair and print the public and private keys
#[derive(Debug, Parser)]
#[clap(name = "key")]
pub struct CreateKeyOpt {
    #[clap(value_name = "name", conflicts_with = "name")]
    /// The name of the new key.
    name_arg: Option<String>,

    #[clap(short = 'n', long)]
    name: Option<String>,

    #[clap(long)]
    /// A json request, overriding every other argument.
    jarg: Option<String>,
}

impl CreateKeyOpt {
    pub fn to_request(&self) -> Result<CreateKeyRequest> {
        if let Some(jarg) = self.jarg.as_ref() {
            return CreateKeyRequest::from_json(jarg);
        }
        let name = self
            .name_arg
            .as_ref()
            .or(self.name.as_ref())
            .cloned()
            .unwrap_or_else(|| DEFAULT_KEY_NAME.to_string());
        Ok(CreateKeyRequest { name })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct CreateKeyRequest {
    pub name: String,
}

impl Default for CreateKeyRequest {
    fn default() -> Self {
        Self {
            name: DEFAULT_KEY_NAME.to_string(),
        }
    }
}

impl CreateKeyRequest {
    pub fn from_json(jarg: &str) -> Result<Self> {
        serde_json::from_str(jarg).map_err(|e| format_err!("invalid json request: {}", e))
    }
}

/// A fresh keypair labelled with `request.name`; the name is only echoed back.
pub fn create_key(request: &CreateKeyRequest) -> KeyPairView {
    let keypair = teos_crypto::random_keypair();
    KeyPairView {
        name: request.name.clone(),
        private_key: keypair.private_key.to_wif(),
        public_key: keypair.public_key.to_legacy_string(),
    }
}

pub struct CreateKeyCommand;

impl CommandAction for CreateKeyCommand {
    type State = CliState;
    type GlobalOpt = TeosOpt;
    type Opt = CreateKeyOpt;
    type ReturnItem = KeyPairView;

    fn run(&self, ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>) -> Result<KeyPairView> {
        let request = ctx.opt().to_request()?;
        print_request_arg(ctx.global_opt().arg, &request)?;
        Ok(create_key(&request))
    }
}
