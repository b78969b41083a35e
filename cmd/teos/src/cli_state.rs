// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use teos_config::TeosConfig;
use teos_rpc_api::{ChainApi, WalletApi};
use teos_rpc_client::RpcClient;

pub struct CliState {
    config: Arc<TeosConfig>,
    chain: Arc<dyn ChainApi>,
    wallet: Arc<dyn WalletApi>,
}

impl CliState {
    pub fn new(config: Arc<TeosConfig>, chain: Arc<dyn ChainApi>, wallet: Arc<dyn WalletApi>) -> Self {
        Self {
            config,
            chain,
            wallet,
        }
    }

    /// One http client serves both the node and the wallet endpoints.
    pub fn with_client(config: Arc<TeosConfig>, client: RpcClient) -> Self {
        let client = Arc::new(client);
        Self::new(config, client.clone(), client)
    }

    pub fn config(&self) -> &TeosConfig {
        self.config.as_ref()
    }

    pub fn chain(&self) -> &dyn ChainApi {
        self.chain.as_ref()
    }

    pub fn wallet(&self) -> &dyn WalletApi {
        self.wallet.as_ref()
    }
}
