// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::TeosOpt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_NODE_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_WALLET_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpcConfig {
    /// The http address (host:port) of the node.
    pub node_address: String,
    /// The http address (host:port) of the wallet service.
    pub wallet_address: String,
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            node_address: DEFAULT_NODE_ADDRESS.to_string(),
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    pub fn merge_with_opt(&mut self, opt: &TeosOpt) {
        if let Some(address) = opt.address.as_ref() {
            self.node_address = address.clone();
        }
        if let Some(wallet) = opt.wallet.as_ref() {
            self.wallet_address = wallet.clone();
        }
        if let Some(timeout) = opt.timeout {
            self.timeout_secs = timeout;
        }
    }

    pub fn node_url(&self) -> String {
        normalize_address(self.node_address.as_str())
    }

    pub fn wallet_url(&self) -> String {
        normalize_address(self.wallet_address.as_str())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `host:port` becomes `http://host:port`; an explicit scheme is kept.
pub fn normalize_address(address: &str) -> String {
    let address = address.trim().trim_end_matches('/');
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}
