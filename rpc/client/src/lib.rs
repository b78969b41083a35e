// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use teos_logger::prelude::*;
use teos_rpc_api::{
    AbiJsonToBinRequest, AbiJsonToBinResult, ChainApi, ChainInfo, GetRequiredKeysRequest,
    GetRequiredKeysResult, PushTransactionRequest, PushTransactionResult, RpcError, RpcResult,
    SignedTransaction, WalletApi,
};
use tokio::runtime::Runtime;

const GET_INFO: &str = "/v1/chain/get_info";
const ABI_JSON_TO_BIN: &str = "/v1/chain/abi_json_to_bin";
const GET_REQUIRED_KEYS: &str = "/v1/chain/get_required_keys";
const PUSH_TRANSACTION: &str = "/v1/chain/push_transaction";
const WALLET_GET_PUBLIC_KEYS: &str = "/v1/wallet/get_public_keys";
const WALLET_SIGN_TRANSACTION: &str = "/v1/wallet/sign_transaction";

/// Blocking http client of the node and the wallet.
pub struct RpcClient {
    node_url: String,
    wallet_url: String,
    client: Client,
    rt: Runtime,
}

impl RpcClient {
    /// `node_url` and `wallet_url` are base urls such as `http://127.0.0.1:8888`.
    pub fn new(node_url: String, wallet_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::ClientBuilder::new().timeout(timeout).build()?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            node_url: node_url.trim_end_matches('/').to_string(),
            wallet_url: wallet_url.trim_end_matches('/').to_string(),
            client,
            rt,
        })
    }

    pub fn node_url(&self) -> &str {
        self.node_url.as_str()
    }

    pub fn wallet_url(&self) -> &str {
        self.wallet_url.as_str()
    }

    fn call_rpc_blocking<R>(&self, base_url: &str, path: &str, body: Option<Value>) -> RpcResult<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", base_url, path);
        debug!(
            "rpc request: {} {}",
            url,
            body.as_ref().map(|b| b.to_string()).unwrap_or_default()
        );
        let transport_err = |e: reqwest::Error| RpcError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        };
        let (status, text) = self.rt.block_on(async {
            let mut request = self.client.post(url.as_str());
            if let Some(body) = body.as_ref() {
                request = request.json(body);
            }
            let response = request.send().await.map_err(transport_err)?;
            let status = response.status();
            let text = response.text().await.map_err(transport_err)?;
            Ok::<_, RpcError>((status, text))
        })?;
        debug!("rpc response: {} status: {} body: {}", path, status, text);
        if !status.is_success() {
            return Err(RpcError::from_response(path, status.as_u16(), text.as_str()));
        }
        serde_json::from_str(text.as_str()).map_err(|e| RpcError::InvalidResponse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn call_node<R: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> RpcResult<R> {
        self.call_rpc_blocking(self.node_url.as_str(), path, body)
    }

    fn call_wallet<R: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> RpcResult<R> {
        self.call_rpc_blocking(self.wallet_url.as_str(), path, body)
    }
}

fn to_body<T: serde::Serialize>(path: &str, value: &T) -> RpcResult<Value> {
    serde_json::to_value(value).map_err(|e| RpcError::InvalidResponse {
        path: path.to_string(),
        message: format!("encode request failed: {}", e),
    })
}

impl ChainApi for RpcClient {
    fn get_info(&self) -> RpcResult<ChainInfo> {
        self.call_node(GET_INFO, None)
    }

    fn abi_json_to_bin(&self, request: AbiJsonToBinRequest) -> RpcResult<AbiJsonToBinResult> {
        let body = to_body(ABI_JSON_TO_BIN, &request)?;
        self.call_node(ABI_JSON_TO_BIN, Some(body))
    }

    fn get_required_keys(
        &self,
        transaction: &SignedTransaction,
        available_keys: Vec<String>,
    ) -> RpcResult<Vec<String>> {
        let request = GetRequiredKeysRequest {
            transaction: transaction.clone(),
            available_keys,
        };
        let body = to_body(GET_REQUIRED_KEYS, &request)?;
        let result: GetRequiredKeysResult = self.call_node(GET_REQUIRED_KEYS, Some(body))?;
        Ok(result.required_keys)
    }

    fn push_transaction(
        &self,
        request: PushTransactionRequest,
    ) -> RpcResult<PushTransactionResult> {
        let body = to_body(PUSH_TRANSACTION, &request)?;
        self.call_node(PUSH_TRANSACTION, Some(body))
    }
}

impl WalletApi for RpcClient {
    fn get_public_keys(&self) -> RpcResult<Vec<String>> {
        self.call_wallet(WALLET_GET_PUBLIC_KEYS, None)
    }

    fn sign_transaction(
        &self,
        transaction: &SignedTransaction,
        keys: &[String],
        chain_id: &str,
    ) -> RpcResult<SignedTransaction> {
        let body = json!([
            to_body(WALLET_SIGN_TRANSACTION, transaction)?,
            keys,
            chain_id
        ]);
        self.call_wallet(WALLET_SIGN_TRANSACTION, Some(body))
    }
}
