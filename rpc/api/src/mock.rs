// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

//! In memory node and wallet, recording every call it receives.

use crate::{
    AbiJsonToBinRequest, AbiJsonToBinResult, ChainApi, ChainInfo, PushTransactionRequest,
    PushTransactionResult, RpcError, RpcResult, SignedTransaction, WalletApi,
};
use parking_lot::Mutex;
use serde_json::json;

pub const MOCK_CHAIN_ID: &str = "cf057bbfb72640471fd910bcb67639c22df9f92470936cddc1ade0e2f2e7dc4f";
pub const MOCK_HEAD_BLOCK_ID: &str =
    "0000002a1b2c3d4e5f60718293a4b5c6d7e8f90112233445566778899aabbccd";
pub const MOCK_HEAD_BLOCK_TIME: &str = "2018-06-01T12:00:00.000";
pub const MOCK_TRANSACTION_ID: &str =
    "6f0c1e3dd6e7a5b5d1a6c5d1b2e0b3f2a9c4d8e7f6a5b4c3d2e1f0a9b8c7d6e5";

#[derive(Default)]
struct MockState {
    calls: Vec<String>,
    abi_requests: Vec<AbiJsonToBinRequest>,
    push_requests: Vec<PushTransactionRequest>,
    signed_with: Vec<String>,
}

pub struct MockChainService {
    info: ChainInfo,
    wallet_keys: Vec<String>,
    state: Mutex<MockState>,
}

impl Default for MockChainService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainService {
    pub fn new() -> Self {
        Self {
            info: ChainInfo {
                server_version: "mock".to_string(),
                chain_id: MOCK_CHAIN_ID.to_string(),
                head_block_num: 42,
                head_block_id: MOCK_HEAD_BLOCK_ID.to_string(),
                head_block_time: MOCK_HEAD_BLOCK_TIME.to_string(),
                head_block_producer: "eosio".to_string(),
                ..ChainInfo::default()
            },
            wallet_keys: vec![],
            state: Mutex::new(MockState::default()),
        }
    }

    /// Keys the mock wallet reports as unlocked; all of them are required to sign.
    pub fn with_wallet_keys(mut self, keys: Vec<String>) -> Self {
        self.wallet_keys = keys;
        self
    }

    /// Names of the called methods, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn abi_requests(&self) -> Vec<AbiJsonToBinRequest> {
        self.state.lock().abi_requests.clone()
    }

    pub fn push_requests(&self) -> Vec<PushTransactionRequest> {
        self.state.lock().push_requests.clone()
    }

    /// Keys passed to `sign_transaction`.
    pub fn signed_with(&self) -> Vec<String> {
        self.state.lock().signed_with.clone()
    }

    fn record(&self, method: &str) {
        self.state.lock().calls.push(method.to_string());
    }
}

impl ChainApi for MockChainService {
    fn get_info(&self) -> RpcResult<ChainInfo> {
        self.record("get_info");
        Ok(self.info.clone())
    }

    fn abi_json_to_bin(&self, request: AbiJsonToBinRequest) -> RpcResult<AbiJsonToBinResult> {
        self.record("abi_json_to_bin");
        let binargs = hex::encode(request.args.to_string());
        self.state.lock().abi_requests.push(request);
        Ok(AbiJsonToBinResult { binargs })
    }

    fn get_required_keys(
        &self,
        _transaction: &SignedTransaction,
        available_keys: Vec<String>,
    ) -> RpcResult<Vec<String>> {
        self.record("get_required_keys");
        Ok(available_keys)
    }

    fn push_transaction(
        &self,
        request: PushTransactionRequest,
    ) -> RpcResult<PushTransactionResult> {
        self.record("push_transaction");
        if request.transaction.actions.is_empty() {
            return Err(RpcError::from_response(
                "/v1/chain/push_transaction",
                500,
                r#"{"code":500,"message":"Internal Service Error","error":{"name":"tx_no_action","what":"transaction must have at least one action","details":[]}}"#,
            ));
        }
        let processed = json!({
            "id": MOCK_TRANSACTION_ID,
            "receipt": {"status": "executed"},
            "action_traces": request.transaction.actions,
        });
        self.state.lock().push_requests.push(request);
        Ok(PushTransactionResult {
            transaction_id: MOCK_TRANSACTION_ID.to_string(),
            processed,
        })
    }
}

impl WalletApi for MockChainService {
    fn get_public_keys(&self) -> RpcResult<Vec<String>> {
        self.record("get_public_keys");
        Ok(self.wallet_keys.clone())
    }

    fn sign_transaction(
        &self,
        transaction: &SignedTransaction,
        keys: &[String],
        _chain_id: &str,
    ) -> RpcResult<SignedTransaction> {
        self.record("sign_transaction");
        let mut signed = transaction.clone();
        for key in keys {
            signed.signatures.push(format!("SIG_K1_mock_{}", key));
        }
        self.state.lock().signed_with.extend_from_slice(keys);
        Ok(signed)
    }
}
