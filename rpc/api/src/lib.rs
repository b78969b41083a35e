// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

mod errors;
pub mod mock;
mod types;

pub use errors::{NodeError, NodeErrorDetail, NodeErrorInfo, RpcError};
pub use types::*;

pub type RpcResult<T> = std::result::Result<T, RpcError>;

/// The node's `/v1/chain` endpoints.
pub trait ChainApi: Send + Sync {
    /// Get chain id, head block and server version.
    fn get_info(&self) -> RpcResult<ChainInfo>;

    /// Serialize action arguments with the contract's abi.
    fn abi_json_to_bin(&self, request: AbiJsonToBinRequest) -> RpcResult<AbiJsonToBinResult>;

    /// The subset of `available_keys` needed to authorize `transaction`.
    fn get_required_keys(
        &self,
        transaction: &SignedTransaction,
        available_keys: Vec<String>,
    ) -> RpcResult<Vec<String>>;

    fn push_transaction(
        &self,
        request: PushTransactionRequest,
    ) -> RpcResult<PushTransactionResult>;
}

/// The wallet's `/v1/wallet` endpoints.
pub trait WalletApi: Send + Sync {
    /// Public keys of all unlocked wallets.
    fn get_public_keys(&self) -> RpcResult<Vec<String>>;

    fn sign_transaction(
        &self,
        transaction: &SignedTransaction,
        keys: &[String],
        chain_id: &str,
    ) -> RpcResult<SignedTransaction>;
}
