// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use teos_serde_helpers::{deserialize_hex, serialize_hex};

/// Response of `/v1/chain/get_info`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    #[serde(default)]
    pub server_version: String,
    pub chain_id: String,
    pub head_block_num: u32,
    #[serde(default)]
    pub last_irreversible_block_num: u32,
    #[serde(default)]
    pub last_irreversible_block_id: String,
    pub head_block_id: String,
    pub head_block_time: String,
    #[serde(default)]
    pub head_block_producer: String,
    #[serde(default)]
    pub virtual_block_cpu_limit: u64,
    #[serde(default)]
    pub virtual_block_net_limit: u64,
    #[serde(default)]
    pub block_cpu_limit: u64,
    #[serde(default)]
    pub block_net_limit: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PermissionLevel {
    pub actor: String,
    pub permission: String,
}

impl PermissionLevel {
    pub fn new(actor: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            permission: permission.into(),
        }
    }
}

/// An action whose arguments are already abi serialized, hex encoded on the wire.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Action {
    pub account: String,
    pub name: String,
    pub authorization: Vec<PermissionLevel>,
    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct KeyWeight {
    pub key: String,
    pub weight: u16,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PermissionLevelWeight {
    pub permission: PermissionLevel,
    pub weight: u16,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct WaitWeight {
    pub wait_sec: u32,
    pub weight: u16,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Authority {
    pub threshold: u32,
    pub keys: Vec<KeyWeight>,
    pub accounts: Vec<PermissionLevelWeight>,
    pub waits: Vec<WaitWeight>,
}

impl Authority {
    /// Threshold 1, satisfied by the single given key.
    pub fn single_key(key: impl Into<String>) -> Self {
        Self {
            threshold: 1,
            keys: vec![KeyWeight {
                key: key.into(),
                weight: 1,
            }],
            accounts: vec![],
            waits: vec![],
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub expiration: String,
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    pub max_net_usage_words: u32,
    pub max_cpu_usage_ms: u8,
    pub delay_sec: u32,
    pub context_free_actions: Vec<Action>,
    pub actions: Vec<Action>,
    #[serde(default)]
    pub transaction_extensions: Vec<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub context_free_data: Vec<String>,
}

impl From<Transaction> for SignedTransaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction,
            signatures: vec![],
            context_free_data: vec![],
        }
    }
}

/// Body of `/v1/chain/push_transaction`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PushTransactionRequest {
    pub signatures: Vec<String>,
    pub compression: String,
    pub packed_context_free_data: String,
    pub transaction: Transaction,
}

impl From<SignedTransaction> for PushTransactionRequest {
    fn from(signed: SignedTransaction) -> Self {
        Self {
            signatures: signed.signatures,
            compression: "none".to_string(),
            packed_context_free_data: String::new(),
            transaction: signed.transaction,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PushTransactionResult {
    pub transaction_id: String,
    pub processed: Value,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct AbiJsonToBinRequest {
    pub code: String,
    pub action: String,
    pub args: Value,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct AbiJsonToBinResult {
    pub binargs: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct GetRequiredKeysRequest {
    pub transaction: SignedTransaction,
    pub available_keys: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct GetRequiredKeysResult {
    pub required_keys: Vec<String>,
}
