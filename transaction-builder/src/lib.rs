// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

//! Assembles unsigned transactions from chain state and typed options.

use anyhow::{ensure, format_err, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use teos_logger::prelude::*;
use teos_rpc_api::{Action, Authority, ChainInfo, PermissionLevel, Transaction};
use teos_serde_helpers::{deserialize_bool, deserialize_from_string_or_value};


pub const SYSTEM_ACCOUNT: &str = "eosio";
pub const NEW_ACCOUNT_ACTION: &str = "newaccount";
pub const NULL_ACCOUNT: &str = "eosio.null";
pub const NONCE_ACTION: &str = "nonce";
pub const DEFAULT_PERMISSION: &str = "active";
pub const DEFAULT_EXPIRATION_SECS: u64 = 30;

const BLOCK_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Signing and broadcasting controls shared by every transaction command.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct TransactionOptions {
    /// Comma separated `account@permission` list; empty means the default authority.
    pub permission: String,
    /// Seconds after the head block time until the transaction expires.
    #[serde(deserialize_with = "deserialize_from_string_or_value")]
    pub expiration: u64,
    #[serde(rename = "skip-sign", deserialize_with = "deserialize_bool")]
    pub skip_sign: bool,
    #[serde(
        rename = "dont-broadcast",
        deserialize_with = "deserialize_bool"
    )]
    pub dont_broadcast: bool,
    #[serde(
        rename = "force-unique",
        deserialize_with = "deserialize_bool"
    )]
    pub force_unique: bool,
    /// Milliseconds, 0 means no limit.
    #[serde(
        rename = "max-cpu-usage",
        deserialize_with = "deserialize_from_string_or_value"
    )]
    pub max_cpu_usage: u64,
    /// Bytes, 0 means no limit.
    #[serde(
        rename = "max-net-usage",
        deserialize_with = "deserialize_from_string_or_value"
    )]
    pub max_net_usage: u64,
}

impl Default for TransactionOptions {
    fn default() -> Self {
        Self {
            permission: String::new(),
            expiration: DEFAULT_EXPIRATION_SECS,
            skip_sign: false,
            dont_broadcast: false,
            force_unique: false,
            max_cpu_usage: 0,
            max_net_usage: 0,
        }
    }
}

/// Arguments of `eosio::newaccount`, with one single key authority per permission.
pub fn new_account_args(creator: &str, name: &str, owner_key: &str, active_key: &str) -> Value {
    json!({
        "creator": creator,
        "name": name,
        "owner": Authority::single_key(owner_key),
        "active": Authority::single_key(active_key),
    })
}

/// Parse `alice@owner,bob` into permission levels.
/// A missing permission means `active`, an empty list means `default_actor@active`.
pub fn parse_permissions(permission: &str, default_actor: &str) -> Result<Vec<PermissionLevel>> {
    if permission.trim().is_empty() {
        return Ok(vec![PermissionLevel::new(default_actor, DEFAULT_PERMISSION)]);
    }
    permission
        .split(',')
        .map(str::trim)
        .map(|level| {
            let (actor, permission) = match level.split_once('@') {
                Some((actor, permission)) => (actor.trim(), permission.trim()),
                None => (level, DEFAULT_PERMISSION),
            };
            ensure!(
                !actor.is_empty() && !permission.is_empty(),
                "invalid permission level: {:?}",
                level
            );
            Ok(PermissionLevel::new(actor, permission))
        })
        .collect()
}

/// `(ref_block_num, ref_block_prefix)` of a block id.
pub fn reference_block(block_id: &str) -> Result<(u16, u32)> {
    let bytes = hex::decode(block_id)
        .map_err(|e| format_err!("invalid block id {:?}: {}", block_id, e))?;
    ensure!(
        bytes.len() >= 12,
        "block id {:?} is too short, expect at least 12 bytes",
        block_id
    );
    let block_num = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let prefix = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    Ok((block_num as u16, prefix))
}

/// `head_block_time` plus `secs`, in the node's `%Y-%m-%dT%H:%M:%S` form.
pub fn expiration_time(head_block_time: &str, secs: u64) -> Result<String> {
    let head = NaiveDateTime::parse_from_str(head_block_time, BLOCK_TIME_FORMAT)
        .map_err(|e| format_err!("invalid head block time {:?}: {}", head_block_time, e))?;
    ensure!(
        secs <= u64::from(u32::MAX),
        "expiration {} seconds is too large",
        secs
    );
    let secs = secs as i64;
    let expiration = head
        .checked_add_signed(chrono::Duration::seconds(secs))
        .ok_or_else(|| format_err!("expiration {} seconds overflows", secs))?;
    Ok(expiration.format(EXPIRATION_FORMAT).to_string())
}

/// Context free `eosio.null::nonce` action making otherwise identical transactions distinct.
pub fn nonce_action(now: DateTime<Utc>) -> Action {
    Action {
        account: NULL_ACCOUNT.to_string(),
        name: NONCE_ACTION.to_string(),
        authorization: vec![],
        data: now.timestamp_micros().to_le_bytes().to_vec(),
    }
}

pub fn build_transaction(
    info: &ChainInfo,
    actions: Vec<Action>,
    options: &TransactionOptions,
) -> Result<Transaction> {
    build_transaction_at(info, actions, options, Utc::now())
}

pub fn build_transaction_at(
    info: &ChainInfo,
    actions: Vec<Action>,
    options: &TransactionOptions,
    now: DateTime<Utc>,
) -> Result<Transaction> {
    let (ref_block_num, ref_block_prefix) = reference_block(info.head_block_id.as_str())?;
    let max_cpu_usage_ms = u8::try_from(options.max_cpu_usage).map_err(|_| {
        format_err!(
            "max-cpu-usage {} ms exceeds the limit of {} ms",
            options.max_cpu_usage,
            u8::MAX
        )
    })?;
    let net_words = options.max_net_usage / 8 + u64::from(options.max_net_usage % 8 != 0);
    let max_net_usage_words = u32::try_from(net_words)
        .map_err(|_| format_err!("max-net-usage {} is too large", options.max_net_usage))?;
    let context_free_actions = if options.force_unique {
        vec![nonce_action(now)]
    } else {
        vec![]
    };
    let transaction = Transaction {
        expiration: expiration_time(info.head_block_time.as_str(), options.expiration)?,
        ref_block_num,
        ref_block_prefix,
        max_net_usage_words,
        max_cpu_usage_ms,
        delay_sec: 0,
        context_free_actions,
        actions,
        transaction_extensions: vec![],
    };
    debug!(
        "build transaction ref_block_num: {}, expiration: {}",
        transaction.ref_block_num, transaction.expiration
    );
    Ok(transaction)
}
