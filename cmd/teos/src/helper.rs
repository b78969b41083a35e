// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::view::TransactionView;
use crate::CliState;
use anyhow::Result;
use serde::Serialize;
use teos_logger::prelude::*;
use teos_rpc_api::{Action, ChainInfo, SignedTransaction};
use teos_transaction_builder::{build_transaction, TransactionOptions};

/// Echo the request to stderr, for `--arg`.
pub fn print_request_arg<T: Serialize>(enabled: bool, request: &T) -> Result<()> {
    if enabled {
        eprintln!("{}", serde_json::to_string_pretty(request)?);
    }
    Ok(())
}

/// Sign with the wallet keys the node reports as required.
pub fn sign_transaction(
    state: &CliState,
    transaction: &SignedTransaction,
    chain_id: &str,
) -> Result<SignedTransaction> {
    let available_keys = state.wallet().get_public_keys()?;
    let required_keys = state
        .chain()
        .get_required_keys(transaction, available_keys)?;
    debug!("sign transaction with keys: {:?}", required_keys);
    Ok(state
        .wallet()
        .sign_transaction(transaction, &required_keys, chain_id)?)
}

/// Build, sign and push `actions`, honouring skip-sign and dont-broadcast.
pub fn send_actions(
    state: &CliState,
    info: &ChainInfo,
    actions: Vec<Action>,
    options: &TransactionOptions,
) -> Result<TransactionView> {
    let transaction = build_transaction(info, actions, options)?;
    let mut signed = SignedTransaction::from(transaction);
    if !options.skip_sign {
        signed = sign_transaction(state, &signed, info.chain_id.as_str())?;
    }
    let signed_flag = !options.skip_sign;
    if options.dont_broadcast {
        return Ok(TransactionView {
            transaction_id: None,
            signed: signed_flag,
            broadcast: false,
            transaction: serde_json::to_value(&signed)?,
        });
    }
    let result = state.chain().push_transaction(signed.into())?;
    info!("transaction {} pushed", result.transaction_id);
    Ok(TransactionView {
        transaction_id: Some(result.transaction_id),
        signed: signed_flag,
        broadcast: true,
        transaction: result.processed,
    })
}
