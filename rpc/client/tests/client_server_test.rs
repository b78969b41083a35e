// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use teos_rpc_api::{
    AbiJsonToBinRequest, ChainApi, PushTransactionRequest, RpcError, SignedTransaction, WalletApi,
};
use teos_rpc_client::RpcClient;

const CHAIN_ID: &str = "cf057bbfb72640471fd910bcb67639c22df9f92470936cddc1ade0e2f2e7dc4f";

async fn get_info() -> Json<Value> {
    Json(json!({
        "server_version": "0f6695cb",
        "chain_id": CHAIN_ID,
        "head_block_num": 7,
        "head_block_id": "00000007aaaaaaaabbbbbbbbccccccccddddddddeeeeeeeeffffffff00000000",
        "head_block_time": "2018-06-01T12:00:00.000",
        "head_block_producer": "eosio"
    }))
}

async fn abi_json_to_bin(Json(request): Json<Value>) -> Json<Value> {
    Json(json!({ "binargs": hex_of(&request["args"]["name"]) }))
}

fn hex_of(value: &Value) -> String {
    value
        .as_str()
        .unwrap_or_default()
        .bytes()
        .map(|b| format!("{:02x}", b))
        .collect()
}

async fn push_transaction(Json(_request): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "code": 500,
            "message": "Internal Service Error",
            "error": {
                "code": 3090003,
                "name": "unsatisfied_authorization",
                "what": "Provided keys, permissions, and delays do not satisfy declared authorizations",
                "details": [{"message": "transaction declares authority '{\"actor\":\"alice\",\"permission\":\"active\"}', but does not have signatures for it."}]
            }
        })),
    )
}

async fn get_public_keys() -> Json<Value> {
    Json(json!(["EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV"]))
}

async fn sign_transaction(Json(params): Json<Value>) -> Json<Value> {
    let mut transaction = params[0].clone();
    assert_eq!(params[2], json!(CHAIN_ID));
    transaction["signatures"] = json!(["SIG_K1_test"]);
    Json(transaction)
}

fn start_server() -> SocketAddr {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let app = Router::new()
                .route("/v1/chain/get_info", post(get_info))
                .route("/v1/chain/abi_json_to_bin", post(abi_json_to_bin))
                .route("/v1/chain/push_transaction", post(push_transaction))
                .route("/v1/wallet/get_public_keys", post(get_public_keys))
                .route("/v1/wallet/sign_transaction", post(sign_transaction));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().unwrap()
}

fn client(addr: SocketAddr) -> RpcClient {
    let url = format!("http://{}/", addr);
    RpcClient::new(url.clone(), url, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_chain_calls() {
    let client = client(start_server());
    assert!(!client.node_url().ends_with('/'));
    assert_eq!(client.node_url(), client.wallet_url());
    let info = client.get_info().unwrap();
    assert_eq!(info.chain_id, CHAIN_ID);
    assert_eq!(info.head_block_num, 7);

    let bin = client
        .abi_json_to_bin(AbiJsonToBinRequest {
            code: "eosio".to_string(),
            action: "newaccount".to_string(),
            args: json!({"name": "bob"}),
        })
        .unwrap();
    assert_eq!(bin.binargs, "626f62");
}

#[test]
fn test_node_error_surfaces_what_and_detail() {
    let client = client(start_server());
    let request = PushTransactionRequest::from(SignedTransaction::default());
    let err = client.push_transaction(request).unwrap_err();
    assert!(matches!(err, RpcError::Node { status: 500, .. }));
    assert!(err
        .to_string()
        .starts_with("Provided keys, permissions, and delays do not satisfy declared authorizations: transaction declares authority"));
}

#[test]
fn test_wallet_calls() {
    let client = client(start_server());
    let keys = client.get_public_keys().unwrap();
    assert_eq!(keys.len(), 1);
    let signed = client
        .sign_transaction(&SignedTransaction::default(), &keys, CHAIN_ID)
        .unwrap();
    assert_eq!(signed.signatures, vec!["SIG_K1_test".to_string()]);
}

#[test]
fn test_unknown_path_is_status_error() {
    let addr = start_server();
    let url = format!("http://{}/missing", addr);
    let client = RpcClient::new(url.clone(), url, Duration::from_secs(5)).unwrap();
    let err = client.get_info().unwrap_err();
    assert!(matches!(err, RpcError::Status { status: 404, .. }));
}

#[test]
fn test_connection_refused_is_transport_error() {
    let client = RpcClient::new(
        "http://127.0.0.1:1".to_string(),
        "http://127.0.0.1:1".to_string(),
        Duration::from_secs(1),
    )
    .unwrap();
    assert!(matches!(
        client.get_info(),
        Err(RpcError::Transport { .. })
    ));
}
