// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("request {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{error}")]
    Node {
        path: String,
        status: u16,
        error: NodeError,
    },
    #[error("request {path} returned http status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("invalid response from {path}: {message}")]
    InvalidResponse { path: String, message: String },
}

impl RpcError {
    /// Classify a non-success http response, keeping the node's error body when it parses.
    pub fn from_response(path: &str, status: u16, body: &str) -> Self {
        match serde_json::from_str::<NodeError>(body) {
            Ok(error) => RpcError::Node {
                path: path.to_string(),
                status,
                error,
            },
            Err(_) => RpcError::Status {
                path: path.to_string(),
                status,
                body: body.to_string(),
            },
        }
    }
}

/// Error body returned by the node and the wallet.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct NodeError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub error: NodeErrorInfo,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct NodeErrorInfo {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub what: String,
    #[serde(default)]
    pub details: Vec<NodeErrorDetail>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct NodeErrorDetail {
    pub message: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub line_number: u32,
    #[serde(default)]
    pub method: String,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.what.is_empty() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}", self.error.what)?;
        }
        if let Some(detail) = self.error.details.first() {
            write!(f, ": {}", detail.message)?;
        }
        Ok(())
    }
}
