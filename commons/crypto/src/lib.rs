// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! secp256k1 key pairs in the string encodings used by EOSIO nodes and wallets.
//! The curve arithmetic itself comes from `k256`.

pub mod hash;
pub mod key;
pub mod keygen;

#[cfg(test)]
mod tests;

pub use crate::key::{KeyPair, PrivateKey, PublicKey};
pub use crate::keygen::KeyGen;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("invalid base58 encoding: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("unexpected key length {0}")]
    InvalidLength(usize),
    #[error("unexpected wif version byte {0:#04x}")]
    InvalidVersion(u8),
    #[error("public key must start with EOS: {0}")]
    InvalidPrefix(String),
    #[error("key checksum mismatch")]
    ChecksumMismatch,
    #[error("not a valid secp256k1 key")]
    InvalidKey,
}

/// Generate a fresh key pair from the operating system rng.
pub fn random_keypair() -> KeyPair {
    KeyGen::from_os_rng().generate_keypair()
}
