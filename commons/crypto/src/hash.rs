// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub const CHECKSUM_LENGTH: usize = 4;

/// First four bytes of `sha256(sha256(data))`, the checksum used by WIF private keys.
pub fn double_sha256_checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&second[..CHECKSUM_LENGTH]);
    checksum
}

/// First four bytes of `ripemd160(data)`, the checksum used by `EOS` public keys.
pub fn ripemd160_checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Ripemd160::digest(data);
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    checksum
}
