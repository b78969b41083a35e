// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::hash::{double_sha256_checksum, ripemd160_checksum, CHECKSUM_LENGTH};
use crate::KeyError;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const PUBLIC_KEY_PREFIX: &str = "EOS";
pub const PRIVATE_KEY_LENGTH: usize = 32;
pub const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;
const WIF_VERSION: u8 = 0x80;

#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(k256::SecretKey);

impl PrivateKey {
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(k256::SecretKey::random(rng))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    /// Wallet import format: base58(0x80 || key || checksum).
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LENGTH + CHECKSUM_LENGTH);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(self.0.to_bytes().as_slice());
        let checksum = double_sha256_checksum(&payload);
        payload.extend_from_slice(&checksum);
        bs58::encode(payload).into_string()
    }

    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(wif).into_vec()?;
        if bytes.len() != 1 + PRIVATE_KEY_LENGTH + CHECKSUM_LENGTH {
            return Err(KeyError::InvalidLength(bytes.len()));
        }
        let (payload, checksum) = bytes.split_at(1 + PRIVATE_KEY_LENGTH);
        if payload[0] != WIF_VERSION {
            return Err(KeyError::InvalidVersion(payload[0]));
        }
        if double_sha256_checksum(payload) != checksum {
            return Err(KeyError::ChecksumMismatch);
        }
        let secret = k256::SecretKey::from_slice(&payload[1..]).map_err(|_| KeyError::InvalidKey)?;
        Ok(Self(secret))
    }
}

// Keep private material out of debug logs.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<elided>)")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wif())
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wif(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(k256::PublicKey);

impl PublicKey {
    pub fn to_compressed_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }

    /// Legacy `EOS`-prefixed form: EOS || base58(compressed || ripemd160 checksum).
    pub fn to_legacy_string(&self) -> String {
        let mut payload = self.to_compressed_bytes();
        let checksum = ripemd160_checksum(&payload);
        payload.extend_from_slice(&checksum);
        format!("{}{}", PUBLIC_KEY_PREFIX, bs58::encode(payload).into_string())
    }

    pub fn from_legacy_string(s: &str) -> Result<Self, KeyError> {
        let encoded = s
            .strip_prefix(PUBLIC_KEY_PREFIX)
            .ok_or_else(|| KeyError::InvalidPrefix(s.to_string()))?;
        let bytes = bs58::decode(encoded).into_vec()?;
        if bytes.len() != COMPRESSED_PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
            return Err(KeyError::InvalidLength(bytes.len()));
        }
        let (key, checksum) = bytes.split_at(COMPRESSED_PUBLIC_KEY_LENGTH);
        if ripemd160_checksum(key) != checksum {
            return Err(KeyError::ChecksumMismatch);
        }
        let public_key = k256::PublicKey::from_sec1_bytes(key).map_err(|_| KeyError::InvalidKey)?;
        Ok(Self(public_key))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_legacy_string())
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_legacy_string(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_legacy_string().as_str())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String>::deserialize(deserializer)?;
        Self::from_legacy_string(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl From<PrivateKey> for KeyPair {
    fn from(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }
}
