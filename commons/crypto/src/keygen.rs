// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::key::{KeyPair, PrivateKey};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

/// Generates secp256k1 key pairs from a cryptographic rng.
pub struct KeyGen<R> {
    rng: R,
}

impl KeyGen<OsRng> {
    pub fn from_os_rng() -> Self {
        Self { rng: OsRng }
    }
}

impl KeyGen<StdRng> {
    /// Deterministic generator, only meant for tests.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: StdRng::from_seed(seed),
        }
    }
}

impl<R> KeyGen<R>
where
    R: RngCore + CryptoRng,
{
    pub fn generate_private_key(&mut self) -> PrivateKey {
        PrivateKey::random(&mut self.rng)
    }

    pub fn generate_keypair(&mut self) -> KeyPair {
        KeyPair::from(self.generate_private_key())
    }
}
