use crate::{random_keypair, KeyError, KeyGen, PrivateKey, PublicKey};

// The well known EOSIO development key pair.
const DEV_PRIVATE_KEY: &str = "5KQwrPbwdL6PhXujxW37FSSQZ1JiwsST4cqQzDeyXtP79zkvFD3";
const DEV_PUBLIC_KEY: &str = "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV";

#[test]
fn test_dev_key_derivation() {
    let private_key = PrivateKey::from_wif(DEV_PRIVATE_KEY).unwrap();
    assert_eq!(private_key.to_wif(), DEV_PRIVATE_KEY);
    assert_eq!(private_key.public_key().to_string(), DEV_PUBLIC_KEY);
}

#[test]
fn test_public_key_parse() {
    let public_key: PublicKey = DEV_PUBLIC_KEY.parse().unwrap();
    assert_eq!(public_key.to_legacy_string(), DEV_PUBLIC_KEY);
    assert_eq!(public_key.to_compressed_bytes().len(), 33);

    let json = serde_json::to_string(&public_key).unwrap();
    assert_eq!(json, format!("\"{}\"", DEV_PUBLIC_KEY));
}

#[test]
fn test_random_keypair() {
    let keypair = random_keypair();
    let wif = keypair.private_key.to_wif();
    let public = keypair.public_key.to_string();
    assert!(wif.starts_with('5'));
    assert!(public.starts_with("EOS"));
    assert_eq!(PrivateKey::from_wif(&wif).unwrap().public_key(), keypair.public_key);

    let other = random_keypair();
    assert_ne!(other.private_key.to_wif(), wif);
}

#[test]
fn test_seeded_keygen_is_deterministic() {
    let first = KeyGen::from_seed([7u8; 32]).generate_keypair();
    let second = KeyGen::from_seed([7u8; 32]).generate_keypair();
    assert_eq!(first.private_key, second.private_key);
    assert_eq!(first.public_key, second.public_key);
}

#[test]
fn test_corrupted_keys_rejected() {
    let mut corrupted = DEV_PUBLIC_KEY.to_string();
    corrupted.pop();
    corrupted.push('X');
    assert!(corrupted.parse::<PublicKey>().is_err());

    assert!(matches!(
        "PUB6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV".parse::<PublicKey>(),
        Err(KeyError::InvalidPrefix(_))
    ));
    assert!(PrivateKey::from_wif("5KQwrPbwdL6PhXujxW37FSSQZ1JiwsST4cqQzDeyXtP79zkvFD4").is_err());
}
