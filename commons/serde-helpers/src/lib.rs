// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Display;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Bytes as a bare lowercase hex string, the way the node encodes action data.
pub fn serialize_hex<S>(bytes: &[u8], s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(hex::encode(bytes).as_str())
}

pub fn deserialize_hex<'de, D>(d: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = <String>::deserialize(d)?;
    let s = s.strip_prefix("0x").unwrap_or(&s);
    hex::decode(s).map_err(D::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrValue<R> {
    Value(R),
    String(String),
}

/// Accept either the native JSON value (`30`, `true`) or a string holding it (`"30"`, `"true"`).
pub fn deserialize_from_string_or_value<'de, D, R>(d: D) -> std::result::Result<R, D::Error>
where
    D: Deserializer<'de>,
    R: FromStr + Deserialize<'de>,
    R::Err: Display,
{
    match StringOrValue::<R>::deserialize(d)? {
        StringOrValue::Value(value) => Ok(value),
        StringOrValue::String(s) => R::from_str(s.trim()).map_err(D::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolRepr {
    Bool(bool),
    Int(u64),
    String(String),
}

/// Accept `true`/`false`, `0`/`1`, or either spelling inside a string.
pub fn deserialize_bool<'de, D>(d: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolRepr::deserialize(d)? {
        BoolRepr::Bool(value) => Ok(value),
        BoolRepr::Int(0) => Ok(false),
        BoolRepr::Int(1) => Ok(true),
        BoolRepr::Int(other) => Err(D::Error::custom(format!(
            "invalid boolean {}, expect 0 or 1",
            other
        ))),
        BoolRepr::String(s) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(D::Error::custom(format!(
                "invalid boolean {:?}, expect true, false, 1 or 0",
                other
            ))),
        },
    }
}
