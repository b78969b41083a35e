// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub(crate) fn save_config<T, P>(c: &T, output_file: P) -> Result<()>
where
    T: Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let mut file = File::create(output_file)?;
    file.write_all(to_toml(c)?.as_bytes())?;
    Ok(())
}

pub fn to_toml<T>(c: &T) -> Result<String>
where
    T: Serialize + DeserializeOwned,
{
    // go through Value so nested tables are written after plain keys
    let c = toml::value::Value::try_from(c)?;
    Ok(toml::to_string(&c)?)
}

pub(crate) fn load_config<T, P>(path: P) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}

fn parse<T>(serialized: &str) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    Ok(toml::from_str(serialized)?)
}
