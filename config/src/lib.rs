// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::helper::{load_config, save_config};
use anyhow::Result;
use clap::{crate_version, Parser};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use teos_logger::prelude::*;

mod helper;
mod logger_config;
mod rpc_config;

pub use helper::to_toml;
pub use logger_config::LoggerConfig;
pub use rpc_config::{normalize_address, RpcConfig, DEFAULT_NODE_ADDRESS, DEFAULT_WALLET_ADDRESS};

pub static APP_NAME: &str = "teos";
pub static APP_VERSION: &str = crate_version!();

/// Default data dir, `~/.teos`
pub static DEFAULT_BASE_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".teos")
});
pub static CONFIG_FILE_PATH: &str = "config.toml";

pub fn load_config_with_opt(opt: &TeosOpt) -> Result<TeosConfig> {
    TeosConfig::load_with_opt(opt)
}

#[derive(Clone, Debug, Parser, Default, Serialize, Deserialize)]
#[clap(
    name = "teos",
    about = "Administrative commands for an EOSIO node and its wallet"
)]
pub struct TeosOpt {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[clap(long, global = true)]
    /// The http address (host:port) of the EOSIO node.
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[clap(long, short = 'w', global = true)]
    /// The http address (host:port) where the wallet is running.
    pub wallet: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[clap(long = "timeout", global = true)]
    /// Rpc request timeout in seconds.
    pub timeout: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[clap(long = "data-dir", global = true, parse(from_os_str))]
    /// Directory holding config.toml and the log file, default is ~/.teos
    pub base_data_dir: Option<PathBuf>,

    #[clap(long, short = 'V', global = true)]
    /// Output verbose messages.
    pub verbose: bool,

    #[clap(long, global = true)]
    /// Print the request argument to stderr before executing.
    pub arg: bool,
}

impl std::fmt::Display for TeosOpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self).map_err(|_e| std::fmt::Error)?
        )
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeosConfig {
    pub rpc: RpcConfig,
    pub logger: LoggerConfig,
    #[serde(skip)]
    data_dir: PathBuf,
}

impl TeosConfig {
    /// Read `<data-dir>/config.toml` when present, then let command-line flags win.
    pub fn load_with_opt(opt: &TeosOpt) -> Result<Self> {
        let data_dir = opt
            .base_data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_DATA_DIR.clone());
        let config_file = data_dir.join(CONFIG_FILE_PATH);
        let mut config = if config_file.exists() {
            debug!("Load config from {:?}", config_file);
            load_config::<TeosConfig, _>(config_file.as_path())?
        } else {
            TeosConfig::default()
        };
        config.data_dir = data_dir;
        config.rpc.merge_with_opt(opt);
        config.logger.merge_with_opt(opt, config.data_dir.as_path());
        Ok(config)
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_PATH)
    }

    pub fn save(&self) -> Result<()> {
        if !self.data_dir.exists() {
            create_dir_all(self.data_dir.as_path())?;
        }
        save_config(self, self.config_file())
    }
}
