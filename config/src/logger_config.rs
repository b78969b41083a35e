// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::TeosOpt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use teos_logger::prelude::LevelFilter;

static LOGGER_FILE_NAME: &str = "teos.log";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Also write log lines to `<data-dir>/teos.log`.
    pub enable_file: bool,
    #[serde(skip)]
    verbose: bool,
    #[serde(skip)]
    log_path: Option<PathBuf>,
}

impl LoggerConfig {
    pub fn merge_with_opt(&mut self, opt: &TeosOpt, data_dir: &Path) {
        self.verbose = opt.verbose;
        self.log_path = Some(data_dir.join(LOGGER_FILE_NAME));
    }

    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// The log file, only when file logging is enabled.
    pub fn log_path(&self) -> Option<&Path> {
        if self.enable_file {
            self.log_path.as_deref()
        } else {
            None
        }
    }
}
