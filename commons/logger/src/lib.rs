// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{format_err, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;


/// Logger prelude which includes all logging macros.
pub mod prelude {
    pub use log::{debug, error, info, log_enabled, trace, warn, Level, LevelFilter};
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoggerConfigArg {
    enable_stderr: bool,
    level: LevelFilter,
    log_path: Option<PathBuf>,
}

impl LoggerConfigArg {
    fn new(enable_stderr: bool, level: LevelFilter) -> Self {
        Self {
            enable_stderr,
            level,
            log_path: None,
        }
    }
}

pub struct LoggerHandle {
    arg: Mutex<LoggerConfigArg>,
    handle: Handle,
}

impl LoggerHandle {
    fn new(arg: LoggerConfigArg, handle: Handle) -> Self {
        Self {
            arg: Mutex::new(arg),
            handle,
        }
    }

    /// Stop the console appender; a file appender keeps logging.
    pub fn disable_stderr(&self) -> Result<()> {
        let mut arg = self.arg.lock().clone();
        arg.enable_stderr = false;
        self.update_logger(arg)
    }

    /// Append log lines to `log_path` in addition to stderr.
    pub fn enable_file(&self, log_path: PathBuf) -> Result<()> {
        let mut arg = self.arg.lock().clone();
        arg.log_path = Some(log_path);
        self.update_logger(arg)
    }

    pub fn update_level(&self, level: LevelFilter) -> Result<()> {
        let mut arg = self.arg.lock().clone();
        arg.level = level;
        self.update_logger(arg)
    }

    fn update_logger(&self, arg: LoggerConfigArg) -> Result<()> {
        let mut origin_arg = self.arg.lock();
        if *origin_arg != arg {
            let config = build_config(arg.clone())?;
            *origin_arg = arg;
            self.handle.set_config(config);
        }
        Ok(())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.arg.lock().log_path.clone()
    }

    pub fn stderr(&self) -> bool {
        self.arg.lock().enable_stderr
    }

    pub fn level(&self) -> LevelFilter {
        self.arg.lock().level
    }
}

const LOG_PATTERN: &str = "{d} {l} {M} - {m}{n}";

fn build_config(arg: LoggerConfigArg) -> Result<Config> {
    let LoggerConfigArg {
        enable_stderr,
        level,
        log_path,
    } = arg;
    let mut builder = Config::builder();
    let mut root_builder = Root::builder();
    if enable_stderr {
        let stderr = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .target(Target::Stderr)
            .build();
        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root_builder = root_builder.appender("stderr");
    }
    if let Some(log_path) = log_path {
        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path.as_path())
            .map_err(|e| format_err!("open log file {:?} failed: {}", log_path, e))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file_appender)));
        root_builder = root_builder.appender("file");
    }

    builder
        .build(root_builder.build(level))
        .map_err(|e| e.into())
}

/// `RUST_LOG` wins over the caller's default; an unparsable value falls back to the default.
fn env_log_level(default_level: LevelFilter) -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(default_level)
}

static LOGGER_HANDLE: OnceCell<Arc<LoggerHandle>> = OnceCell::new();

pub fn init() -> Arc<LoggerHandle> {
    init_with_default_level(LevelFilter::Warn)
}

pub fn init_with_default_level(default_level: LevelFilter) -> Arc<LoggerHandle> {
    let level = env_log_level(default_level);
    let logger_handle = LOGGER_HANDLE
        .get_or_init(|| {
            let arg = LoggerConfigArg::new(true, level);
            let config = build_config(arg.clone()).expect("build stderr log config should success.");
            let handle = log4rs::init_config(config).expect("logger should only be set once.");
            Arc::new(LoggerHandle::new(arg, handle))
        })
        .clone();
    if logger_handle.level() != level {
        if let Err(e) = logger_handle.update_level(level) {
            eprintln!("update log level to {} failed: {}", level, e);
        }
    }
    logger_handle
}

pub fn init_for_test() -> Arc<LoggerHandle> {
    init_with_default_level(LevelFilter::Debug)
}
