//! Logger for the `lox` binaries, configured through `RUST_LOG`.
//!
//! `RUST_LOG=debug` enables every crate at `debug` and above, while
//! `RUST_LOG=lox=trace,rustyline=warn` sets levels per crate. Crates not named
//! are silent.

use std::{
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
    sync::RwLock,
};

use fnv::FnvHashMap;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use regex::Regex;

#[derive(Clone, Debug, Default, PartialEq)]
struct LogConfig {
    all: Option<Level>,
    specific: FnvHashMap<String, Level>,
}

impl LogConfig {
    fn level_for(&self, crate_: &str) -> Option<Level> {
        self.all.or_else(|| self.specific.get(crate_).copied())
    }

    fn max_level(&self) -> LevelFilter {
        self.all
            .into_iter()
            .chain(self.specific.values().copied())
            .max()
            .map(|level| level.to_level_filter())
            .unwrap_or(LevelFilter::Off)
    }
}

static SINGLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("^([a-zA-Z]+)$").unwrap());
static MULTI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("([a-z_\\-]+)=([a-zA-Z]+)").unwrap());
static CRATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("^([a-z_]+)(?:::.*)?").unwrap());

/// Unknown levels and malformed terms are skipped.
fn parse_config(env: &str) -> LogConfig {
    let env = env.trim();

    if let Some(captures) = SINGLE_REGEX.captures(env) {
        return LogConfig {
            all: Level::from_str(&captures[1]).ok(),
            specific: Default::default(),
        };
    }

    let specific = MULTI_REGEX
        .captures_iter(env)
        .filter_map(|captures| {
            let level = Level::from_str(&captures[2]).ok()?;
            // cargo package names use dashes, module paths use underscores
            Some((captures[1].replace('-', "_"), level))
        })
        .collect();

    LogConfig {
        all: None,
        specific,
    }
}

struct StderrLogger {
    config: RwLock<LogConfig>,
    color: AtomicBool,
}

impl StderrLogger {
    fn new() -> Self {
        StderrLogger {
            config: RwLock::new(LogConfig::default()),
            color: AtomicBool::new(false),
        }
    }

    fn set_config(&self, config: LogConfig) {
        if let Ok(mut inner) = self.config.write() {
            *inner = config;
        }
    }
}

fn paint(s: &str, level: Level) -> String {
    match level {
        Level::Error => s.black().on_bright_red().to_string(),
        Level::Warn => s.bright_yellow().to_string(),
        Level::Info => s.cyan().to_string(),
        Level::Debug => s.blue().to_string(),
        Level::Trace => s.green().dimmed().to_string(),
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let config = match self.config.read() {
            Ok(config) => config,
            Err(_) => return false,
        };

        CRATE_REGEX
            .captures(metadata.target())
            .and_then(|captures| config.level_for(&captures[1]))
            .map(|level| level >= metadata.level())
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut level = format!("{:5}", record.level());
        let mut module = format!("[{}]", record.module_path().unwrap_or(record.target()));

        if self.color.load(Ordering::Relaxed) {
            level = paint(&level, record.level());
            module = paint(&module, record.level());
        }

        eprintln!("{level} {module} {}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: Lazy<StderrLogger> = Lazy::new(StderrLogger::new);

/// Install the logger. Does nothing if `RUST_LOG` is unset or another logger
/// is already installed.
pub fn init() {
    let config = match std::env::var("RUST_LOG") {
        Ok(env) => parse_config(&env),
        Err(_) => return,
    };

    let max_level = config.max_level();
    LOGGER.set_config(config);
    LOGGER
        .color
        .store(atty::is(atty::Stream::Stderr), Ordering::SeqCst);

    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
