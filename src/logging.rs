//! Logger initialization.
//!
//! `env_logger` writing to stderr. `RUST_LOG` is honoured; the verbosity
//! passed on the command line raises the level for this crate.

use colored::*;
use log::LevelFilter;
use std::io::Write;

/// Map `-v` occurrences to a level. Zero keeps warnings only.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger. Safe to call more than once.
pub fn init_logger(level: LevelFilter, color: bool) {
    colored::control::set_override(color);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(LevelFilter::Warn);
    builder.filter_module("ureq", LevelFilter::Warn);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("phonemap", level);

    builder.format(|buf, record| {
        let level = record.level();
        let tag = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };
        writeln!(buf, "[{}] {} {}", tag, record.target().cyan(), record.args())
    });

    // try_init: tests may initialize the logger repeatedly.
    let _ = builder.try_init();
}
