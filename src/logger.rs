//! Logging setup
//! `env_logger` with a compact line format: source location only on warnings
//! and errors.

use chrono::Local;
use env_logger::Builder;
use log::Level;
use std::io::Write;

const RESET: &str = "\x1b[0m";

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m\x1b[1m",
        Level::Warn => "\x1b[33m\x1b[1m",
        Level::Info => "\x1b[32m",
        Level::Debug => "\x1b[36m",
        Level::Trace => "\x1b[90m",
    }
}

/// Render one log line (without the trailing newline).
pub fn format_line(
    time: &str,
    level: Level,
    location: Option<(&str, u32)>,
    message: &str,
) -> String {
    let color = level_color(level);
    match location {
        Some((file, line)) if level <= Level::Warn => {
            format!("{time} {color}{level:<5}{RESET} [{file}:{line}] {message}")
        }
        _ => format!("{time} {color}{level:<5}{RESET} {message}"),
    }
}

/// Install the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
    Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let time = Local::now().format("%H:%M:%S%.3f").to_string();
            let location = record.file().zip(record.line());
            let message = record.args().to_string();
            writeln!(
                buf,
                "{}",
                format_line(&time, record.level(), location, &message)
            )
        })
        .init();
}
