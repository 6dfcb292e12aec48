//! Stderr diagnostics for the `artcast` binary.
//!
//! `artcast-core` reports through `tracing`: a `warn!` when a frame exceeds
//! 512 slots, `info!` when a sender is created, `debug!` for every dispatched
//! packet and hostname resolution, `trace!` for each datagram handed to the
//! socket. The default level is `warn`, so a plain `artcast send` prints only
//! the oversized-frame warning and its own `OK:` line. Stdout is left to
//! command output (`encode` JSON).

use clap::{Args, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    #[default]
    Text,
    /// One JSON object per event, for log collectors.
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Global logging flags shared by every subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LoggingArgs {
    /// Log output format (stderr)
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,

    /// Minimum log level (stderr); `debug` shows every dispatched packet
    #[arg(long, value_name = "LEVEL", value_enum, default_value_t, global = true)]
    pub log_level: LogLevel,
}

impl LoggingArgs {
    /// Only artcast's own crates are logged; dependency noise is dropped.
    fn targets(&self) -> Targets {
        let level = self.log_level.as_filter();
        Targets::new()
            .with_target("artcast_core", level)
            .with_target("artcast", level)
    }

    /// Install the stderr subscriber. A second call keeps the first one.
    pub fn init(&self) {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let registry = tracing_subscriber::registry().with(self.targets());
        let _ = match self.log_format {
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false)
                        .with_target(self.log_level >= LogLevel::Debug),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    #[test]
    fn defaults_are_warn_and_text() {
        let parsed = Harness::try_parse_from(["artcast"]).unwrap();
        assert_eq!(parsed.logging.log_level, LogLevel::Warn);
        assert_eq!(parsed.logging.log_format, LogFormat::Text);
        assert_eq!(LogLevel::default(), LogLevel::Warn);
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }

    #[test]
    fn flags_select_level_and_format() {
        let parsed =
            Harness::try_parse_from(["artcast", "--log-level", "debug", "--log-format", "json"])
                .unwrap();
        assert_eq!(parsed.logging.log_level, LogLevel::Debug);
        assert_eq!(parsed.logging.log_format, LogFormat::Json);
    }

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(LogLevel::Error.as_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Warn.as_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::Trace.as_filter(), LevelFilter::TRACE);
    }

    #[test]
    fn targets_cover_core_and_cli_only() {
        let targets = LoggingArgs {
            log_level: LogLevel::Info,
            ..LoggingArgs::default()
        }
        .targets();
        assert!(targets.would_enable("artcast_core::sender", &tracing::Level::INFO));
        assert!(targets.would_enable("artcast", &tracing::Level::WARN));
        assert!(!targets.would_enable("artcast_core::transport", &tracing::Level::DEBUG));
        assert!(!targets.would_enable("clap_builder", &tracing::Level::ERROR));
    }
}
