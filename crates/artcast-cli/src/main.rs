mod logging;
mod payload;

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use artcast_core::{
    ArtDmxPacket, ArtNetSender, MAX_IPV4_FRAME_LEN, SenderConfig, SenderError, TransportError,
    Universe, layout, parse_artdmx,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::logging::LoggingArgs;

#[derive(Parser, Debug)]
#[command(name = "artcast")]
#[command(version)]
#[command(
    about = "Send Art-Net DMX frames over UDP (fire-and-forget).",
    long_about = None,
    after_help = "Examples:\n  artcast send --universe 1 --data 255,0,128\n  artcast send --host 192.168.1.50 --hex ff0080\n  artcast encode --universe 1 --data 255,0,128 --pretty"
)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send an ArtDmx packet. Success means "dispatched", not "received".
    Send(SendArgs),
    /// Encode an ArtDmx packet and print it as JSON without sending it.
    Encode(EncodeArgs),
}

#[derive(Args, Debug)]
#[group(id = "frame", required = true, multiple = false)]
struct FrameArgs {
    /// Channel values as decimal bytes, e.g. "255,0,128"
    #[arg(long)]
    data: Option<String>,

    /// Channel values as a hex string, e.g. "ff0080"
    #[arg(long)]
    hex: Option<String>,
}

#[derive(Args, Debug)]
struct SendArgs {
    /// Destination host (IPv4 or hostname) [default: 255.255.255.255]
    #[arg(long)]
    host: Option<String>,

    /// Destination UDP port [default: 6454]
    #[arg(short, long)]
    port: Option<u16>,

    /// Art-Net universe (0-65535) [default: 0]
    #[arg(short, long)]
    universe: Option<u32>,

    /// JSON sender config; explicit flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not enable SO_BROADCAST on the socket
    #[arg(long)]
    no_broadcast: bool,

    /// Number of packets to send
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Delay between repeated packets in milliseconds
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    #[command(flatten)]
    frame: FrameArgs,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Art-Net universe (0-65535)
    #[arg(short, long, default_value_t = 0)]
    universe: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    frame: FrameArgs,
}

#[derive(Debug, Serialize)]
struct EncodedPacket {
    universe: u16,
    sequence: u8,
    physical: u8,
    length: usize,
    total_bytes: usize,
    hex: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.logging.init();

    let result = match cli.command {
        Commands::Send(args) => cmd_send(args),
        Commands::Encode(args) => cmd_encode(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<SenderError> for CliError {
    fn from(err: SenderError) -> Self {
        let hint = match &err {
            SenderError::TransportFailure(TransportError::PayloadTooLarge { .. })
            | SenderError::Protocol(_) => Some(frame_size_hint()),
            SenderError::TransportFailure(_) => {
                Some("check the destination host and network interface".to_string())
            }
            _ => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

fn frame_size_hint() -> String {
    format!(
        "a channel frame encodes up to {} bytes, but only {} fit in one IPv4 UDP datagram",
        layout::MAX_FRAME_LEN,
        MAX_IPV4_FRAME_LEN
    )
}

fn cmd_send(args: SendArgs) -> Result<(), CliError> {
    let frame = resolve_frame(&args.frame)?;
    let config = resolve_config(&args)?;
    let sender = ArtNetSender::connect(config)?;

    let mut last = None;
    for index in 0..args.repeat {
        if index > 0 && args.interval_ms > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }
        last = Some(sender.send(&frame)?);
    }
    sender.close()?;

    if let Some(receipt) = last {
        if !args.quiet {
            eprintln!(
                "OK: sent {} bytes x{} -> {} (universe {})",
                receipt.bytes, args.repeat, receipt.endpoint, receipt.universe
            );
        }
    }
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> Result<(), CliError> {
    let frame = resolve_frame(&args.frame)?;
    let universe = parse_universe(args.universe)?;

    let bytes = ArtDmxPacket::new(universe, &frame)
        .encode()
        .context("ArtDmx encoding failed")?;
    let decoded = parse_artdmx(&bytes)
        .context("ArtDmx self-check failed")?
        .ok_or_else(|| anyhow::anyhow!("encoded packet is not ArtDmx"))?;

    let summary = EncodedPacket {
        universe: decoded.universe.get(),
        sequence: decoded.sequence,
        physical: decoded.physical,
        length: decoded.data.len(),
        total_bytes: bytes.len(),
        hex: payload::to_hex(&bytes),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn resolve_config(args: &SendArgs) -> Result<SenderConfig, CliError> {
    let mut config = match args.config.as_ref() {
        Some(path) => SenderConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SenderConfig::default(),
    };
    if let Some(host) = args.host.as_ref() {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(universe) = args.universe {
        config.universe = parse_universe(universe)?;
    }
    if args.no_broadcast {
        config.broadcast = false;
    }
    Ok(config)
}

fn resolve_frame(args: &FrameArgs) -> Result<Vec<u8>, CliError> {
    let parsed = match (args.data.as_deref(), args.hex.as_deref()) {
        (Some(data), None) => payload::parse_channel_list(data),
        (None, Some(hex)) => payload::parse_hex(hex),
        _ => {
            return Err(CliError::new(
                "exactly one of --data or --hex is required",
                None,
            ));
        }
    };
    parsed.map_err(|message| {
        CliError::new(
            format!("invalid channel frame: {}", message),
            Some(format!(
                "channel values are bytes (0-255), at most {} of them",
                layout::MAX_FRAME_LEN
            )),
        )
    })
}

fn parse_universe(value: u32) -> Result<Universe, CliError> {
    Universe::try_from(value).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("Art-Net universes are 16-bit (0-65535)".to_string()),
        )
    })
}
