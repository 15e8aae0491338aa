use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use hexline_channel::Channel;

use crate::exit::{channel_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod echo;
pub mod recv;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a single message as one hex frame.
    Send(SendArgs),
    /// Receive messages and print them.
    Recv(RecvArgs),
    /// Serve a port and echo every received frame back.
    Echo(EchoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args, format),
        Command::Recv(args) => recv::run(args, format),
        Command::Echo(args) => echo::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Connect to HOST:PORT instead of writing to stdout.
    #[arg(long, value_name = "HOST:PORT")]
    pub connect: Option<String>,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex string payload.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
    /// Emit the payload in partial writes of this many bytes, finishing
    /// the frame with the last chunk.
    #[arg(long, value_name = "BYTES")]
    pub chunk: Option<NonZeroUsize>,
    /// Wait for one response frame and print it.
    #[arg(long)]
    pub wait: bool,
}

#[derive(Args, Debug)]
pub struct RecvArgs {
    /// Connect to HOST:PORT instead of reading from stdin.
    #[arg(long, value_name = "HOST:PORT")]
    pub connect: Option<String>,
    /// Exit after receiving N messages.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct EchoArgs {
    /// Port to listen on.
    #[arg(long)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Open the channel a command should talk over: a socket when `--connect`
/// was given, the standard streams otherwise.
pub fn open_channel(connect: Option<&str>) -> CliResult<Channel> {
    match connect {
        None => Ok(Channel::stdio()),
        Some(spec) => {
            let (host, port) = parse_endpoint(spec)?;
            Channel::connect(&host, port).map_err(|err| channel_error("connect failed", err))
        }
    }
}

fn parse_endpoint(spec: &str) -> CliResult<(String, u16)> {
    let (host, port) = spec
        .rsplit_once(':')
        .ok_or_else(|| CliError::new(USAGE, format!("endpoint must be HOST:PORT, got: {spec}")))?;
    if host.is_empty() {
        return Err(CliError::new(USAGE, format!("empty host in endpoint: {spec}")));
    }
    let port: u16 = port
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid port in endpoint: {spec}")))?;
    Ok((host.to_string(), port))
}
