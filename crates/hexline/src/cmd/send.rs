use std::fs;

use hexline_channel::Channel;

use crate::cmd::SendArgs;
use crate::exit::{channel_error, CliError, CliResult, FAILURE, SUCCESS, USAGE};
use crate::output::{print_message, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let mut channel = crate::cmd::open_channel(args.connect.as_deref())?;

    send_payload(&mut channel, &payload, args.chunk.map(|c| c.get()))?;

    if args.wait {
        match channel.receive() {
            Ok(Some(reply)) => print_message(&reply, 0, format),
            Ok(None) => {
                return Err(CliError::new(
                    FAILURE,
                    "peer closed before sending a response",
                ))
            }
            Err(err) => return Err(channel_error("receive failed", err)),
        }
    }

    Ok(SUCCESS)
}

/// Emit the payload as exactly one wire frame, optionally split into
/// partial writes.
fn send_payload(channel: &mut Channel, payload: &[u8], chunk: Option<usize>) -> CliResult<()> {
    match chunk {
        Some(size) if !payload.is_empty() => {
            let mut chunks = payload.chunks(size).peekable();
            while let Some(part) = chunks.next() {
                let result = if chunks.peek().is_some() {
                    channel.send_partial(part)
                } else {
                    channel.send(part)
                };
                result.map_err(|err| channel_error("send failed", err))?;
            }
            Ok(())
        }
        _ => channel
            .send(payload)
            .map_err(|err| channel_error("send failed", err)),
    }
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(hex_text) = &args.hex {
        return hex::decode(hex_text.trim())
            .map_err(|err| CliError::new(USAGE, format!("--hex is not valid hex: {err}")));
    }
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Ok(Vec::new())
}
