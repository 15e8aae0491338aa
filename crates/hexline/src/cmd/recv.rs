use tracing::warn;

use crate::cmd::RecvArgs;
use crate::exit::{channel_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: RecvArgs, format: OutputFormat) -> CliResult<i32> {
    let mut channel = crate::cmd::open_channel(args.connect.as_deref())?;
    let mut seq = 0usize;

    loop {
        match channel.receive() {
            Ok(Some(msg)) => {
                print_message(&msg, seq, format);
                seq = seq.saturating_add(1);
                if let Some(count) = args.count {
                    if seq >= count {
                        return Ok(SUCCESS);
                    }
                }
            }
            Ok(None) => return Ok(SUCCESS),
            Err(err) if err.is_recoverable() => {
                warn!(%err, "skipping malformed frame");
            }
            Err(err) => return Err(channel_error("receive failed", err)),
        }
    }
}
