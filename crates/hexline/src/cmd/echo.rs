use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hexline_channel::ChannelListener;
use tracing::{info, warn};

use crate::cmd::EchoArgs;
use crate::exit::{channel_error, CliError, CliResult, SUCCESS};

pub fn run(args: EchoArgs) -> CliResult<i32> {
    let listener =
        ChannelListener::bind(args.port).map_err(|err| channel_error("bind failed", err))?;
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "echo server ready");
    }

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    while running.load(Ordering::SeqCst) {
        let mut channel = match listener.accept() {
            Ok(channel) => channel,
            Err(err) => return Err(channel_error("accept failed", err)),
        };

        loop {
            match channel.receive() {
                Ok(Some(msg)) => {
                    if let Err(err) = channel.send(msg.as_ref()) {
                        warn!(%err, "echo reply failed; dropping peer");
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(%err, "skipping malformed frame");
                }
                Err(err) => {
                    warn!(%err, "peer failed; dropping connection");
                    break;
                }
            }
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
