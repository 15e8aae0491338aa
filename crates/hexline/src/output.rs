use std::io::{IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One hex line per message (the wire form, without newline quirks).
    Hex,
    /// Raw payload bytes, unmodified.
    Raw,
    /// One JSON object per message.
    Json,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Hex
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct MessageOutput {
    seq: usize,
    size: usize,
    payload_hex: String,
    timestamp: String,
}

pub fn print_message(payload: &[u8], seq: usize, format: OutputFormat) {
    match format {
        OutputFormat::Hex => {
            println!("{}", hex::encode(payload));
        }
        OutputFormat::Raw => {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(payload);
            let _ = stdout.flush();
        }
        OutputFormat::Json => {
            let out = MessageOutput {
                seq,
                size: payload.len(),
                payload_hex: hex::encode(payload),
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
