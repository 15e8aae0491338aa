use std::fmt;
use std::io;

use hexline_channel::ChannelError;
use hexline_frame::FrameError;
use hexline_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Resolve { .. } => {
            CliError::new(TRANSPORT_ERROR, format!("{context}: {err}"))
        }
        TransportError::Bind { source, .. }
        | TransportError::Connect { source, .. }
        | TransportError::Accept(source)
        | TransportError::Io(source) => io_error(context, source),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::OddLength { .. } | FrameError::Hex(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::ConnectionClosed => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}

pub fn channel_error(context: &str, err: ChannelError) -> CliError {
    match err {
        ChannelError::Transport(err) => transport_error(context, err),
        ChannelError::Frame(err) => frame_error(context, err),
        ChannelError::Closed => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_maps_to_data_invalid() {
        let err = channel_error(
            "receive failed",
            ChannelError::Frame(FrameError::OddLength { chars: 3 }),
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn refused_connection_maps_to_failure() {
        let err = transport_error(
            "connect failed",
            TransportError::Connect {
                host: "localhost".into(),
                port: 4433,
                source: io::Error::from(io::ErrorKind::ConnectionRefused),
            },
        );
        assert_eq!(err.code, FAILURE);
    }

    #[test]
    fn resolve_failure_maps_to_transport_error() {
        let err = transport_error(
            "connect failed",
            TransportError::Resolve {
                host: "nohost.invalid".into(),
                port: 4433,
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        );
        assert_eq!(err.code, TRANSPORT_ERROR);
    }

    #[test]
    fn closed_channel_maps_to_failure() {
        let err = channel_error("send failed", ChannelError::Closed);
        assert_eq!(err.code, FAILURE);
        assert!(err.message.contains("send failed"));
    }
}
