// Copyright (c) 2026 rezky_nightky

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to apply {name} {value} ({reason})")]
    InvalidOption {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid color: {0} (see --list-colors)")]
    UnknownColor(String),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::InvalidOption {
            name: "--points",
            value: "3".to_string(),
            reason: "min 8 max 2000".to_string(),
        };
        assert_eq!(err.to_string(), "failed to apply --points 3 (min 8 max 2000)");
        assert_eq!(
            Error::UnknownColor("plaid".to_string()).to_string(),
            "invalid color: plaid (see --list-colors)"
        );
    }

    #[test]
    fn log_file_error_keeps_io_source() {
        let err = Error::LogFile {
            path: PathBuf::from("/tmp/x.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot open log file /tmp/x.log: denied");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
