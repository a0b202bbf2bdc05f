// Copyright (c) 2026 rezky_nightky

use std::fs::OpenOptions;
use std::path::Path;

use log::LevelFilter;

use crate::error::{Error, Result};

pub fn verbosity_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sets up `env_logger`. The animation owns the terminal, so records only go
/// to `log_file`; without one, logging stays off unless `RUST_LOG` asks for it.
pub fn init(log_file: Option<&Path>, verbose: u8) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            let mut b =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
            b.target(env_logger::Target::Pipe(Box::new(file)));
            if verbose > 0 {
                b.filter_level(verbosity_filter(verbose));
            }
            b
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };

    // a second init (tests, embedding) keeps the first logger
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_steps() {
        assert_eq!(verbosity_filter(0), LevelFilter::Warn);
        assert_eq!(verbosity_filter(1), LevelFilter::Info);
        assert_eq!(verbosity_filter(2), LevelFilter::Debug);
        assert_eq!(verbosity_filter(9), LevelFilter::Trace);
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let err = init(Some(Path::new("/nonexistent-dir/heartfall.log")), 0).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
    }
}
