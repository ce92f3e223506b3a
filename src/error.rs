//! Error type shared by loading and the typed accessors.

use std::path::PathBuf;

use thiserror::Error;

use crate::convert::ValueKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened or read. `op` is "open" or "read".
    #[error("could not {op} config file {path}: {source}")]
    Io {
        path: PathBuf,
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A stored (or absent) value could not be converted by a typed accessor.
    #[error("could not convert value of '{key}' to {kind}")]
    Conversion { key: String, kind: ValueKind },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
