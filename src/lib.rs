//! shrmpl-conf: reader for flat `key:value` config files.
//!
//! ```text
//! # comment line, ignored
//! BIND_ADDR : 127.0.0.1:7171
//! LOG_LEVEL:INFO   # trailing comment ignored
//! ```
//!
//! Values are stored as strings and converted by the typed getters on
//! [`ConfigStore`].

pub mod config;
pub mod convert;
pub mod error;
pub mod parse;

pub use config::{load_config, ConfigStore};
pub use convert::ValueKind;
pub use error::{ConfigError, Result};
pub use parse::parse_line;
