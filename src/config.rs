use std::collections::hash_map;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::convert::{self, ValueKind};
use crate::error::{ConfigError, Result};
use crate::parse::parse_line;

/// Flat key/value settings read from a `key:value` file.
///
/// Populated once on load and read-only afterwards. Values are kept as the
/// raw strings from the file and converted when a typed getter is called.
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    values: HashMap<String, String>,
}

/// Shorthand for [`ConfigStore::load`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigStore> {
    ConfigStore::load(path)
}

impl ConfigStore {
    /// Opens `path` and reads every line into a new store.
    ///
    /// Open and read failures are returned as [`ConfigError::Io`] with the
    /// path attached. Lines that don't parse are dropped without notice.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config file: {}", path.display());

        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            op: "open",
            source,
        })?;

        let store = Self::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            op: "read",
            source,
        })?;

        debug!(
            "Loaded {} entries from config file: {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Reads lines from `reader` until end of stream. A last line without a
    /// trailing newline is still parsed. Later duplicates overwrite earlier ones.
    ///
    /// Bytes that aren't valid UTF-8 are replaced with U+FFFD rather than
    /// failing the load.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut values = HashMap::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break; // EOF
            }
            let line = String::from_utf8_lossy(&buf);
            if let Some((key, value)) = parse_line(&line) {
                values.insert(key.to_string(), value.to_string());
            }
        }
        Ok(ConfigStore { values })
    }

    /// Raw value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Same as [`get`](Self::get).
    pub fn get_str(&self, key: &str) -> &str {
        self.get(key)
    }

    /// Platform word-sized integer, so 64-bit targets accept 64-bit values.
    pub fn get_int(&self, key: &str) -> Result<isize> {
        self.get_number(key, ValueKind::Int)
    }

    pub fn get_int64(&self, key: &str) -> Result<i64> {
        self.get_number(key, ValueKind::Int64)
    }

    /// Values too large for `f32` are rejected rather than read as infinity.
    pub fn get_float32(&self, key: &str) -> Result<f32> {
        convert::parse_float(self.get(key)).ok_or_else(|| conversion_error(key, ValueKind::Float32))
    }

    pub fn get_float64(&self, key: &str) -> Result<f64> {
        convert::parse_float(self.get(key)).ok_or_else(|| conversion_error(key, ValueKind::Float64))
    }

    /// Accepts true/on/1/yes and false/off/0/no in any letter case.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        convert::parse_bool(self.get(key)).ok_or_else(|| conversion_error(key, ValueKind::Bool))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter(),
        }
    }

    // Missing keys read as "" and fail here like any other bad number.
    fn get_number<T: FromStr>(&self, key: &str, kind: ValueKind) -> Result<T> {
        convert::parse_number(self.get(key)).ok_or_else(|| conversion_error(key, kind))
    }
}

fn conversion_error(key: &str, kind: ValueKind) -> ConfigError {
    ConfigError::Conversion {
        key: key.to_string(),
        kind,
    }
}

/// Borrowing iterator over a store's `(key, value)` pairs.
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
