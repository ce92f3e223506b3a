//! String-to-value conversions used by the typed getters.

use std::fmt;
use std::str::FromStr;

/// Target type of a typed accessor. Carried by conversion errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Int64,
    Float32,
    Float64,
    Bool,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Str => "str",
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "string" => Ok(ValueKind::Str),
            "int" => Ok(ValueKind::Int),
            "int64" => Ok(ValueKind::Int64),
            "float32" => Ok(ValueKind::Float32),
            "float64" => Ok(ValueKind::Float64),
            "bool" => Ok(ValueKind::Bool),
            other => Err(format!("unknown value kind: {}", other)),
        }
    }
}

const TRUTHY: [&str; 4] = ["true", "on", "1", "yes"];
const FALSY: [&str; 4] = ["false", "off", "0", "no"];

/// Case-insensitive match against the truthy/falsy word sets. No trimming.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Base-10 numeric parse; `None` on any failure, including the empty string.
pub fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse::<T>().ok()
}

/// Float parse that treats overflow as a failure. `FromStr` rounds an
/// out-of-range literal to infinity, so an infinite result is only accepted
/// when the input spells it out ("inf", "infinity").
pub fn parse_float<T>(raw: &str) -> Option<T>
where
    T: FromStr + Copy + Into<f64>,
{
    let value = parse_number::<T>(raw)?;
    let wide: f64 = value.into();
    if wide.is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(value)
}
