//! Symbolic start times.
//!
//! String grammar: `("scene" | "prev.end") [sign digits ["." digits]]`, whitespace ignored.
//! Anything that does not match resolves to the unmodified base; parsing never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A start time, either absolute or relative to a symbolic base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeRef {
    /// Absolute milliseconds.
    Absolute(f64),
    /// Offset from the scene origin (time 0).
    SceneRelative(f64),
    /// Offset from the end of the preceding item in an enclosing sequence.
    PrevEndRelative(f64),
}

impl Default for TimeRef {
    fn default() -> Self {
        Self::Absolute(0.0)
    }
}

impl TimeRef {
    /// Parse the string form. Malformed offsets resolve to a zero offset.
    pub fn parse(s: &str) -> Self {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(rest) = compact.strip_prefix("prev.end") {
            return Self::PrevEndRelative(parse_offset(rest));
        }
        if let Some(rest) = compact.strip_prefix("scene") {
            return Self::SceneRelative(parse_offset(rest));
        }
        Self::Absolute(0.0)
    }

    /// Resolve to absolute milliseconds given the end of the preceding item.
    pub fn resolve(self, prev_end: f64) -> f64 {
        match self {
            Self::Absolute(ms) => ms,
            Self::SceneRelative(off) => off,
            Self::PrevEndRelative(off) => prev_end + off,
        }
    }
}

/// Resolve a start reference to absolute milliseconds.
///
/// `prev_end` is the base for `prev.end` references; callers outside a sequence pass `0`.
pub fn resolve_start(start: Option<&TimeRef>, prev_end: f64) -> f64 {
    start.copied().unwrap_or_default().resolve(prev_end)
}

/// Parse `^[+-]\d+(\.\d+)?$`; anything else (including the empty string) is `0`.
fn parse_offset(s: &str) -> f64 {
    let Some((sign, body)) = s
        .strip_prefix('+')
        .map(|b| (1.0, b))
        .or_else(|| s.strip_prefix('-').map(|b| (-1.0, b)))
    else {
        return 0.0;
    };

    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !frac.is_none_or(all_digits) {
        return 0.0;
    }

    body.parse::<f64>().map(|v| sign * v).unwrap_or(0.0)
}

impl From<f64> for TimeRef {
    fn from(ms: f64) -> Self {
        Self::Absolute(ms)
    }
}

impl From<&str> for TimeRef {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for TimeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn with_offset(f: &mut fmt::Formatter<'_>, base: &str, off: f64) -> fmt::Result {
            if off == 0.0 {
                f.write_str(base)
            } else {
                write!(f, "{base}{off:+}")
            }
        }

        match *self {
            Self::Absolute(ms) => write!(f, "{ms}"),
            Self::SceneRelative(off) => with_offset(f, "scene", off),
            Self::PrevEndRelative(off) => with_offset(f, "prev.end", off),
        }
    }
}

impl Serialize for TimeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Self::Absolute(ms) => serializer.serialize_f64(ms),
            _ => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for TimeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Ms(f64),
            Sym(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Ms(ms) => Ok(Self::Absolute(ms)),
            Repr::Sym(s) => Ok(Self::parse(&s)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/time_ref.rs"]
mod tests;
