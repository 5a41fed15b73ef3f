use std::fmt;

use log::kv::{ToValue, Value};

/// Arguments forwarded positionally to the backing SQL function.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDataParams {
    pub records: IntParam,
    pub text_param: String,
    pub int_param: IntParam,
    /// Left as text; the database parses it as a timestamp.
    pub ts_param: String,
    pub bool_param: bool,
}

impl ToValue for TestDataParams {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

/// An integer of any size, kept as canonical decimal text. Range checks are
/// left to the database column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntParam(String);

impl IntParam {
    /// Lax integer syntax: surrounding whitespace, a `+`/`-` sign, single
    /// underscores between digits and an all-zero fractional part are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        let s = match s.split_once('.') {
            Some((whole, frac)) if frac.bytes().all(|b| b == b'0') => whole,
            Some(_) => return None,
            None => s,
        };
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if digits.is_empty()
            || digits.starts_with('_')
            || digits.ends_with('_')
            || digits.contains("__")
            || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
        {
            return None;
        }

        let digits: String = digits.chars().filter(|c| *c != '_').collect();
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Some(Self("0".to_string()));
        }
        let sign = if negative { "-" } else { "" };
        Some(Self(format!("{sign}{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for IntParam {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for IntParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
