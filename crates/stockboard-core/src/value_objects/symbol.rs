//! Ticker symbol - short alphabetic code identifying a traded stock
//!
//! Symbols are stored uppercase. Parsing accepts any case and normalizes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Validated, uppercase ticker symbol
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Longest ticker accepted
    pub const MAX_LEN: usize = 10;

    /// Parse and normalize a ticker (ASCII letters only, 1-10 chars)
    pub fn parse(s: &str) -> Result<Self, SymbolParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SymbolParseError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(SymbolParseError::TooLong { max: Self::MAX_LEN });
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SymbolParseError::NotAlphabetic);
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Borrow the normalized symbol
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a Symbol from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SymbolParseError {
    #[error("symbol is empty")]
    Empty,

    #[error("symbol is longer than {max} characters")]
    TooLong { max: usize },

    #[error("symbol must contain only letters")]
    NotAlphabetic,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Symbol::parse(&raw).map_err(serde::de::Error::custom)
    }
}
