//! Error types for game construction and guess validation

use std::fmt;

/// A submitted guess was rejected before scoring
///
/// Both variants are recoverable: the caller may fix the input and resubmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The guess does not have the session's code length
    InvalidLength { required: usize, provided: usize },
    /// The guess uses at least one symbol outside the pool
    InvalidCharacters { pool: String, text: String },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { required, provided } => {
                write!(
                    f,
                    "Invalid guess length: required={required}; provided={provided}"
                )
            }
            Self::InvalidCharacters { pool, text } => {
                write!(
                    f,
                    "Guess includes invalid characters: required={pool}; provided={text}"
                )
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Construction arguments for a pool, code, or game were invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPool,
    DuplicateSymbol(char),
    ZeroLength,
    SymbolOutsidePool(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Pool must contain at least one symbol"),
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Pool contains duplicate symbol '{symbol}'")
            }
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::SymbolOutsidePool(symbol) => {
                write!(f, "Code symbol '{symbol}' is not in the pool")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
