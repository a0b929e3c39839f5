//! Error types for burrow
//!
//! Two things can go wrong: a starting locator does not parse, or a
//! server cannot be reached mid-crawl. Both abort only the affected
//! starting locator; neither is retried.

use std::io;

use thiserror::Error;

/// Global error type for burrow operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed locator text
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Connection, write, or mid-transfer failure
    #[error("cannot reach {host}:{port}: {source}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
}

/// Reasons a locator string fails to parse.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("empty gopher locator")]
    Empty,

    /// The address carried a `:` whose tail is not a valid port
    #[error("invalid port in '{0}'")]
    Port(String),

    /// The type field must be exactly one character
    #[error("invalid item type '{0}'")]
    Type(String),
}

/// Specialized Result type for burrow operations.
pub type Result<T> = std::result::Result<T, Error>;
