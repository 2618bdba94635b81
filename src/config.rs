//! Runtime configuration for a single passgen invocation.
//!
//! The CLI surface in `cli.rs` is translated into a [`Config`] here.
//! The word counts stay `Option<u32>` rather than collapsing to plain
//! integers: historically passing 0 has meant "use the default", the same
//! as omitting the flag, and that contract is kept. The resolution happens
//! in one place ([`Config::adjective_count`] / [`Config::noun_count`]) so
//! the rest of the pipeline never sees a zero count.

use std::str::FromStr;

use crate::cli::Cli;
use crate::error::{PassgenError, Result};

pub const DEFAULT_ADJECTIVES: u32 = 2;
pub const DEFAULT_NOUNS: u32 = 1;

/// Where the finished passphrase is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Clipboard,
    Print,
}

impl FromStr for OutputMode {
    type Err = PassgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "clipboard" => Ok(Self::Clipboard),
            "print" => Ok(Self::Print),
            other => Err(PassgenError::UnknownOutput(other.to_string())),
        }
    }
}

/// Options for one generation run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested adjective count; `None` and `Some(0)` both mean default
    pub adjectives: Option<u32>,

    /// Requested noun count; `None` and `Some(0)` both mean default
    pub nouns: Option<u32>,

    /// Restrict the corpus to builtin word lists
    pub builtins_only: bool,

    /// Append a random number (0-127) to the passphrase
    pub append_number: bool,

    /// Delivery target for the result
    pub output: OutputMode,
}

impl Config {
    /// Build a `Config` from parsed CLI arguments.
    ///
    /// Fails with [`PassgenError::UnknownOutput`] if `--output` names
    /// anything other than "clipboard" or "print".
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            adjectives: cli.adjectives,
            nouns: cli.nouns,
            builtins_only: cli.builtins,
            append_number: cli.number,
            output: cli.output.parse()?,
        })
    }

    /// Effective adjective count per noun block.
    pub fn adjective_count(&self) -> u32 {
        match self.adjectives {
            Some(n) if n > 0 => n,
            _ => DEFAULT_ADJECTIVES,
        }
    }

    /// Effective number of noun blocks.
    pub fn noun_count(&self) -> u32 {
        match self.nouns {
            Some(n) if n > 0 => n,
            _ => DEFAULT_NOUNS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adjectives: None,
            nouns: None,
            builtins_only: false,
            append_number: false,
            output: OutputMode::Clipboard,
        }
    }
}
