//! Command-line interface definitions for passgen.
//!
//! This module defines the public CLI surface of passgen using `clap`.
//! It contains no application logic and exists solely to describe how
//! users interact with the program from the terminal.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate a human-memorable passphrase from word lists",
    long_about = r#"
passgen builds a passphrase by picking random adjectives and nouns from
word lists on disk, capitalizing each word, and joining them together.

Word lists live under ./words/builtin and are always loaded. Additional
extension modules listed in ./words/extension/passgen_modules.json are
loaded as well unless --builtins is given. A word list defined by a
later-loaded file fully replaces a same-named category.

Typical usage:
  passgen                      two adjectives, one noun, to clipboard
  passgen -a 3 -N 2 -o print   three adjectives per noun, two nouns
  passgen -n                   append a random number 0-127

Randomness comes from the operating system's secure generator; the
output is never reproducible from a seed.
"#
)]
pub struct Cli {
    /// Number of adjectives per noun (default 2; 0 also means default,
    /// negative values are rejected)
    #[arg(short = 'a', long)]
    pub adjectives: Option<u32>,

    /// Number of nouns (default 1; 0 also means default, negative values
    /// are rejected)
    #[arg(short = 'N', long)]
    pub nouns: Option<u32>,

    /// Use only builtin words, skipping extension modules
    #[arg(short = 'b', long)]
    pub builtins: bool,

    /// Append a random number (0-127) to the passphrase
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Where the passphrase goes: "clipboard" or "print"
    #[arg(short = 'o', long, default_value = "clipboard")]
    pub output: String,
}
