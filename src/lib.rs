//! passgen — human-memorable passphrase generation from word lists.
//!
//! The crate is a single linear pipeline: load the word corpus from disk,
//! draw a sample plan of random indices, format the words into one string,
//! and hand it to an output sink. [`generate`] runs everything up to (but
//! not including) the sink, so no side effect happens unless the whole
//! pipeline succeeded.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod formatter;
pub mod output;
pub mod sampler;

use config::Config;
use corpus::CorpusPaths;
use error::Result;

/// Generate a passphrase for `config`, loading words from `paths`.
pub fn generate(config: &Config, paths: &CorpusPaths) -> Result<String> {
    let corpus = corpus::load(paths, config.builtins_only)?;
    let plan = sampler::build_plan(config, &corpus)?;
    let number = config.append_number.then(sampler::random_suffix);
    formatter::format_passphrase(&corpus, &plan, number)
}
