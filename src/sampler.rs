//! Random index sampling for passphrase generation.
//!
//! All randomness comes from the operating system's CSPRNG via
//! `rand::rngs::OsRng`. A seedable generator is deliberately not used:
//! passphrases must not be predictable from a leaked seed.
//!
//! The sampler produces a [`SamplePlan`], an ordered list of
//! (index, category) draws. The plan for each noun block is the requested
//! number of adjective draws followed by a single noun draw; draws are
//! independent and with replacement, so a word may repeat.

use rand::rngs::OsRng;
use rand::Rng;

use crate::config::Config;
use crate::corpus::{Corpus, ADJECTIVES, NOUNS};
use crate::error::{PassgenError, Result};

/// One pending word draw: an index into the named category's word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub index: usize,
    pub category: String,
}

impl PlanEntry {
    pub fn new(index: usize, category: &str) -> Self {
        Self {
            index,
            category: category.to_string(),
        }
    }
}

/// Ordered draws, consumed by the formatter in emission order.
pub type SamplePlan = Vec<PlanEntry>;

/// Build a sample plan for `config` against `corpus`.
///
/// Fails with [`PassgenError::EmptyCategory`] if the adjectives or nouns
/// list is empty, before any index is drawn.
pub fn build_plan(config: &Config, corpus: &Corpus) -> Result<SamplePlan> {
    let adj_len = nonempty_len(corpus, ADJECTIVES)?;
    let noun_len = nonempty_len(corpus, NOUNS)?;

    let adjectives = config.adjective_count();
    let nouns = config.noun_count();

    let mut plan = Vec::with_capacity((adjectives as usize + 1) * nouns as usize);
    for _ in 0..nouns {
        for _ in 0..adjectives {
            plan.push(PlanEntry::new(random_index(adj_len), ADJECTIVES));
        }
        plan.push(PlanEntry::new(random_index(noun_len), NOUNS));
    }

    Ok(plan)
}

/// Draw the optional passphrase suffix: a uniform 7-bit number, 0-127.
pub fn random_suffix() -> u8 {
    OsRng.gen_range(0..=127)
}

fn nonempty_len(corpus: &Corpus, category: &str) -> Result<usize> {
    match corpus.len_of(category) {
        0 => Err(PassgenError::EmptyCategory(category.to_string())),
        n => Ok(n),
    }
}

fn random_index(len: usize) -> usize {
    OsRng.gen_range(0..len)
}
