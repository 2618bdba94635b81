//! Passphrase formatting.
//!
//! Pure string assembly: resolve each planned draw to its word, force the
//! first character to uppercase (the rest of the word passes through
//! unchanged), and concatenate with no separator. The optional numeric
//! suffix is drawn by the caller so this module stays deterministic and
//! directly testable.

use crate::corpus::Corpus;
use crate::error::{PassgenError, Result};
use crate::sampler::SamplePlan;

/// Assemble the passphrase for `plan` against `corpus`.
///
/// `number`, when present, is appended in decimal with no separator.
/// Fails with [`PassgenError::UnknownCategory`] if a plan entry names a
/// category the corpus does not have, and with
/// [`PassgenError::IndexOutOfRange`] if its index is past the end of the
/// word list.
pub fn format_passphrase(
    corpus: &Corpus,
    plan: &SamplePlan,
    number: Option<u8>,
) -> Result<String> {
    let mut result = String::new();

    for entry in plan {
        let words = corpus
            .words(&entry.category)
            .ok_or_else(|| PassgenError::UnknownCategory(entry.category.clone()))?;
        let word = words
            .get(entry.index)
            .ok_or_else(|| PassgenError::IndexOutOfRange {
                category: entry.category.clone(),
                index: entry.index,
            })?;
        result.push_str(&capitalize(word));
    }

    if let Some(n) = number {
        result.push_str(&n.to_string());
    }

    Ok(result)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::PlanEntry;

    fn fox_corpus() -> Corpus {
        let mut corpus = Corpus::default();
        corpus.replace(
            "adjectives".to_string(),
            vec!["red".to_string(), "big".to_string()],
        );
        corpus.replace("nouns".to_string(), vec!["fox".to_string()]);
        corpus
    }

    fn fixed_plan() -> SamplePlan {
        vec![
            PlanEntry::new(0, "adjectives"),
            PlanEntry::new(0, "nouns"),
        ]
    }

    #[test]
    fn joins_capitalized_words() {
        let out = format_passphrase(&fox_corpus(), &fixed_plan(), None).unwrap();
        assert_eq!(out, "RedFox");
    }

    #[test]
    fn appends_number_when_given() {
        let out = format_passphrase(&fox_corpus(), &fixed_plan(), Some(42)).unwrap();
        assert_eq!(out, "RedFox42");
    }

    #[test]
    fn only_the_first_character_is_forced() {
        assert_eq!(capitalize("fox"), "Fox");
        assert_eq!(capitalize("Fox"), "Fox");
        assert_eq!(capitalize("mcFox"), "McFox");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let plan = vec![PlanEntry::new(5, "nouns")];
        let err = format_passphrase(&fox_corpus(), &plan, None).unwrap_err();
        assert!(matches!(
            err,
            PassgenError::IndexOutOfRange { ref category, index: 5 } if category == "nouns"
        ));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let plan = vec![PlanEntry::new(0, "verbs")];
        let err = format_passphrase(&fox_corpus(), &plan, None).unwrap_err();
        assert!(matches!(err, PassgenError::UnknownCategory(ref c) if c == "verbs"));
    }

    #[test]
    fn no_surrounding_whitespace() {
        let out = format_passphrase(&fox_corpus(), &fixed_plan(), Some(7)).unwrap();
        assert_eq!(out, out.trim());
    }
}
