//! Word corpus loading and merging.
//!
//! The corpus is a mapping from category name ("adjectives", "nouns", plus
//! anything extension modules contribute) to an ordered list of words. It
//! is assembled from JSON files on disk:
//!
//! - every file in the builtin directory is always loaded;
//! - unless restricted to builtins, the extension manifest (a JSON array of
//!   subdirectory names) is read and every file in each named subdirectory
//!   is loaded as well, in manifest order.
//!
//! Each file deserializes to `{ "category": ["word", ...], ... }`. Merging
//! is replace-whole-list: a later file that defines a category already in
//! the corpus replaces that category's list entirely. This is the layering
//! contract that lets an extension module override a builtin word list.
//! Listing order of files within a single directory is OS-dependent, so
//! two files in the same directory should not define the same category.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PassgenError, Result};

/// Category name used for adjective draws.
pub const ADJECTIVES: &str = "adjectives";
/// Category name used for noun draws.
pub const NOUNS: &str = "nouns";

const MANIFEST_FILE: &str = "passgen_modules.json";

/// On-disk shape of a word-list file: category name → list of words.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct WordFile(HashMap<String, Vec<String>>);

/// On-disk shape of the extension manifest: an array of directory names.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Manifest(Vec<String>);

/// Filesystem locations the loader reads from.
///
/// Injected rather than hard-coded so tests can point the loader at
/// fixture directories.
#[derive(Debug, Clone)]
pub struct CorpusPaths {
    /// Directory of word-list files that are always loaded
    pub builtin_dir: PathBuf,

    /// Directory holding the manifest and extension subdirectories
    pub extension_dir: PathBuf,
}

impl CorpusPaths {
    /// The layout relative to a working directory: `words/builtin` and
    /// `words/extension`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let words = root.as_ref().join("words");
        Self {
            builtin_dir: words.join("builtin"),
            extension_dir: words.join("extension"),
        }
    }

    fn manifest_path(&self) -> PathBuf {
        self.extension_dir.join(MANIFEST_FILE)
    }
}

impl Default for CorpusPaths {
    fn default() -> Self {
        Self::under(".")
    }
}

/// Merged word lists, keyed by category name.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    categories: HashMap<String, Vec<String>>,
}

impl Corpus {
    /// Words in `category`, or `None` if the corpus has no such category.
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Number of words in `category`; absent categories count as empty.
    pub fn len_of(&self, category: &str) -> usize {
        self.words(category).map_or(0, <[String]>::len)
    }

    /// Replace `category`'s word list entirely.
    pub fn replace(&mut self, category: String, words: Vec<String>) {
        self.categories.insert(category, words);
    }

    fn absorb_file(&mut self, path: &Path) -> Result<()> {
        let data = fs::read_to_string(path).map_err(|e| PassgenError::load(path, e))?;

        let WordFile(lists) =
            serde_json::from_str(&data).map_err(|e| PassgenError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        for (category, words) in lists {
            self.replace(category, words);
        }
        Ok(())
    }

    fn absorb_dir(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| PassgenError::load(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| PassgenError::load(dir, e))?;
            self.absorb_file(&entry.path())?;
        }
        Ok(())
    }
}

/// Load the full corpus described by `paths`.
///
/// Builtin files are loaded first, then each extension directory named in
/// the manifest, in manifest order. With `builtins_only` the manifest is
/// never touched.
pub fn load(paths: &CorpusPaths, builtins_only: bool) -> Result<Corpus> {
    let mut corpus = Corpus::default();
    corpus.replace(ADJECTIVES.to_string(), Vec::new());
    corpus.replace(NOUNS.to_string(), Vec::new());

    corpus.absorb_dir(&paths.builtin_dir)?;

    if !builtins_only {
        for module in read_manifest(&paths.manifest_path())? {
            corpus.absorb_dir(&paths.extension_dir.join(&module))?;
        }
    }

    Ok(corpus)
}

fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|e| PassgenError::load(path, e))?;
    let Manifest(modules) =
        serde_json::from_str(&data).map_err(|e| PassgenError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(modules)
}
