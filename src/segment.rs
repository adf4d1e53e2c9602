//! Rule-driven sentence boundary detection.
//!
//! The segmenter scans for terminal punctuation runs and decides per
//! candidate whether a sentence ends there. Abbreviations that must not
//! break a sentence are linguistic data, loaded from a rules file rather
//! than hardcoded; the data directory is taken from [`DATA_DIR_ENV`] or
//! defaults to `segmenter_data` in the working directory. A missing
//! rules file is fatal; there is no fallback tokenizer.

use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the directory holding the rules data.
pub const DATA_DIR_ENV: &str = "WSCRIBE_SEGMENTER_DATA";

const DEFAULT_DATA_DIR: &str = "segmenter_data";
const RULES_FILE: &str = "english.txt";

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("sentence rules not found at {}; set {DATA_DIR_ENV} to a directory containing {RULES_FILE}", path.display())]
    MissingRules { path: PathBuf },
    #[error("read sentence rules at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("compile boundary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled boundary detector: the terminal-punctuation pattern plus the
/// set of abbreviations whose trailing period never ends a sentence.
#[derive(Debug)]
pub struct SentenceRules {
    abbreviations: HashSet<String>,
    boundary: Regex,
}

impl SentenceRules {
    /// Parse rules from raw file content: one abbreviation per line,
    /// `#` starts a comment, trailing periods are ignored, matching is
    /// case-insensitive.
    pub fn parse(raw: &str) -> Result<Self, SegmentError> {
        let abbreviations = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.trim_end_matches('.').to_ascii_lowercase())
            .collect();
        let boundary = Regex::new(r"[.!?…]+")?;
        Ok(Self {
            abbreviations,
            boundary,
        })
    }

    pub fn load(dir: &Path) -> Result<Self, SegmentError> {
        let path = dir.join(RULES_FILE);
        if !path.exists() {
            return Err(SegmentError::MissingRules { path });
        }
        let raw = fs::read_to_string(&path).map_err(|source| SegmentError::Io { path, source })?;
        Self::parse(&raw)
    }

    /// Load from `$WSCRIBE_SEGMENTER_DATA`, falling back to the local
    /// `segmenter_data` directory.
    pub fn load_default() -> Result<Self, SegmentError> {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::load(&dir)
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .contains(&word.trim_matches('.').to_ascii_lowercase())
    }
}

/// Split `text` into ordered, trimmed, non-empty sentences. Fragments
/// carrying no alphanumeric content (stray symbols after a boundary,
/// like the narration's closing musical note) are folded into the
/// preceding sentence instead of standing alone.
pub fn split_sentences(text: &str, rules: &SentenceRules) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut start = 0;

    for mat in rules.boundary.find_iter(text) {
        if !is_boundary(text, mat.start(), mat.end(), mat.as_str(), rules) {
            continue;
        }
        push_fragment(&mut sentences, &text[start..mat.end()]);
        start = mat.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn is_boundary(text: &str, start: usize, end: usize, punct: &str, rules: &SentenceRules) -> bool {
    // Terminal punctuation must close a token: periods inside "e.g" or
    // "media(audio/video)" style runs are not candidates.
    match text[end..].chars().next() {
        None => {}
        Some(next) if next.is_whitespace() => {}
        Some(_) => return false,
    }

    let is_ellipsis = punct.contains('…') || (punct.len() > 1 && punct.chars().all(|c| c == '.'));
    if is_ellipsis {
        // An ellipsis only ends a sentence when the text resumes with a
        // capitalized word (or not at all).
        let rest = text[end..].trim_start();
        return rest.is_empty() || rest.chars().next().is_some_and(char::is_uppercase);
    }

    if punct == "." {
        let word = preceding_word(text, start);
        if rules.is_abbreviation(&word) {
            return false;
        }
    }

    true
}

fn preceding_word(text: &str, end: usize) -> String {
    text[..end]
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '.')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }

    let has_content = fragment.chars().any(char::is_alphanumeric);
    match sentences.last_mut() {
        Some(last) if !has_content => {
            last.push(' ');
            last.push_str(fragment);
        }
        _ => sentences.push(fragment.to_string()),
    }
}
