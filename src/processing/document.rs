//! Section detection: split a document into header -> body regions

use crate::error::Result;
use crate::processing::text_processor::normalize;
use crate::processing::vocabulary::{HeaderKind, Vocabulary};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One detected section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Canonical header key, e.g. `"work experience"`
    pub key: String,
    pub kind: HeaderKind,
    /// Body after normalization
    pub body: String,
    /// Body as it appears in the source, trimmed
    pub raw_body: String,
    /// Byte offsets of `raw_body` in the source text
    pub start_index: usize,
    pub end_index: usize,
}

/// Canonical header key -> section. Absent sections are `None`, never an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: HashMap<String, Section>,
}

impl SectionMap {
    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// First present section while walking `keys` in the given order.
    /// Declaration order decides, not position in the document.
    pub fn first_of<'a, S: AsRef<str>>(&'a self, keys: &[S]) -> Option<&'a Section> {
        keys.iter().find_map(|k| self.sections.get(k.as_ref()))
    }

    /// Sections ordered by where they start in the source
    pub fn in_document_order(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort_by_key(|s| s.start_index);
        sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn insert(&mut self, section: Section) {
        // later occurrences of the same header replace earlier ones
        self.sections.insert(section.key.clone(), section);
    }
}

/// Finds header lines in raw (un-normalized) text.
///
/// A header line holds nothing but a known header phrase, optionally followed
/// by spaces, tabs or colons, and ends in a line break. Matching is
/// case-insensitive.
pub struct SectionSegmenter {
    header_pattern: Option<Regex>,
    kinds: HashMap<String, HeaderKind>,
}

impl SectionSegmenter {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let alternatives: Vec<String> = vocabulary
            .headers()
            .map(|(header, _)| {
                header
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"[ \t]+")
            })
            .collect();

        let header_pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"(?im)^[ \t]*(?P<header>{})[ \t:]*\r?\n",
                alternatives.join("|")
            ))?)
        };

        let kinds = vocabulary
            .headers()
            .map(|(header, kind)| (header.to_string(), kind))
            .collect();

        Ok(Self {
            header_pattern,
            kinds,
        })
    }

    /// Split `text` into sections. Text without headers yields an empty map.
    pub fn segment(&self, text: &str) -> SectionMap {
        let mut sections = SectionMap::default();
        let Some(header_pattern) = &self.header_pattern else {
            return sections;
        };
        let matches: Vec<_> = header_pattern.captures_iter(text).collect();

        for (i, caps) in matches.iter().enumerate() {
            let (Some(whole), Some(header)) = (caps.get(0), caps.name("header")) else {
                continue;
            };
            let key = canonical_key(header.as_str());
            let Some(kind) = self.kinds.get(&key).copied() else {
                continue;
            };

            let body_start = whole.end();
            let body_end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|next| next.start())
                .unwrap_or(text.len());

            let span = &text[body_start..body_end];
            let raw_body = span.trim();
            let start_index = body_start + (span.len() - span.trim_start().len());

            sections.insert(Section {
                key,
                kind,
                body: normalize(raw_body),
                raw_body: raw_body.to_string(),
                start_index,
                end_index: start_index + raw_body.len(),
            });
        }

        log::debug!("Detected {} sections", sections.len());
        sections
    }
}

/// Lower-case, strip trailing colons/whitespace, collapse inner whitespace
pub fn canonical_key(header: &str) -> String {
    header
        .trim()
        .trim_end_matches(|c: char| c == ':' || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
