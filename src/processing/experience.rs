//! Experience extraction

use crate::error::Result;
use crate::processing::document::SectionMap;
use crate::processing::vocabulary::Vocabulary;
use regex::Regex;

const ROLE_KEYWORDS: &[&str] = &[
    "senior",
    "junior",
    "lead",
    "chief",
    "principal",
    "director",
    "manager",
    "engineer",
    "developer",
    "analyst",
    "consultant",
    "specialist",
    "associate",
];

/// Pulls the experience narrative out of a document.
///
/// A dedicated experience section always wins. The header list is walked in
/// its declared order, so with both "Work History" and "Experience" present
/// the "experience" body is returned even if it comes later in the text.
pub struct ExperienceExtractor {
    experience_headers: Vec<String>,
    date_range: Regex,
    date_start: Regex,
    role_start: Regex,
}

impl ExperienceExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            experience_headers: vocabulary.experience_headers().to_vec(),
            date_range: Regex::new(r"(?i)\d{4}\s*-\s*(?:\d{4}|present|current)\s+")?,
            date_start: Regex::new(r"\d{4}\s*-")?,
            role_start: Regex::new(&format!(r"(?i)(?:{})\s+", ROLE_KEYWORDS.join("|")))?,
        })
    }

    pub fn extract(&self, normalized: &str, sections: &SectionMap) -> String {
        if let Some(section) = sections.first_of(&self.experience_headers) {
            log::debug!("Using experience section '{}'", section.key);
            return section.body.clone();
        }

        let mut blocks = self.date_blocks(normalized);
        blocks.extend(self.role_blocks(normalized));
        log::debug!("No experience section, mined {} blocks", blocks.len());

        blocks.join("\n\n").trim().to_string()
    }

    /// "2018 - 2020 ..." up to the next "YYYY -" or end of text
    pub fn date_blocks<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut blocks = Vec::new();
        let mut pos = 0;

        while let Some(range) = self.date_range.find_at(text, pos) {
            let end = self
                .date_start
                .find_at(text, range.end())
                .map(|m| m.start())
                .unwrap_or(text.len());
            blocks.push(&text[range.start()..end]);
            pos = end;
        }

        blocks
    }

    /// A role keyword up to the next blank line or end of text
    pub fn role_blocks<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut blocks = Vec::new();
        let mut pos = 0;

        while let Some(role) = self.role_start.find_at(text, pos) {
            let end = text[role.end()..]
                .find("\n\n")
                .map(|offset| role.end() + offset)
                .unwrap_or(text.len());
            blocks.push(&text[role.start()..end]);
            pos = end;
        }

        blocks
    }
}
