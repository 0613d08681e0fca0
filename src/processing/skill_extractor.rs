//! Skill extraction: section splitting, vocabulary lookup, list and phrase mining

use crate::error::{Result, ResumeExtractorError};
use crate::processing::document::SectionMap;
use crate::processing::skill_set::SkillSet;
use crate::processing::text_processor::normalize;
use crate::processing::vocabulary::Vocabulary;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

/// Fragments must be longer than this to count as a skill
const MIN_FRAGMENT_CHARS: usize = 2;
/// List items must be shorter than this to count as a skill
const MAX_LIST_ITEM_CHARS: usize = 50;

/// Finds skills in one document.
///
/// Every source of evidence contributes to one union; nothing here fails
/// once the extractor is built.
pub struct SkillExtractor {
    vocabulary_matcher: AhoCorasick,
    vocabulary: Vec<String>,
    skills_headers: Vec<String>,
    section_splitter: Regex,
    list_marker: Regex,
    list_boundary: Regex,
    phrase_patterns: Vec<Regex>,
    phrase_splitter: Regex,
}

impl SkillExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let vocabulary_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard) // overlapping search needs standard semantics
            .build(vocabulary.skills())
            .map_err(|e| {
                ResumeExtractorError::Extraction(format!("Failed to build vocabulary matcher: {}", e))
            })?;

        let phrase_patterns = [
            r"proficient (?:in|with) ",
            r"experienced (?:in|with) ",
            r"knowledge of ",
            r"familiar with ",
            r"expertise in ",
        ]
        .iter()
        // the clause runs to the next '.', ',' or newline; its first character is taken unconditionally
        .map(|intro| Regex::new(&format!(r"(?i){}([^\n][^.,\n]*)", intro)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            vocabulary_matcher,
            vocabulary: vocabulary.skills().to_vec(),
            skills_headers: vocabulary.skills_headers().to_vec(),
            section_splitter: Regex::new(r"[,;•\n]")?,
            list_marker: Regex::new(r"(?:•|\*|\d+\.) ")?,
            list_boundary: Regex::new(r"•|\* |\d+\.")?,
            phrase_patterns,
            phrase_splitter: Regex::new(r",|\sand\s")?,
        })
    }

    /// Union of all skill evidence in `normalized` and the skills-type sections
    pub fn extract(&self, normalized: &str, sections: &SectionMap) -> SkillSet {
        let mut skills = SkillSet::new();

        skills.extend(self.from_sections(sections));
        skills.extend(self.from_vocabulary(normalized));
        skills.extend(self.from_lists(normalized));
        skills.extend(self.from_phrases(normalized));

        log::debug!("Extracted {} skills", skills.len());
        skills
    }

    /// Split every skills-type section body into candidate fragments
    pub fn from_sections(&self, sections: &SectionMap) -> Vec<String> {
        let mut found = Vec::new();

        for header in &self.skills_headers {
            let Some(section) = sections.get(header) else {
                continue;
            };
            log::debug!("Found skills section with header: {}", header);

            found.extend(
                self.section_splitter
                    .split(&section.raw_body)
                    .map(normalize)
                    .filter(|s| s.chars().count() > MIN_FRAGMENT_CHARS),
            );
        }

        found
    }

    /// Vocabulary terms that occur with a word boundary on both sides
    pub fn from_vocabulary(&self, normalized: &str) -> Vec<String> {
        let mut hits = vec![false; self.vocabulary.len()];

        for mat in self.vocabulary_matcher.find_overlapping_iter(normalized) {
            let id = mat.pattern().as_usize();
            if !hits[id]
                && is_word_boundary(normalized, mat.start())
                && is_word_boundary(normalized, mat.end())
            {
                hits[id] = true;
            }
        }

        self.vocabulary
            .iter()
            .zip(hits)
            .filter_map(|(term, hit)| hit.then(|| term.clone()))
            .collect()
    }

    /// Items of bulleted (`•`, `* `) or numbered (`1.`) lists
    pub fn from_lists(&self, normalized: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut pos = 0;

        while let Some(marker) = self.list_marker.find_at(normalized, pos) {
            let item_start = marker.end();
            let Some(first) = normalized[item_start..].chars().next() else {
                break;
            };
            // an item holds at least one character before the next marker can end it
            let item_end = self
                .list_boundary
                .find_at(normalized, item_start + first.len_utf8())
                .map(|m| m.start())
                .unwrap_or(normalized.len());

            let item = normalized[item_start..item_end].trim();
            let len = item.chars().count();
            if len > MIN_FRAGMENT_CHARS && len < MAX_LIST_ITEM_CHARS {
                items.push(item.to_string());
            }
            pos = item_end;
        }

        items
    }

    /// Clauses introduced by "proficient in", "familiar with" and similar
    pub fn from_phrases(&self, normalized: &str) -> Vec<String> {
        let mut found = Vec::new();

        for pattern in &self.phrase_patterns {
            for caps in pattern.captures_iter(normalized) {
                let Some(clause) = caps.get(1) else {
                    continue;
                };
                let clause = clause.as_str().trim();
                if clause.chars().count() <= MIN_FRAGMENT_CHARS {
                    continue;
                }
                found.extend(
                    self.phrase_splitter
                        .split(clause)
                        .map(str::trim)
                        .filter(|s| s.chars().count() > MIN_FRAGMENT_CHARS)
                        .map(str::to_string),
                );
            }
        }

        found
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Same rule as a regex `\b`: word-ness differs on the two sides of `idx`
fn is_word_boundary(text: &str, idx: usize) -> bool {
    let before = text[..idx].chars().next_back().is_some_and(is_word_char);
    let after = text[idx..].chars().next().is_some_and(is_word_char);
    before != after
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::SectionSegmenter;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&Vocabulary::default()).unwrap()
    }

    fn extract(raw: &str) -> SkillSet {
        let vocabulary = Vocabulary::default();
        let sections = SectionSegmenter::new(&vocabulary).unwrap().segment(raw);
        extractor().extract(&normalize(raw), &sections)
    }

    #[test]
    fn test_skills_section_split() {
        let skills = extract("Jane Doe\nSkills\nPython, Docker, Communication\n");
        assert_eq!(skills.to_vec(), vec!["communication", "docker", "python"]);
    }

    #[test]
    fn test_section_fragments_bypass_vocabulary() {
        let skills = extract("Skills:\nBasket weaving; Kite flying\n• Yodeling\nab\n");
        assert!(skills.contains("basket weaving"));
        assert!(skills.contains("kite flying"));
        assert!(skills.contains("yodeling"));
        assert!(!skills.contains("ab"));
    }

    #[test]
    fn test_vocabulary_word_boundaries() {
        let found = extractor().from_vocabulary("built services in golang and rust. used sql daily");
        assert!(found.contains(&"rust".to_string()));
        assert!(found.contains(&"sql".to_string()));
        // "go" only appears inside "golang"
        assert!(!found.contains(&"go".to_string()));
    }

    #[test]
    fn test_vocabulary_multi_word_and_punctuated_terms() {
        let found = extractor().from_vocabulary("node.js, machine learning and ci/cd pipelines");
        assert!(found.contains(&"node.js".to_string()));
        assert!(found.contains(&"machine learning".to_string()));
        assert!(found.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_overlapping_vocabulary_terms() {
        let found = extractor().from_vocabulary("react native apps");
        assert!(found.contains(&"react".to_string()));
        assert!(found.contains(&"react native".to_string()));
    }

    #[test]
    fn test_list_items() {
        let items = extractor().from_lists("highlights • kubernetes operators • ab * grpc services 1. incident response");
        assert!(items.contains(&"kubernetes operators".to_string()));
        assert!(items.contains(&"grpc services".to_string()));
        assert!(items.contains(&"incident response".to_string()));
        assert!(!items.contains(&"ab".to_string()));
    }

    #[test]
    fn test_long_list_items_are_dropped() {
        let long = "x".repeat(60);
        let items = extractor().from_lists(&format!("• {} • short item", long));
        assert_eq!(items, vec!["short item".to_string()]);
    }

    #[test]
    fn test_phrase_patterns() {
        let text = "proficient in rust and haskell. familiar with terraform, ansible. knowledge of ux";
        let found = extractor().from_phrases(text);
        assert!(found.contains(&"rust".to_string()));
        assert!(found.contains(&"haskell".to_string()));
        assert!(found.contains(&"terraform".to_string()));
        // clause too short
        assert!(!found.contains(&"ux".to_string()));
    }

    #[test]
    fn test_removing_vocabulary_term_never_grows_result() {
        let raw = "Experienced with Docker. Uses Python, SQL and Kubernetes daily.";
        let vocabulary = Vocabulary::default();
        let sections = SectionSegmenter::new(&vocabulary).unwrap().segment(raw);
        let full = SkillExtractor::new(&vocabulary).unwrap().extract(&normalize(raw), &sections);

        for term in ["docker", "python", "sql", "kubernetes", "rust"] {
            let reduced = SkillExtractor::new(&vocabulary.without_skill(term))
                .unwrap()
                .extract(&normalize(raw), &sections);
            assert!(reduced.iter().all(|s| full.contains(s)));
        }
    }

    #[test]
    fn test_no_signal_gives_empty_set() {
        assert!(extract("").is_empty());
        assert!(extract("hello there").is_empty());
    }

    #[test]
    fn test_word_boundary() {
        assert!(is_word_boundary("a b", 1));
        assert!(is_word_boundary("ab", 0));
        assert!(!is_word_boundary("ab", 1));
        assert!(!is_word_boundary("c++ x", 3));
    }

    #[test]
    fn test_vocabulary_terms_ending_in_symbols() {
        let found = extractor().from_vocabulary("built with c++ and node.js on ci/cd");
        assert!(found.contains(&"node.js".to_string()));
        assert!(found.contains(&"ci/cd".to_string()));
        assert!(!found.contains(&"c++".to_string()));

        let found = extractor().from_vocabulary("modern c++17 code");
        assert!(found.contains(&"c++".to_string()));
    }
}
