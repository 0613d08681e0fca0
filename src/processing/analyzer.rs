//! Analysis entry point combining all extractors

use crate::config::{AnalysisConfig, Config};
use crate::error::Result;
use crate::processing::candidate::{CandidateInfo, CandidateInfoExtractor};
use crate::processing::document::{SectionMap, SectionSegmenter};
use crate::processing::experience::ExperienceExtractor;
use crate::processing::matcher::{MatchReport, MatchScorer};
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::skill_set::SkillSet;
use crate::processing::text_processor::{normalize, text_sample};
use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Everything extracted from one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub skills: SkillsBlock,
    pub experience: ExperienceBlock,
    /// Start of the normalized text, for diagnostics
    pub raw_text_sample: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsBlock {
    pub identified: SkillSet,
    /// 0..=100, grows with the number of skills found
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    pub content: String,
    /// 0..=100, grows with the length of the content
    pub confidence: f64,
}

/// Holds the compiled vocabulary and patterns; build once, analyze many documents.
///
/// Analysis is a pure function of the input text, so one analyzer can be
/// shared across threads.
pub struct Analyzer {
    settings: AnalysisConfig,
    vocabulary: Vocabulary,
    segmenter: SectionSegmenter,
    skill_extractor: SkillExtractor,
    experience_extractor: ExperienceExtractor,
    candidate_extractor: CandidateInfoExtractor,
}

impl Analyzer {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_vocabulary(
            Vocabulary::from_config(&config.vocabulary),
            config.analysis.clone(),
        )
    }

    pub fn with_vocabulary(vocabulary: Vocabulary, settings: AnalysisConfig) -> Result<Self> {
        let analyzer = Self {
            segmenter: SectionSegmenter::new(&vocabulary)?,
            skill_extractor: SkillExtractor::new(&vocabulary)?,
            experience_extractor: ExperienceExtractor::new(&vocabulary)?,
            candidate_extractor: CandidateInfoExtractor::new(settings.name_scan_lines)?,
            vocabulary,
            settings,
        };
        log::debug!(
            "Analyzer ready with {} vocabulary terms",
            analyzer.skill_extractor.vocabulary_size()
        );
        Ok(analyzer)
    }

    /// Built-in vocabulary and default settings
    pub fn with_defaults() -> Result<Self> {
        Self::with_vocabulary(Vocabulary::default(), AnalysisConfig::default())
    }

    /// Normalize, segment, and extract skills and experience from `raw`
    pub fn analyze(&self, raw: &str) -> ExtractionResult {
        let sections = self.segment(raw);
        let normalized = normalize(raw);

        let skills = self.skill_extractor.extract(&normalized, &sections);
        let experience = self.experience_extractor.extract(&normalized, &sections);

        let skill_confidence = saturating_confidence(skills.len(), self.settings.skill_saturation);
        let experience_confidence = saturating_confidence(
            experience.chars().count(),
            self.settings.experience_saturation,
        );

        log::info!(
            "Extracted {} skills ({:.1}% confidence), {} chars of experience ({:.1}% confidence)",
            skills.len(),
            skill_confidence,
            experience.chars().count(),
            experience_confidence
        );

        ExtractionResult {
            skills: SkillsBlock {
                identified: skills,
                confidence: skill_confidence,
            },
            experience: ExperienceBlock {
                content: experience,
                confidence: experience_confidence,
            },
            raw_text_sample: text_sample(&normalized, self.settings.sample_chars),
        }
    }

    /// Sections found in `raw`; headers are matched on the un-normalized text
    pub fn segment(&self, raw: &str) -> SectionMap {
        self.segmenter.segment(raw)
    }

    pub fn extract_candidate_info(&self, raw: &str) -> CandidateInfo {
        self.candidate_extractor.extract(raw)
    }

    pub fn score_match(&self, candidate: &SkillSet, required: &SkillSet) -> MatchReport {
        MatchScorer::evaluate(&candidate.to_vec(), &required.to_vec())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

/// `min(1, amount / saturation) * 100`, rounded to one decimal
pub fn saturating_confidence(amount: usize, saturation: usize) -> f64 {
    if amount == 0 || saturation == 0 {
        return 0.0;
    }
    let ratio = (amount as f64 / saturation as f64).min(1.0);
    (ratio * 1000.0).round() / 10.0
}
