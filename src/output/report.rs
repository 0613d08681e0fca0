//! Report structures handed to the output formatters

use crate::jobs::JobRanking;
use crate::processing::analyzer::ExtractionResult;
use crate::processing::candidate::CandidateInfo;
use crate::processing::document::SectionMap;
use crate::processing::matcher::MatchReport;
use crate::processing::skill_set::SkillSet;
use crate::processing::vocabulary::HeaderKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything the CLI can print or save
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Analysis(AnalysisReport),
    Candidate(CandidateReport),
    Match(MatchSummary),
    Ranking(RankingReport),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source_file: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            generated_at: Utc::now(),
        }
    }
}

/// Extraction result plus what the detailed views need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: ExtractionResult,
    pub candidate: CandidateInfo,
    pub sections: Vec<SectionSummary>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSummary {
    pub header: String,
    pub kind: HeaderKind,
    pub characters: usize,
}

impl SectionSummary {
    /// Sections in the order they appear in the document
    pub fn from_sections(sections: &SectionMap) -> Vec<Self> {
        sections
            .in_document_order()
            .into_iter()
            .map(|s| Self {
                header: s.key.clone(),
                kind: s.kind,
                characters: s.body.chars().count(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub candidate: CandidateInfo,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Job title, job file, or "command line" for an explicit skill list
    pub job: String,
    pub candidate_skills: SkillSet,
    pub required_skills: SkillSet,
    pub report: MatchReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub candidate_skills: SkillSet,
    pub rankings: Vec<JobRanking>,
    pub metadata: ReportMetadata,
}
