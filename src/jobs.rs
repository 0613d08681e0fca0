//! Job profiles and the catalog a resume is ranked against

use crate::error::{Result, ResumeExtractorError};
use crate::processing::analyzer::Analyzer;
use crate::processing::matcher::{MatchReport, MatchScorer};
use crate::processing::skill_set::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A job and the skills it requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSkillProfile {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: SkillSet,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl JobSkillProfile {
    pub fn new(title: impl Into<String>, required_skills: SkillSet) -> Self {
        Self {
            title: title.into(),
            company: None,
            description: String::new(),
            required_skills,
            created_at: Utc::now(),
        }
    }

    /// Required skills are whatever the skill extractor finds in the description
    pub fn from_description(
        title: impl Into<String>,
        company: Option<String>,
        description: impl Into<String>,
        analyzer: &Analyzer,
    ) -> Self {
        let description = description.into();
        let required_skills = analyzer.analyze(&description).skills.identified;

        Self {
            title: title.into(),
            company,
            description,
            required_skills,
            created_at: Utc::now(),
        }
    }

    pub fn score(&self, candidate: &SkillSet) -> MatchReport {
        MatchScorer::evaluate(&candidate.to_vec(), &self.required_skills.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRanking {
    pub title: String,
    pub company: Option<String>,
    pub report: MatchReport,
}

/// Job profiles stored as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobCatalog {
    jobs: Vec<JobSkillProfile>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobSkillProfile>) -> Self {
        Self { jobs }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: JobCatalog = serde_json::from_str(&content).map_err(|e| {
            ResumeExtractorError::InvalidInput(format!(
                "Failed to parse job catalog '{}': {}",
                path.display(),
                e
            ))
        })?;
        log::info!("Loaded {} job profiles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Profiles listing no skills get them from their description
    pub fn fill_missing_skills(&mut self, analyzer: &Analyzer) {
        for job in self.jobs.iter_mut().filter(|j| j.required_skills.is_empty()) {
            job.required_skills = analyzer.analyze(&job.description).skills.identified;
            log::debug!(
                "Derived {} required skills for '{}'",
                job.required_skills.len(),
                job.title
            );
        }
    }

    /// Score `candidate` against every profile, best match first
    pub fn rank(&self, candidate: &SkillSet) -> Vec<JobRanking> {
        let mut rankings: Vec<JobRanking> = self
            .jobs
            .iter()
            .map(|job| JobRanking {
                title: job.title.clone(),
                company: job.company.clone(),
                report: job.score(candidate),
            })
            .collect();

        rankings.sort_by(|a, b| b.report.score.total_cmp(&a.report.score));
        rankings
    }

    pub fn jobs(&self) -> &[JobSkillProfile] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
