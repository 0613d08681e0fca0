//! Skill overlap scoring between a candidate and a job

use crate::processing::skill_set::SkillSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Percentage of required skills satisfied, 0..=100
    pub score: f64,
    pub matched: Vec<MatchedSkill>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub required: String,
    pub candidate: String,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    Exact,
    /// The required skill appears inside a candidate skill
    Contained,
    /// A candidate skill appears inside the required skill
    Contains,
}

/// Case-insensitive exact or substring matching of required skills.
///
/// Containment runs both ways so "leadership" is satisfied by "team
/// leadership" and "postgresql" satisfies "sql". Each required skill counts
/// once no matter how many candidate skills satisfy it.
pub struct MatchScorer;

impl MatchScorer {
    pub fn evaluate<C, R>(candidate: &[C], required: &[R]) -> MatchReport
    where
        C: AsRef<str>,
        R: AsRef<str>,
    {
        if candidate.is_empty() || required.is_empty() {
            log::debug!("Empty skill list, match score is 0");
            return MatchReport {
                score: 0.0,
                matched: Vec::new(),
                missing: required.iter().map(|r| r.as_ref().trim().to_lowercase()).collect(),
            };
        }

        let candidate: Vec<String> = candidate.iter().map(|s| s.as_ref().trim().to_lowercase()).collect();
        let required: Vec<String> = required.iter().map(|s| s.as_ref().trim().to_lowercase()).collect();

        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for skill in &required {
            match Self::find_match(skill, &candidate) {
                Some((candidate_skill, match_type)) => matched.push(MatchedSkill {
                    required: skill.clone(),
                    candidate: candidate_skill.to_string(),
                    match_type,
                }),
                None => missing.push(skill.clone()),
            }
        }

        let score = matched.len() as f64 / required.len() as f64 * 100.0;
        log::debug!("Matched {} of {} required skills: {:.1}%", matched.len(), required.len(), score);

        MatchReport {
            score,
            matched,
            missing,
        }
    }

    fn find_match<'c>(required: &str, candidate: &'c [String]) -> Option<(&'c str, MatchType)> {
        if let Some(exact) = candidate.iter().find(|c| c.as_str() == required) {
            return Some((exact, MatchType::Exact));
        }
        candidate.iter().find_map(|c| {
            if c.contains(required) {
                Some((c.as_str(), MatchType::Contained))
            } else if required.contains(c.as_str()) {
                Some((c.as_str(), MatchType::Contains))
            } else {
                None
            }
        })
    }
}

/// Percentage of `required` satisfied by `candidate`; 0 when either is empty
pub fn score_match(candidate: &SkillSet, required: &SkillSet) -> f64 {
    let candidate = candidate.to_vec();
    let required = required.to_vec();
    MatchScorer::evaluate(&candidate, &required).score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().collect()
    }

    #[test]
    fn test_partial_containment_scenario() {
        let required = set(&["Python", "SQL", "Leadership"]);
        let candidate = set(&["python", "postgresql", "team leadership"]);
        assert_eq!(score_match(&candidate, &required), 100.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let skills = set(&["rust", "go"]);
        assert_eq!(score_match(&skills, &SkillSet::new()), 0.0);
        assert_eq!(score_match(&SkillSet::new(), &skills), 0.0);
        assert_eq!(score_match(&SkillSet::new(), &SkillSet::new()), 0.0);
    }

    #[test]
    fn test_self_match_is_full() {
        let skills = set(&["Rust", "distributed systems", "k8s"]);
        assert_eq!(score_match(&skills, &skills), 100.0);
    }

    #[test]
    fn test_partial_score() {
        let required = ["rust", "haskell", "ocaml", "docker"];
        let candidate = ["Rust ", "DOCKER compose"];
        let report = MatchScorer::evaluate(&candidate, &required);

        assert_eq!(report.score, 50.0);
        assert_eq!(report.missing, vec!["haskell", "ocaml"]);
        assert_eq!(report.matched[0].match_type, MatchType::Exact);
        assert_eq!(report.matched[1].match_type, MatchType::Contained);
        assert_eq!(report.matched[1].candidate, "docker compose");
    }

    #[test]
    fn test_candidate_inside_required() {
        let report = MatchScorer::evaluate(&["java"], &["java spring boot"]);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.matched[0].match_type, MatchType::Contains);
    }

    #[test]
    fn test_required_counted_once() {
        let report = MatchScorer::evaluate(&["aws lambda", "aws s3", "aws"], &["aws", "gcp"]);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.score, 50.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let cases: [(&[&str], &[&str]); 3] = [
            (&["a", "b", "c"], &["a"]),
            (&["x"], &["y", "z"]),
            (&["data", "data science"], &["data", "data", "science"]),
        ];
        for (candidate, required) in cases {
            let score = MatchScorer::evaluate(candidate, required).score;
            assert!((0.0..=100.0).contains(&score));
        }
    }
}
