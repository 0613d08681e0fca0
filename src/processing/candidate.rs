//! Candidate contact details pulled from raw resume text

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CandidateInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Best-effort email, phone and name detection.
///
/// Works on the raw text because the name heuristic needs the original line
/// breaks and casing. Only the shape of the text is checked: a job title on
/// the first line will be reported as the name.
pub struct CandidateInfoExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    name_scan_lines: usize,
}

impl CandidateInfoExtractor {
    pub fn new(name_scan_lines: usize) -> Result<Self> {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?;

        let phone_regex =
            Regex::new(r"(?:\+?1[-. ]?)?(?:\(\d{3}\)|\b\d{3})[-. ]?\d{3}[-. ]?\d{4}\b")?;

        Ok(Self {
            email_regex,
            phone_regex,
            name_scan_lines,
        })
    }

    pub fn extract(&self, raw: &str) -> CandidateInfo {
        let email = self.email_regex.find(raw).map(|m| m.as_str().to_string());
        let phone = self.phone_regex.find(raw).map(|m| m.as_str().to_string());
        let name = self.find_name(raw, email.as_deref(), phone.as_deref());

        CandidateInfo { name, email, phone }
    }

    fn find_name(&self, raw: &str, email: Option<&str>, phone: Option<&str>) -> Option<String> {
        raw.lines()
            .take(self.name_scan_lines)
            .map(str::trim)
            .find(|line| {
                line.chars().count() > 3
                    && !email.is_some_and(|e| line.contains(e))
                    && !phone.is_some_and(|p| line.contains(p))
                    && !self.email_regex.is_match(line)
                    && !self.phone_regex.is_match(line)
            })
            .map(str::to_string)
    }
}

impl Default for CandidateInfoExtractor {
    fn default() -> Self {
        Self::new(3).expect("built-in contact patterns are valid")
    }
}
