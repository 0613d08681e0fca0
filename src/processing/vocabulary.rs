//! Fixed skill vocabulary and section header lists
//!
//! These lists are the only process-wide state of the analyzer. They are
//! built once, optionally extended from configuration, and handed to the
//! extractors at construction time.

use crate::config::VocabularyConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which extractor a section header feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderKind {
    Experience,
    Skills,
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderKind::Experience => write!(f, "Experience"),
            HeaderKind::Skills => write!(f, "Skills"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    skills: Vec<String>,
    experience_headers: Vec<String>,
    skills_headers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            default_skills(),
            default_experience_headers(),
            default_skills_headers(),
        )
    }
}

impl Vocabulary {
    /// Build a vocabulary from explicit lists. Entries are lower-cased and
    /// deduplicated, keeping the first occurrence so declared order survives.
    pub fn new<S: AsRef<str>>(
        skills: impl IntoIterator<Item = S>,
        experience_headers: impl IntoIterator<Item = S>,
        skills_headers: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            skills: dedup_lowercase(skills),
            experience_headers: dedup_lowercase(experience_headers),
            skills_headers: dedup_lowercase(skills_headers),
        }
    }

    /// Built-in lists extended with whatever the config file adds
    pub fn from_config(config: &VocabularyConfig) -> Self {
        let mut vocabulary = Self::default();
        vocabulary.extend(
            &config.extra_skills,
            &config.extra_experience_headers,
            &config.extra_skills_headers,
        );
        vocabulary
    }

    pub fn extend(
        &mut self,
        skills: &[String],
        experience_headers: &[String],
        skills_headers: &[String],
    ) {
        self.skills = dedup_lowercase(self.skills.iter().chain(skills));
        self.experience_headers =
            dedup_lowercase(self.experience_headers.iter().chain(experience_headers));
        self.skills_headers = dedup_lowercase(self.skills_headers.iter().chain(skills_headers));
    }

    /// Same vocabulary without one skill term
    pub fn without_skill(&self, term: &str) -> Self {
        let term = term.to_lowercase();
        Self {
            skills: self.skills.iter().filter(|s| **s != term).cloned().collect(),
            ..self.clone()
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience_headers(&self) -> &[String] {
        &self.experience_headers
    }

    pub fn skills_headers(&self) -> &[String] {
        &self.skills_headers
    }

    /// All headers, experience group first, with the group each belongs to
    pub fn headers(&self) -> impl Iterator<Item = (&str, HeaderKind)> {
        self.experience_headers
            .iter()
            .map(|h| (h.as_str(), HeaderKind::Experience))
            .chain(
                self.skills_headers
                    .iter()
                    .map(|h| (h.as_str(), HeaderKind::Skills)),
            )
    }
}

fn dedup_lowercase<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

fn default_skills() -> Vec<&'static str> {
    vec![
        // Programming languages
        "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "swift", "go",
        "rust", "kotlin", "scala", "perl", "shell", "bash", "powershell", "vba", "matlab",
        "r programming", "objective-c", "groovy", "haskell", "lua", "clojure", "elixir", "dart",
        "fortran", "cobol", "assembly", "delphi", "pascal",
        // Web development
        "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
        "rails", "asp.net", "spring boot", "laravel", "symfony", "jquery", "bootstrap",
        "tailwind css", "material ui", "redux", "next.js", "nuxt.js", "svelte", "webpack",
        "babel", "pwa", "graphql", "rest api", "soap", "xml", "json", "seo",
        // Data science and databases
        "machine learning", "data analysis", "deep learning", "nlp", "data mining", "pandas",
        "numpy", "scikit-learn", "tensorflow", "pytorch", "r", "statistics", "tableau",
        "power bi", "sql", "mysql", "postgresql", "mongodb", "oracle", "sqlite", "nosql",
        "redis", "elasticsearch", "cassandra", "mariadb", "ms sql server", "hadoop", "spark",
        "hive", "data warehouse", "etl", "data modeling", "data visualization", "big data", "ai",
        // DevOps and cloud
        "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd", "jenkins", "terraform",
        "ansible", "git", "github", "gitlab", "devops", "devsecops", "infrastructure as code",
        "cloud computing", "serverless", "microservices", "containers", "virtualization",
        "vmware", "linux", "unix", "windows server", "networking", "cybersecurity", "security",
        "penetration testing", "firewall", "encryption", "ssl/tls", "vpn",
        // Mobile and desktop
        "android", "ios", "react native", "flutter", "xamarin", "mobile development",
        "app development", "winforms", "wpf", "uwp", "electron", "qt", "gtk",
        "desktop applications", "mobile apps",
        // Project management and tools
        "jira", "confluence", "trello", "asana", "scrum", "agile", "kanban", "waterfall",
        "prince2", "pmp", "msp", "project management", "product management", "slack",
        "microsoft teams", "microsoft office", "excel", "word", "powerpoint", "visio", "adobe",
        "photoshop", "illustrator", "figma", "sketch",
        // Soft skills
        "leadership", "communication", "teamwork", "problem solving", "critical thinking",
        "time management", "collaboration", "organization", "analytical skills",
        "attention to detail", "creativity", "adaptability", "flexibility",
        "interpersonal skills", "conflict resolution", "decision making", "strategic thinking",
        "negotiation", "customer service", "presentation skills", "mentoring",
    ]
}

fn default_experience_headers() -> Vec<&'static str> {
    vec![
        "experience",
        "work experience",
        "employment history",
        "work history",
        "professional experience",
        "career",
        "professional background",
    ]
}

fn default_skills_headers() -> Vec<&'static str> {
    vec![
        "skills", "technical skills", "core competencies", "proficiencies", "expertise",
        "competencies", "technical proficiencies", "key skills", "skill set", "technologies",
        "tech stack", "languages", "programming languages", "frameworks", "tools", "software",
        "platforms", "qualifications", "professional skills", "technical expertise",
        "areas of expertise", "strengths", "capabilities", "relevant skills",
        "professional competencies", "specialties", "specializations", "key strengths",
        "abilities", "key capabilities", "technologies used", "technical tools", "soft skills",
        "hard skills", "knowledge areas", "computer skills",
    ]
}
