//! Configuration management for the resume extractor

use crate::error::{Result, ResumeExtractorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Characters of normalized text kept as a diagnostic sample
    pub sample_chars: usize,
    /// Skill count at which skill confidence reaches 100%
    pub skill_saturation: usize,
    /// Experience length (chars) at which experience confidence reaches 100%
    pub experience_saturation: usize,
    /// Leading lines searched for the candidate name
    pub name_scan_lines: usize,
}

/// Additions to the built-in vocabulary and header lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub extra_skills: Vec<String>,
    pub extra_skills_headers: Vec<String>,
    pub extra_experience_headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_chars: 500,
            skill_saturation: 20,
            experience_saturation: 200,
            name_scan_lines: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeExtractorError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeExtractorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-extractor")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.skill_saturation == 0 || self.analysis.experience_saturation == 0 {
            return Err(ResumeExtractorError::Configuration(
                "Confidence saturation values must be greater than zero".to_string(),
            ));
        }
        if self.analysis.name_scan_lines == 0 {
            return Err(ResumeExtractorError::Configuration(
                "name_scan_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
