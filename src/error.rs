//! Error handling for the resume extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document contains no extractable text: {0}")]
    EmptyDocument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeExtractorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeExtractorError {
    fn from(err: anyhow::Error) -> Self {
        ResumeExtractorError::Extraction(err.to_string())
    }
}

/// Pattern compilation only fails when a configured vocabulary produces a bad regex
impl From<regex::Error> for ResumeExtractorError {
    fn from(err: regex::Error) -> Self {
        ResumeExtractorError::Extraction(format!("Invalid pattern: {}", err))
    }
}

impl ResumeExtractorError {
    /// True for failures caused by the document handed in rather than by the analyzer
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResumeExtractorError::Io(_)
                | ResumeExtractorError::PdfExtraction(_)
                | ResumeExtractorError::DocxExtraction(_)
                | ResumeExtractorError::UnsupportedFormat(_)
                | ResumeExtractorError::EmptyDocument(_)
                | ResumeExtractorError::InvalidInput(_)
        )
    }
}
