//! Text normalization, section segmentation, extraction and scoring

pub mod analyzer;
pub mod candidate;
pub mod document;
pub mod experience;
pub mod matcher;
pub mod skill_extractor;
pub mod skill_set;
pub mod text_processor;
pub mod vocabulary;
