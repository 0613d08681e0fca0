//! Integration tests for the resume extractor

use resume_extractor::config::Config;
use resume_extractor::input::InputManager;
use resume_extractor::jobs::{JobCatalog, JobSkillProfile};
use resume_extractor::output::formatter::{JsonFormatter, OutputFormatter};
use resume_extractor::output::report::{AnalysisReport, Report, ReportMetadata, SectionSummary};
use resume_extractor::processing::analyzer::Analyzer;
use resume_extractor::processing::vocabulary::HeaderKind;
use resume_extractor::ResumeExtractorError;
use std::path::Path;

async fn read(path: &str) -> String {
    InputManager::new().extract_text(Path::new(path)).await.unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = read("tests/fixtures/sample_resume.txt").await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = read("tests/fixtures/sample_resume.md").await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(text.lines().any(|line| line == "Skills"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let result = InputManager::new()
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(result, Err(ResumeExtractorError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = InputManager::new()
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(matches!(result, Err(ResumeExtractorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_blank_document() {
    let result = InputManager::new()
        .extract_text(Path::new("tests/fixtures/blank.txt"))
        .await;
    let err = result.unwrap_err();
    assert!(matches!(err, ResumeExtractorError::EmptyDocument(_)));
    assert!(err.is_input_error());
}

#[tokio::test]
async fn test_analyze_sectioned_resume() {
    let text = read("tests/fixtures/sample_resume.txt").await;
    let analyzer = Analyzer::with_defaults().unwrap();

    let sections = analyzer.segment(&text);
    let headers: Vec<&str> = sections.in_document_order().into_iter().map(|s| s.key.as_str()).collect();
    assert_eq!(headers, vec!["skills", "experience"]);
    assert_eq!(sections.get("skills").unwrap().kind, HeaderKind::Skills);

    let result = analyzer.analyze(&text);
    for skill in ["react", "node.js", "typescript", "postgresql", "docker", "aws"] {
        assert!(result.skills.identified.contains(skill), "missing {}", skill);
    }
    assert!(result.experience.content.starts_with("2019 - present senior software engineer, initech"));
    assert!(result.experience.content.contains("globex"));
    assert_eq!(result.experience.confidence, 100.0);
    assert!(result.skills.confidence > 0.0 && result.skills.confidence <= 100.0);
    assert!(result.raw_text_sample.starts_with("john doe john.doe@example.com"));

    let candidate = analyzer.extract_candidate_info(&text);
    assert_eq!(candidate.name.as_deref(), Some("John Doe"));
    assert_eq!(candidate.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(candidate.phone.as_deref(), Some("(555) 123-4567"));
}

#[tokio::test]
async fn test_markdown_and_text_agree_on_skills() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let from_md = analyzer.analyze(&read("tests/fixtures/sample_resume.md").await);

    for skill in ["react", "node.js", "typescript", "aws"] {
        assert!(from_md.skills.identified.contains(skill), "missing {}", skill);
    }
    assert!(from_md.experience.content.contains("initech"));
}

#[tokio::test]
async fn test_experience_fallback_without_headers() {
    let text = read("tests/fixtures/no_headers.txt").await;
    let analyzer = Analyzer::with_defaults().unwrap();

    assert!(analyzer.segment(&text).is_empty());

    let result = analyzer.analyze(&text);
    assert!(result.experience.content.starts_with("2018 - 2021 data analyst at umbrella"));
    assert!(result.experience.content.contains("2021 - present lead analyst at hooli"));
    for skill in ["tableau", "python", "sql"] {
        assert!(result.skills.identified.contains(skill), "missing {}", skill);
    }
}

#[tokio::test]
async fn test_configured_vocabulary_extends_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[vocabulary]\nextra_skills = [\"Billing Systems\"]\nextra_experience_headers = [\"Employment\"]\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let analyzer = Analyzer::new(&config).unwrap();
    let text = "Employment\nBuilt billing systems in Rust.\n";

    let result = analyzer.analyze(text);
    assert!(result.skills.identified.contains("billing systems"));
    assert!(result.skills.identified.contains("rust"));
    assert_eq!(result.experience.content, "built billing systems in rust.");
}

#[tokio::test]
async fn test_rank_job_catalog() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let candidate = analyzer
        .analyze(&read("tests/fixtures/sample_resume.txt").await)
        .skills
        .identified;

    let mut catalog = JobCatalog::load(Path::new("tests/fixtures/jobs.json")).unwrap();
    assert_eq!(catalog.len(), 3);
    catalog.fill_missing_skills(&analyzer);

    let rankings = catalog.rank(&candidate);
    let titles: Vec<&str> = rankings.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Backend Engineer", "Frontend Engineer", "Data Scientist"]);

    assert_eq!(rankings[0].report.score, 100.0);
    assert_eq!(rankings[1].report.missing, vec!["css".to_string()]);
    assert_eq!(rankings[2].report.score, 0.0);
}

#[tokio::test]
async fn test_match_against_job_description() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let candidate = analyzer
        .analyze(&read("tests/fixtures/sample_resume.txt").await)
        .skills
        .identified;

    let job_text = read("tests/fixtures/job_description.md").await;
    let job = JobSkillProfile::from_description("Platform Engineer", None, job_text, &analyzer);
    assert!(job.required_skills.contains("kubernetes"));

    let report = job.score(&candidate);
    assert!(report.missing.contains(&"kubernetes".to_string()));
    assert!(report.matched.iter().any(|m| m.required == "typescript"));
    assert!(report.matched.iter().any(|m| m.required == "docker"));
    assert!(report.score > 0.0 && report.score < 100.0);
}

#[tokio::test]
async fn test_json_report_for_resume_file() {
    let path = "tests/fixtures/sample_resume.txt";
    let text = read(path).await;
    let analyzer = Analyzer::with_defaults().unwrap();

    let report = Report::Analysis(AnalysisReport {
        result: analyzer.analyze(&text),
        candidate: analyzer.extract_candidate_info(&text),
        sections: SectionSummary::from_sections(&analyzer.segment(&text)),
        metadata: ReportMetadata::new(path),
    });

    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["experience"]["confidence"], 100.0);
    assert_eq!(value["sections"][0]["header"], "skills");
    assert_eq!(value["sections"][0]["kind"], "Skills");
    assert_eq!(value["metadata"]["source_file"], path);
}
