//! Resume extractor: skills, experience and contact details from resumes

use clap::Parser;
use log::{error, info, warn};
use resume_extractor::cli::{self, Cli, Commands, ConfigAction, RESUME_EXTENSIONS};
use resume_extractor::config::{Config, OutputFormat};
use resume_extractor::input::InputManager;
use resume_extractor::jobs::{JobCatalog, JobSkillProfile};
use resume_extractor::output::formatter::{save_report_to_file, ReportGenerator};
use resume_extractor::output::report::*;
use resume_extractor::processing::analyzer::Analyzer;
use resume_extractor::processing::skill_set::SkillSet;
use resume_extractor::{Result, ResumeExtractorError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => Err(ResumeExtractorError::Configuration(format!(
            "Config file not found: {}",
            path.display()
        ))),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let analyzer = Analyzer::new(&config)?;
            let text = read_resume(&resume).await?;

            info!("Analyzing {}", resume.display());
            let report = Report::Analysis(AnalysisReport {
                result: analyzer.analyze(&text),
                candidate: analyzer.extract_candidate_info(&text),
                sections: SectionSummary::from_sections(&analyzer.segment(&text)),
                metadata: ReportMetadata::new(resume.to_string_lossy()),
            });

            emit(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Info { resume, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let analyzer = Analyzer::new(&config)?;
            let text = read_resume(&resume).await?;

            let candidate = analyzer.extract_candidate_info(&text);
            if candidate.is_empty() {
                warn!("No contact details found in {}", resume.display());
            }

            let report = Report::Candidate(CandidateReport {
                candidate,
                metadata: ReportMetadata::new(resume.to_string_lossy()),
            });
            emit(&report, format, &config, false, None)?;
        }

        Commands::Match {
            resume,
            job,
            skills,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let analyzer = Analyzer::new(&config)?;
            let mut input_manager = InputManager::new();

            let resume_text = read_with(&mut input_manager, &resume).await?;
            let candidate_skills = analyzer.analyze(&resume_text).skills.identified;

            let profile = match (job, skills) {
                (Some(job), _) => {
                    let job_text = read_with(&mut input_manager, &job).await?;
                    let title = job
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| job.display().to_string());
                    JobSkillProfile::from_description(title, None, job_text, &analyzer)
                }
                (None, Some(list)) => JobSkillProfile::new("command line", SkillSet::from_delimited(&list.to_lowercase())),
                (None, None) => {
                    return Err(ResumeExtractorError::InvalidInput(
                        "Either --job or --skills is required".to_string(),
                    ))
                }
            };

            if profile.required_skills.is_empty() {
                warn!("No required skills found for '{}', the score will be 0", profile.title);
            }

            let report = Report::Match(MatchSummary {
                report: profile.score(&candidate_skills),
                job: profile.title,
                candidate_skills,
                required_skills: profile.required_skills,
                metadata: ReportMetadata::new(resume.to_string_lossy()),
            });
            emit(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Rank {
            resume,
            jobs,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| ResumeExtractorError::InvalidInput(format!("Job catalog: {}", e)))?;

            let analyzer = Analyzer::new(&config)?;
            let mut catalog = JobCatalog::load(&jobs)?;
            catalog.fill_missing_skills(&analyzer);

            let text = read_resume(&resume).await?;
            let candidate_skills = analyzer.analyze(&text).skills.identified;

            let report = Report::Ranking(RankingReport {
                rankings: catalog.rank(&candidate_skills),
                candidate_skills,
                metadata: ReportMetadata::new(resume.to_string_lossy()),
            });
            emit(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Configuration: {}\n", path.display());
                    println!("Analysis:");
                    println!("  Text sample length: {} chars", config.analysis.sample_chars);
                    println!("  Skill saturation: {} skills", config.analysis.skill_saturation);
                    println!("  Experience saturation: {} chars", config.analysis.experience_saturation);
                    println!("  Name scan lines: {}", config.analysis.name_scan_lines);
                    println!("\nVocabulary additions:");
                    println!("  Skills: {}", list_or_none(&config.vocabulary.extra_skills));
                    println!("  Skills headers: {}", list_or_none(&config.vocabulary.extra_skills_headers));
                    println!("  Experience headers: {}", list_or_none(&config.vocabulary.extra_experience_headers));
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(fmt) => cli::parse_output_format(fmt).map_err(ResumeExtractorError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn read_resume(path: &Path) -> Result<String> {
    read_with(&mut InputManager::new().with_cache(false), path).await
}

async fn read_with(input_manager: &mut InputManager, path: &Path) -> Result<String> {
    cli::validate_file_extension(path, RESUME_EXTENSIONS)
        .map_err(|e| ResumeExtractorError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    input_manager.extract_text(path).await
}

/// Print the report, and write an uncolored copy when `save` is given
fn emit(report: &Report, format: OutputFormat, config: &Config, detailed: bool, save: Option<&Path>) -> Result<()> {
    let detailed = detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(config.output.color_output, detailed, true, true);
    println!("{}", generator.generate_report(report, &format)?);

    if let Some(path) = save {
        let plain = ReportGenerator::with_options(false, detailed, true, true);
        save_report_to_file(&plain.generate_report(report, &format)?, path)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
