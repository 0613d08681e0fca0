//! Output formatters for console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a report
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter; analysis reports keep the extraction fields at the top level
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks a formatter by output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Rating shown next to a percentage
fn score_label(score: f64) -> (&'static str, Color) {
    match score {
        s if s >= 90.0 => ("EXCELLENT", Color::Green),
        s if s >= 75.0 => ("STRONG", Color::BrightGreen),
        s if s >= 50.0 => ("PARTIAL", Color::Yellow),
        s if s > 0.0 => ("WEAK", Color::Red),
        _ => ("NONE", Color::BrightRed),
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = score_label(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_metadata(&self, metadata: &ReportMetadata) -> String {
        format!(
            "Source: {} | Generated: {}\n",
            file_name(&metadata.source_file),
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }

    fn format_candidate(&self, output: &mut String, candidate: &crate::processing::candidate::CandidateInfo) {
        let na = self.colorize("not found", Color::BrightBlack);
        output.push_str(&format!("Name:  {}\n", candidate.name.as_deref().map_or(na.clone(), String::from)));
        output.push_str(&format!("Email: {}\n", candidate.email.as_deref().map_or(na.clone(), String::from)));
        output.push_str(&format!("Phone: {}\n", candidate.phone.as_deref().map_or(na, String::from)));
    }

    fn format_analysis(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&self.format_metadata(&report.metadata));

        output.push_str(&self.format_header("Candidate", 2));
        self.format_candidate(&mut output, &report.candidate);

        output.push_str(&self.format_header(
            &format!("Skills ({} found)", result.skills.identified.len()),
            2,
        ));
        output.push_str(&format!(
            "Confidence: {:.1}% {}\n",
            result.skills.confidence,
            self.format_score_badge(result.skills.confidence)
        ));
        if result.skills.identified.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("No skills identified", Color::Yellow)));
        } else {
            for skill in &result.skills.identified {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Cyan)));
            }
        }

        output.push_str(&self.format_header("Experience", 2));
        output.push_str(&format!(
            "Confidence: {:.1}% {}\n",
            result.experience.confidence,
            self.format_score_badge(result.experience.confidence)
        ));
        if result.experience.content.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("No experience section found", Color::Yellow)));
        } else if self.detailed {
            output.push_str(&format!("{}\n", result.experience.content));
        } else {
            output.push_str(&format!("{} characters extracted (use --detailed to show)\n", result.experience.content.chars().count()));
        }

        if self.detailed {
            output.push_str(&self.format_header("Sections", 3));
            if report.sections.is_empty() {
                output.push_str("  No recognized section headers\n");
            }
            for section in &report.sections {
                output.push_str(&format!(
                    "  {} {} ({} chars)\n",
                    self.colorize(&section.header, Color::White),
                    self.colorize(&format!("[{}]", section.kind), Color::BrightBlack),
                    section.characters
                ));
            }

            output.push_str(&self.format_header("Text Sample", 3));
            output.push_str(&format!("{}\n", self.colorize(&result.raw_text_sample, Color::BrightBlack)));
        }

        output
    }

    fn format_match(&self, summary: &MatchSummary) -> String {
        let mut output = String::new();
        let report = &summary.report;

        output.push_str(&self.format_header("SKILL MATCH", 1));
        output.push_str(&self.format_metadata(&summary.metadata));
        output.push_str(&format!("Job: {}\n", self.colorize(&summary.job, Color::Cyan)));

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "{:.1}% of {} required skills {}\n",
            report.score,
            summary.required_skills.len(),
            self.format_score_badge(report.score)
        ));

        if !report.matched.is_empty() {
            output.push_str(&self.format_header("Matched", 3));
            for m in &report.matched {
                if m.required == m.candidate {
                    output.push_str(&format!("  ✓ {}\n", self.colorize(&m.required, Color::Green)));
                } else {
                    output.push_str(&format!(
                        "  ✓ {} {}\n",
                        self.colorize(&m.required, Color::Green),
                        self.colorize(&format!("(via \"{}\")", m.candidate), Color::BrightBlack)
                    ));
                }
            }
        }

        if !report.missing.is_empty() {
            output.push_str(&self.format_header("Missing", 3));
            for skill in &report.missing {
                output.push_str(&format!("  ✗ {}\n", self.colorize(skill, Color::Red)));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Candidate Skills", 3));
            let skills: Vec<&str> = summary.candidate_skills.iter().map(String::as_str).collect();
            output.push_str(&format!("  {}\n", skills.join(", ")));
        }

        output
    }

    fn format_ranking(&self, ranking: &RankingReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("JOB RANKING", 1));
        output.push_str(&self.format_metadata(&ranking.metadata));
        output.push_str(&format!("Candidate skills: {}\n", ranking.candidate_skills.len()));

        if ranking.rankings.is_empty() {
            output.push_str(&format!("\n{}\n", self.colorize("The job catalog is empty", Color::Yellow)));
            return output;
        }

        output.push_str(&self.format_header("Rankings", 2));
        for (i, job) in ranking.rankings.iter().enumerate() {
            let title = match &job.company {
                Some(company) => format!("{} @ {}", job.title, company),
                None => job.title.clone(),
            };
            output.push_str(&format!(
                "{:>2}. {:<40} {:>5.1}% {}\n",
                i + 1,
                title,
                job.report.score,
                self.format_score_badge(job.report.score)
            ));
            if self.detailed && !job.report.missing.is_empty() {
                output.push_str(&format!(
                    "    missing: {}\n",
                    self.colorize(&job.report.missing.join(", "), Color::BrightBlack)
                ));
            }
        }

        output
    }

    fn format_candidate_report(&self, report: &CandidateReport) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("CANDIDATE", 1));
        output.push_str(&self.format_metadata(&report.metadata));
        output.push('\n');
        self.format_candidate(&mut output, &report.candidate);
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Analysis(r) => self.format_analysis(r),
            Report::Candidate(r) => self.format_candidate_report(r),
            Report::Match(r) => self.format_match(r),
            Report::Ranking(r) => self.format_ranking(r),
        })
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match score {
            s if s >= 90.0 => "🟢 Excellent",
            s if s >= 75.0 => "🟡 Strong",
            s if s >= 50.0 => "🟠 Partial",
            s if s > 0.0 => "🔴 Weak",
            _ => "🔴 None",
        }
    }

    fn metadata(&self, output: &mut String, metadata: &ReportMetadata) {
        if self.include_metadata {
            output.push_str(&format!(
                "**Source:** `{}` | **Generated:** {}\n\n",
                file_name(&metadata.source_file),
                metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    }

    fn candidate_table(output: &mut String, candidate: &crate::processing::candidate::CandidateInfo) {
        output.push_str("| Field | Value |\n|-------|-------|\n");
        output.push_str(&format!("| Name | {} |\n", candidate.name.as_deref().unwrap_or("-")));
        output.push_str(&format!("| Email | {} |\n", candidate.email.as_deref().unwrap_or("-")));
        output.push_str(&format!("| Phone | {} |\n\n", candidate.phone.as_deref().unwrap_or("-")));
    }

    fn format_analysis(&self, report: &AnalysisReport) -> String {
        let mut output = String::from("# Resume Analysis\n\n");
        let result = &report.result;
        self.metadata(&mut output, &report.metadata);

        output.push_str("## Candidate\n\n");
        Self::candidate_table(&mut output, &report.candidate);

        output.push_str(&format!(
            "## Skills\n\n**Confidence:** {:.1}% {}\n\n",
            result.skills.confidence,
            Self::markdown_score_badge(result.skills.confidence)
        ));
        if result.skills.identified.is_empty() {
            output.push_str("_No skills identified._\n\n");
        } else {
            for skill in &result.skills.identified {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "## Experience\n\n**Confidence:** {:.1}% {}\n\n",
            result.experience.confidence,
            Self::markdown_score_badge(result.experience.confidence)
        ));
        if result.experience.content.is_empty() {
            output.push_str("_No experience section found._\n\n");
        } else {
            output.push_str(&format!("```text\n{}\n```\n\n", result.experience.content));
        }

        if !report.sections.is_empty() {
            output.push_str("## Sections\n\n| Header | Kind | Characters |\n|--------|------|------------|\n");
            for section in &report.sections {
                output.push_str(&format!("| {} | {} | {} |\n", section.header, section.kind, section.characters));
            }
            output.push('\n');
        }

        output.push_str(&format!("## Text Sample\n\n> {}\n", result.raw_text_sample.replace('\n', " ")));
        output
    }

    fn format_match(&self, summary: &MatchSummary) -> String {
        let mut output = String::from("# Skill Match\n\n");
        self.metadata(&mut output, &summary.metadata);

        output.push_str(&format!(
            "**Job:** {}\n\n**Score:** {:.1}% {}\n\n",
            summary.job,
            summary.report.score,
            Self::markdown_score_badge(summary.report.score)
        ));

        output.push_str("## Matched Skills\n\n");
        if summary.report.matched.is_empty() {
            output.push_str("_None._\n\n");
        } else {
            output.push_str("| Required | Candidate | Match |\n|----------|-----------|-------|\n");
            for m in &summary.report.matched {
                output.push_str(&format!("| {} | {} | {:?} |\n", m.required, m.candidate, m.match_type));
            }
            output.push('\n');
        }

        output.push_str("## Missing Skills\n\n");
        if summary.report.missing.is_empty() {
            output.push_str("_None._\n");
        } else {
            for skill in &summary.report.missing {
                output.push_str(&format!("- {}\n", skill));
            }
        }
        output
    }

    fn format_ranking(&self, ranking: &RankingReport) -> String {
        let mut output = String::from("# Job Ranking\n\n");
        self.metadata(&mut output, &ranking.metadata);

        output.push_str("| # | Job | Company | Score | Missing |\n|---|-----|---------|-------|---------|\n");
        for (i, job) in ranking.rankings.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {:.1}% | {} |\n",
                i + 1,
                job.title,
                job.company.as_deref().unwrap_or("-"),
                job.report.score,
                job.report.missing.join(", ")
            ));
        }
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Analysis(r) => self.format_analysis(r),
            Report::Candidate(r) => {
                let mut output = String::from("# Candidate\n\n");
                self.metadata(&mut output, &r.metadata);
                Self::candidate_table(&mut output, &r.candidate);
                output
            }
            Report::Match(r) => self.format_match(r),
            Report::Ranking(r) => self.format_ranking(r),
        })
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
