//! Text normalization

use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to a diagnostic sample that was cut short
pub const TRUNCATION_MARKER: &str = "...";

/// Collapse every run of whitespace into a single space, lower-case, trim.
///
/// Line structure does not survive this step; anything that needs lines has
/// to look at the raw text instead.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized.to_lowercase()
}

/// At most `max_chars` characters of `text`, with [`TRUNCATION_MARKER`]
/// appended when anything was dropped. Cuts on grapheme boundaries so
/// combining marks stay attached; a cluster that would cross the limit is
/// left out whole.
pub fn text_sample(text: &str, max_chars: usize) -> String {
    let mut sample = String::new();
    let mut taken = 0;

    for g in text.graphemes(true) {
        let width = g.chars().count();
        if taken + width > max_chars {
            sample.push_str(TRUNCATION_MARKER);
            return sample;
        }
        sample.push_str(g);
        taken += width;
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        let text = "  Senior   Engineer\n\n\tPython,  SQL \r\n";
        assert_eq!(normalize(text), "senior engineer python, sql");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "John DOE\nSkills:\n  Rust, Go",
            "ÄÖÜ  Straße\u{00A0}Test",
            "",
            "already normalized text",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_text_sample_truncates_with_marker() {
        let text = "a".repeat(600);
        let sample = text_sample(&text, 500);
        assert_eq!(sample.len(), 503);
        assert!(sample.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_text_sample_short_text_unchanged() {
        assert_eq!(text_sample("short text", 500), "short text");
        let exact = "b".repeat(500);
        assert_eq!(text_sample(&exact, 500), exact);
    }

    #[test]
    fn test_text_sample_never_exceeds_limit_at_cluster_boundary() {
        let text = format!("{}e\u{0301}{}", "a".repeat(499), "b".repeat(50));
        let sample = text_sample(&text, 500);
        let body = sample.strip_suffix(TRUNCATION_MARKER).unwrap();

        assert_eq!(body.chars().count(), 499);
        assert!(body.chars().all(|c| c == 'a'));
    }
}
