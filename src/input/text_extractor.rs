//! Text extraction from various file formats

use crate::error::{Result, ResumeExtractorError};
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeExtractorError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        self.extract_from_bytes(&bytes).map_err(|e| match e {
            ResumeExtractorError::DocxExtraction(msg) => {
                ResumeExtractorError::DocxExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl DocxExtractor {
    /// Paragraph text of `word/document.xml`, one paragraph per line.
    /// Table cells are paragraphs too, so they come out in document order.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ResumeExtractorError::DocxExtraction(format!("Failed to open archive: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ResumeExtractorError::DocxExtraction(format!("Missing document body: {}", e)))?
            .read_to_string(&mut xml)?;

        self.document_xml_to_text(&xml)
    }

    fn document_xml_to_text(&self, xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut lines = Vec::new();
        let mut paragraph = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"w:p" => paragraph.clear(),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                    b"w:tab" => paragraph.push('\t'),
                    b"w:br" | b"w:cr" => paragraph.push('\n'),
                    b"w:p" => lines.push(String::new()),
                    _ => {}
                },
                Ok(Event::Text(ref e)) if in_text => {
                    let text = e
                        .unescape()
                        .map_err(|e| ResumeExtractorError::DocxExtraction(format!("Bad text run: {}", e)))?;
                    paragraph.push_str(&text);
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => lines.push(std::mem::take(&mut paragraph)),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ResumeExtractorError::DocxExtraction(format!(
                        "Malformed document XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(lines.join("\n"))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        self.markdown_to_text(&markdown_content)
    }
}

impl MarkdownExtractor {
    /// Render to HTML and strip the tags, keeping one block per line so
    /// headings stay on lines of their own
    pub fn markdown_to_text(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> Result<String> {
        let text = html
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>")?;
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_docx_paragraphs_and_tables() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Python, </w:t></w:r><w:r><w:t>R&amp;D</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Docker</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
  </w:body>
</w:document>"#;

        let text = DocxExtractor.extract_from_bytes(&build_docx(xml)).unwrap();
        assert_eq!(text, "Jane Doe\nSkills\nPython, R&D\nDocker");
    }

    #[test]
    fn test_docx_without_body_is_rejected() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer.start_file("other.xml", SimpleFileOptions::default()).unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }

        let result = DocxExtractor.extract_from_bytes(&buffer.into_inner());
        assert!(matches!(result, Err(ResumeExtractorError::DocxExtraction(_))));
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxExtractor.extract_from_bytes(b"plain text, not a docx");
        assert!(matches!(result, Err(ResumeExtractorError::DocxExtraction(_))));
    }

    #[test]
    fn test_markdown_headings_stay_on_own_lines() {
        let text = MarkdownExtractor
            .markdown_to_text("# Jane Doe\n\n## Skills\n\n- **Rust**\n- Go\n")
            .unwrap();
        assert_eq!(text, "Jane Doe\nSkills\nRust\nGo");
    }
}
