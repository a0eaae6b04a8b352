//! PDF loader for extracting page text from PDF files

use crate::error::{CiteError, Result};
use crate::providers::{DocumentLoader, PageText};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Loader for extracting text from PDF files, one unit per page
pub struct PDFProvider;

impl Default for PDFProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PDFProvider {
    /// Create a new PDFProvider
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of every page of a PDF file
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|e| {
            CiteError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read PDF file {:?}: {}", path, e),
            ))
        })?;

        pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            CiteError::Parse(format!("Failed to extract text from PDF {:?}: {}", path, e))
        })
    }
}

/// Tag extracted page texts with file and 1-based page number, dropping blank pages
fn tag_pages(file_path: &str, texts: Vec<String>) -> Vec<PageText> {
    texts
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| PageText {
            file_path: file_path.to_string(),
            page: i + 1,
            text,
        })
        .collect()
}

#[async_trait]
impl DocumentLoader for PDFProvider {
    fn loader_type(&self) -> &'static str {
        "pdf"
    }

    async fn load(&self, paths: &[PathBuf]) -> Result<Vec<PageText>> {
        let mut pages = Vec::new();

        for path in paths {
            let file_path = path.to_string_lossy().to_string();
            let tagged = tag_pages(&file_path, self.extract_pages(path)?);

            if tagged.is_empty() {
                tracing::warn!(
                    "Skipping PDF {:?}: no extractable text (may be image-based)",
                    path
                );
                continue;
            }

            tracing::debug!("Loaded {} pages from {}", tagged.len(), file_path);
            pages.extend(tagged);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_loader_type() {
        let provider = PDFProvider::new();
        assert_eq!(provider.loader_type(), "pdf");
    }

    #[test]
    fn test_tag_pages_numbers_from_one() {
        let pages = tag_pages(
            "/docs/a.pdf",
            vec!["intro".to_string(), "body".to_string()],
        );
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page, 1);
        assert_eq!(pages[1].page, 2);
        assert_eq!(pages[1].file_path, "/docs/a.pdf");
    }

    #[test]
    fn test_tag_pages_skips_blank_but_keeps_numbering() {
        let pages = tag_pages(
            "a.pdf",
            vec!["one".to_string(), "  \n ".to_string(), "three".to_string()],
        );
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].page, 3);
        assert_eq!(pages[1].text, "three");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = PDFProvider::new().load(&[path]).await.unwrap_err();
        assert!(matches!(err, CiteError::Parse(_)));
    }
}
