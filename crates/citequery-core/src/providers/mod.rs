//! Document loading
//!
//! A loader turns input files into page-tagged text. `PDFProvider` is the
//! production loader; tests substitute in-memory ones.

use crate::error::{CiteError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod pdf;

pub use pdf::PDFProvider;

/// Text of one page of one input file
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub file_path: String,
    /// 1-based page number
    pub page: usize,
    pub text: String,
}

/// Loader trait - all document sources must implement this
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Loader type identifier
    fn loader_type(&self) -> &'static str;

    /// Load every non-blank page of `paths`, in input order
    async fn load(&self, paths: &[PathBuf]) -> Result<Vec<PageText>>;
}

/// Check that every path exists, is a file with a `.pdf` extension and is
/// readable. Returns absolute paths in input order.
pub fn validate_pdf_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(CiteError::InvalidInput(
            "at least one PDF path is required".to_string(),
        ));
    }

    paths.iter().map(|p| validate_pdf_path(p)).collect()
}

fn validate_pdf_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CiteError::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(CiteError::InvalidInput(format!(
            "Not a file: {}",
            path.display()
        )));
    }
    let is_pdf = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(CiteError::InvalidInput(format!(
            "File is not a PDF: {}",
            path.display()
        )));
    }

    // Surfaces permission problems before any network call
    std::fs::File::open(path).map_err(|e| {
        CiteError::Io(std::io::Error::new(
            e.kind(),
            format!("Cannot read {}: {}", path.display(), e),
        ))
    })?;

    Ok(path.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.pdf");
        let err = validate_pdf_paths(&[missing]).unwrap_err();
        assert!(matches!(err, CiteError::FileNotFound(_)));
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[test]
    fn test_not_a_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").unwrap();
        let err = validate_pdf_paths(&[path]).unwrap_err();
        assert!(matches!(err, CiteError::InvalidInput(_)));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("folder.pdf");
        std::fs::create_dir(&sub).unwrap();
        assert!(validate_pdf_paths(&[sub]).is_err());
    }

    #[test]
    fn test_valid_paths_are_absolute_and_ordered() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("b.pdf");
        let b = dir.path().join("A.PDF");
        std::fs::write(&a, b"%PDF-1.4").unwrap();
        std::fs::write(&b, b"%PDF-1.4").unwrap();

        let validated = validate_pdf_paths(&[a, b]).unwrap();
        assert_eq!(validated.len(), 2);
        assert!(validated.iter().all(|p| p.is_absolute()));
        assert!(validated[0].ends_with("b.pdf"));
        assert!(validated[1].ends_with("A.PDF"));
    }

    #[test]
    fn test_empty_list() {
        assert!(validate_pdf_paths(&[]).is_err());
    }
}
