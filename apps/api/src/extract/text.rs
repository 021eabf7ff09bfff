//! Raw text extraction for the two supported resume formats.
//!
//! Failure policy: read/parse errors are logged and yield an empty string —
//! the caller treats empty text as "skip this file", so nothing propagates.

use std::path::Path;

use tracing::error;

/// Document format inferred from the file extension (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            _ => DocumentFormat::Unsupported,
        }
    }
}

/// Extracts raw text from `path`. Returns an empty string for unreadable
/// documents and for the `Unsupported` format tag.
pub fn extract(path: &Path, format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Pdf => extract_pdf(path),
        DocumentFormat::Docx => extract_docx(path),
        DocumentFormat::Unsupported => String::new(),
    }
}

/// Page-level text in page order, concatenated.
fn extract_pdf(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Error reading PDF {}: {e}", path.display());
            String::new()
        }
    }
}

/// Paragraph texts in document order, joined by newlines.
fn extract_docx(path: &Path) -> String {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!("Error reading DOCX {}: {e}", path.display());
            return String::new();
        }
    };

    let docx = match docx_rs::read_docx(&data) {
        Ok(docx) => docx,
        Err(e) => {
            error!("Error parsing DOCX {}: {e:?}", path.display());
            return String::new();
        }
    };

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            let mut line = String::new();
            for para_child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }
    paragraphs.join("\n")
}
