//! Batch processing: one full pass over the resumes directory.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{error, info, warn};

use crate::extract::fields::{extract_fields, ExtractedRecord};
use crate::extract::normalize::normalize;
use crate::extract::text::{self, DocumentFormat};
use crate::llm_client::TextModel;

/// Per-filename results of one batch run. Keyed lexicographically so the JSON
/// artifact is byte-stable across runs; ordering carries no semantic weight.
pub type ResumeCollection = BTreeMap<String, ExtractedRecord>;

/// Processes every regular file in `dir` through the extraction pipeline.
///
/// Skips (without aborting the batch): subdirectories, unsupported extensions,
/// files with no extractable text, and files whose model call or JSON parse
/// failed. A failed directory listing yields an empty collection.
pub async fn process_directory(dir: &Path, model: &dyn TextModel) -> ResumeCollection {
    let mut collection = ResumeCollection::new();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to list resumes directory {}: {e}", dir.display());
            return collection;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Failed to read directory entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                warn!("Skipping file with non-UTF-8 name: {}", path.display());
                continue;
            }
        };

        info!("Processing: {filename}");

        let format = DocumentFormat::from_path(&path);
        if format == DocumentFormat::Unsupported {
            warn!("Unsupported file type: {filename}");
            continue;
        }

        let raw_text = text::extract(&path, format);
        if raw_text.is_empty() {
            warn!("No text extracted from {filename}");
            continue;
        }

        match extract_fields(model, &normalize(&raw_text)).await {
            Ok(record) => {
                collection.insert(filename, record);
            }
            Err(e) => error!("Error processing resume {filename}: {e}"),
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;
    use crate::llm_client::testing::{CannedModel, FailingModel};

    const REPLY: &str = r#"{
        "Name": "Jane Doe",
        "Email": "jane@example.com",
        "Phone": "+1 555 0100",
        "College": "State University",
        "City": "Springfield",
        "Total Experience in years": "5.5",
        "Domain of Work": "Backend Engineering",
        "Top Skills": "Rust, Go, SQL, Docker, Kubernetes, AWS, Git, Linux, Redis, Kafka",
        "Experience": "Acme Corp : Senior Engineer",
        "Summary": "Backend engineer."
    }"#;

    fn write_docx(path: &Path, line: &str) {
        let file = File::create(path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
            .build()
            .pack(file)
            .unwrap();
    }

    #[tokio::test]
    async fn test_valid_docx_produces_one_record() {
        let dir = tempfile::tempdir().unwrap();
        write_docx(&dir.path().join("jane.docx"), "Jane Doe, backend engineer");

        let collection = process_directory(dir.path(), &CannedModel(REPLY)).await;
        assert_eq!(collection.len(), 1);
        assert_eq!(collection["jane.docx"].name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "plain text resume").unwrap();

        let collection = process_directory(dir.path(), &CannedModel(REPLY)).await;
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_empty_directory_yields_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let collection = process_directory(dir.path(), &CannedModel(REPLY)).await;
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_subdirectories_are_not_recursed() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("archive");
        std::fs::create_dir(&sub).unwrap();
        write_docx(&sub.join("old.docx"), "Old resume");

        let collection = process_directory(dir.path(), &CannedModel(REPLY)).await;
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_reply_drops_only_that_file() {
        let dir = tempfile::tempdir().unwrap();
        write_docx(&dir.path().join("jane.docx"), "Jane Doe");

        let collection = process_directory(dir.path(), &CannedModel("{\"Name\": trunc")).await;
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_does_not_panic_batch() {
        let dir = tempfile::tempdir().unwrap();
        write_docx(&dir.path().join("jane.docx"), "Jane Doe");
        std::fs::write(dir.path().join("broken.pdf"), b"garbage").unwrap();

        let collection = process_directory(dir.path(), &FailingModel).await;
        assert!(collection.is_empty());
    }
}
