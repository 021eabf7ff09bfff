//! Report writer — serializes a batch run into its three terminal artifacts:
//! a pretty-printed JSON file, a CSV spreadsheet, and the HTML response body.
//! Nothing re-reads these outputs; they are overwritten on every run.

use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::batch::ResumeCollection;
use crate::extract::fields::REQUIRED_FIELDS;

pub const JSON_ARTIFACT: &str = "extracted_resume_details.json";
pub const CSV_ARTIFACT: &str = "extracted_resume_details.csv";

/// Writes the JSON and CSV artifacts into `output_dir`, replacing any previous
/// run. Callers skip this entirely for an empty collection.
pub fn write_artifacts(collection: &ResumeCollection, output_dir: &Path) -> Result<()> {
    let json_path = output_dir.join(JSON_ARTIFACT);
    let json =
        serde_json::to_string_pretty(collection).context("Failed to serialize result collection")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    let csv_path = output_dir.join(CSV_ARTIFACT);
    let mut writer = csv::Writer::from_path(&csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;

    let mut header = vec!["Filename"];
    header.extend(REQUIRED_FIELDS);
    writer.write_record(&header)?;

    for (filename, record) in collection {
        let mut row = vec![filename.as_str()];
        row.extend(record.required_values());
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Renders the aggregated report page: an `<h1>` title and a list of
/// filenames, each expanding into a nested list of `key: value` pairs.
pub fn render_html(collection: &ResumeCollection) -> String {
    let mut html =
        String::from("<html><body><h1>Extracted Resume Details</h1><ul>");
    for (filename, record) in collection {
        html.push_str(&format!("<li><strong>{}</strong><ul>", escape(filename)));
        for (key, value) in record.display_fields() {
            html.push_str(&format!(
                "<li><strong>{}:</strong> {}</li>",
                escape(&key),
                escape(&value)
            ));
        }
        html.push_str("</ul></li>");
    }
    html.push_str("</ul></body></html>");
    html
}

/// The page returned when no resumes were found or processed successfully.
pub fn render_empty_page() -> String {
    "<html><body><h1>Error: No resumes found or processed successfully.</h1></body></html>"
        .to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
