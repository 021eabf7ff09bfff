use std::path::Path;

use axum::extract::State;
use axum::response::Html;
use tracing::info;

use crate::errors::AppError;
use crate::extract::batch::process_directory;
use crate::report;
use crate::state::AppState;

/// GET /
/// Runs the whole batch synchronously: scan the resumes directory, extract a
/// record per file, write the JSON and CSV artifacts, and return the HTML
/// report. An empty collection returns the error page and writes nothing.
pub async fn handle_run_batch(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let resumes_dir = Path::new(&state.config.resumes_dir);
    let collection = process_directory(resumes_dir, state.model.as_ref()).await;

    if collection.is_empty() {
        info!("Batch produced no records; returning error page");
        return Ok(Html(report::render_empty_page()));
    }

    info!("Batch produced {} record(s); writing artifacts", collection.len());
    report::write_artifacts(&collection, Path::new(&state.config.output_dir))?;

    Ok(Html(report::render_html(&collection)))
}
