//! Field extraction — turns normalized resume text into an [`ExtractedRecord`]
//! via one model call, fence stripping, strict JSON parsing and `"NA"` defaulting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::extract::prompts::RESUME_PARSE_PROMPT;
use crate::llm_client::{LlmError, TextModel};

/// Sentinel for any required field the model did not supply.
pub const SENTINEL: &str = "NA";

/// The ten required record keys, in output order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "Name",
    "Email",
    "Phone",
    "College",
    "City",
    "Total Experience in years",
    "Domain of Work",
    "Top Skills",
    "Experience",
    "Summary",
];

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Model reply was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn na() -> String {
    SENTINEL.to_string()
}

/// The structured summary extracted from one resume. The ten required fields
/// always serialize in [`REQUIRED_FIELDS`] order, defaulting to `"NA"` when the
/// model omitted them. Extra keys returned by the model are kept in `extras`
/// and flow through to the JSON artifact and HTML page (the spreadsheet stays
/// fixed at the ten columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "Name", default = "na")]
    pub name: String,
    #[serde(rename = "Email", default = "na")]
    pub email: String,
    #[serde(rename = "Phone", default = "na")]
    pub phone: String,
    #[serde(rename = "College", default = "na")]
    pub college: String,
    #[serde(rename = "City", default = "na")]
    pub city: String,
    #[serde(rename = "Total Experience in years", default = "na")]
    pub total_experience_years: String,
    #[serde(rename = "Domain of Work", default = "na")]
    pub domain_of_work: String,
    #[serde(rename = "Top Skills", default = "na")]
    pub top_skills: String,
    #[serde(rename = "Experience", default = "na")]
    pub experience: String,
    #[serde(rename = "Summary", default = "na")]
    pub summary: String,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl ExtractedRecord {
    /// The ten required values, aligned with [`REQUIRED_FIELDS`].
    pub fn required_values(&self) -> [&str; 10] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.college,
            &self.city,
            &self.total_experience_years,
            &self.domain_of_work,
            &self.top_skills,
            &self.experience,
            &self.summary,
        ]
    }

    /// All `(key, value)` pairs for display: the ten required fields first,
    /// then any extras the model volunteered.
    pub fn display_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = REQUIRED_FIELDS
            .iter()
            .zip(self.required_values())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in &self.extras {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            fields.push((key.clone(), rendered));
        }
        fields
    }
}

/// Runs one model call for `resume_text` and parses the reply into a record.
/// Service failures and unparseable replies both drop the file — there is no
/// partial record.
pub async fn extract_fields(
    model: &dyn TextModel,
    resume_text: &str,
) -> Result<ExtractedRecord, FieldError> {
    let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text);
    let reply = model.infer(&prompt).await?;
    let json = strip_code_fences(&reply);
    let record: ExtractedRecord = serde_json::from_str(&json)?;
    Ok(record)
}

/// Removes markdown code-fence markers (```json and ```) anywhere in the reply
/// and trims the remainder. Models wrap JSON in fences often enough that this
/// runs unconditionally.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedModel, FailingModel};

    const FULL_REPLY: &str = r#"{
        "Name": "Jane Doe",
        "Email": "jane@example.com",
        "Phone": "+1 555 0100",
        "College": "State University",
        "City": "Springfield",
        "Total Experience in years": "5.5",
        "Domain of Work": "Backend Engineering",
        "Top Skills": "Rust, Go, SQL, Docker, Kubernetes, AWS, Git, Linux, Redis, Kafka",
        "Experience": "Acme Corp : Senior Engineer, Initech : Engineer",
        "Summary": "Backend engineer with 5.5 years of experience."
    }"#;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_missing_keys_default_to_sentinel() {
        let record: ExtractedRecord =
            serde_json::from_str(r#"{"Name": "Jane Doe", "Phone": "+1 555 0100"}"#).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, SENTINEL);
        assert_eq!(record.summary, SENTINEL);
        assert!(record.extras.is_empty());
    }

    #[test]
    fn test_extra_keys_are_kept() {
        let record: ExtractedRecord =
            serde_json::from_str(r#"{"Name": "Jane", "LinkedIn": "jane-doe"}"#).unwrap();
        assert_eq!(
            record.extras.get("LinkedIn").and_then(|v| v.as_str()),
            Some("jane-doe")
        );
    }

    #[test]
    fn test_serialized_record_keeps_field_order() {
        let record: ExtractedRecord = serde_json::from_str(FULL_REPLY).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let name_pos = json.find("\"Name\"").unwrap();
        let email_pos = json.find("\"Email\"").unwrap();
        let summary_pos = json.find("\"Summary\"").unwrap();
        assert!(name_pos < email_pos && email_pos < summary_pos);
    }

    #[test]
    fn test_non_string_field_value_rejects_the_reply() {
        // Prompt rule 6 demands string values; a bare number is a contract
        // violation and drops the file rather than producing a partial record.
        let result = serde_json::from_str::<ExtractedRecord>(
            r#"{"Name": "Jane", "Total Experience in years": 5.5}"#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extract_fields_happy_path() {
        let model = CannedModel(FULL_REPLY);
        let record = extract_fields(&model, "some resume text").await.unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.total_experience_years, "5.5");
    }

    #[tokio::test]
    async fn test_extract_fields_strips_fences_before_parse() {
        let model = CannedModel("```json\n{\"Name\": \"Jane Doe\"}\n```");
        let record = extract_fields(&model, "text").await.unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, SENTINEL);
    }

    #[tokio::test]
    async fn test_extract_fields_truncated_reply_is_parse_error() {
        let model = CannedModel("{\"Name\": \"Jane");
        let err = extract_fields(&model, "text").await.unwrap_err();
        assert!(matches!(err, FieldError::Parse(_)));
    }

    #[tokio::test]
    async fn test_extract_fields_service_failure_propagates() {
        let err = extract_fields(&FailingModel, "text").await.unwrap_err();
        assert!(matches!(err, FieldError::Llm(_)));
    }
}
