//! Request body validation for the export API.
//!
//! Bodies are taken as raw JSON so that every failure can be reported with the
//! offending field name, the way the web form expects it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::{ExportTarget, JobStatus, JobUpdate, NewExportJob};
use crate::presentation::config::ExportSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub field: Option<String>,
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    pub fn body(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| {
        ValidationError::body(format!(
            "Expected object, received {}",
            type_name(body)
        ))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::field(field, "Required")),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ValidationError::field(
            field,
            format!("Expected string, received {}", type_name(other)),
        )),
    }
}

fn optional_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>, ValidationError> {
    match object.get(field) {
        None => Ok(None),
        Some(_) => required_string(object, field).map(Some),
    }
}

fn enum_message<T: std::fmt::Display>(options: &[T], received: &str) -> String {
    let expected = options
        .iter()
        .map(|o| format!("'{}'", o))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {}, received '{}'", expected, received)
}

/// Validates a `POST /api/export` body. The submitter is always anonymous.
pub fn validate_create_export(
    body: &Value,
    rules: &ExportSettings,
) -> Result<NewExportJob, ValidationError> {
    let object = as_object(body)?;

    let markdown = required_string(object, "markdown")?;
    let min_length = rules.min_markdown_length.max(1);
    if markdown.chars().count() < min_length {
        return Err(ValidationError::field(
            "markdown",
            format!("Markdown must contain at least {} character(s)", min_length),
        ));
    }

    let raw_target = required_string(object, "target")?;
    let target = raw_target
        .parse::<ExportTarget>()
        .ok()
        .filter(|t| rules.allows(*t))
        .ok_or_else(|| {
            ValidationError::field("target", enum_message(&rules.allowed_targets, raw_target))
        })?;

    let mut job = NewExportJob::anonymous(markdown.to_string(), target);

    if let Some(template_id) = optional_string(object, "templateId")? {
        if template_id.trim().is_empty() {
            return Err(ValidationError::field(
                "templateId",
                "Template id must not be empty",
            ));
        }
        job = job.with_template(template_id.to_string());
    }

    Ok(job)
}

/// Accepts RFC 3339 plus offset-less ISO 8601 date-times and bare dates, read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validates a `PATCH /api/jobs/:id` body. Unknown keys are ignored.
pub fn validate_job_update(body: &Value) -> Result<JobUpdate, ValidationError> {
    let object = as_object(body)?;

    let status = optional_string(object, "status")?
        .map(|raw| {
            raw.parse::<JobStatus>()
                .map_err(|_| ValidationError::field("status", enum_message(&JobStatus::ALL, raw)))
        })
        .transpose()?;

    let completed_at = optional_string(object, "completedAt")?
        .map(|raw| {
            parse_timestamp(raw)
                .ok_or_else(|| ValidationError::field("completedAt", "Invalid datetime"))
        })
        .transpose()?;

    Ok(JobUpdate {
        status,
        artifact_url: optional_string(object, "artifactUrl")?.map(String::from),
        error: optional_string(object, "error")?.map(String::from),
        completed_at,
    })
}
