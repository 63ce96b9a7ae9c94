//! Core data types for the callscore web client
//!
//! All entities are backend-owned; the client holds transient,
//! non-authoritative copies and never mutates them beyond formatting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Processing status of a record, as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Waiting for processing
    Pending,
    /// Currently being transcribed or evaluated
    Processing,
    /// Processing finished
    Completed,
    /// Processing failed
    Error,
    /// Any status string this client does not know
    #[serde(other)]
    Unknown,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Error => write!(f, "error"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single submitted audio item tracked through transcription and evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Record identifier
    pub id: i64,

    /// Lifecycle status, owned by the backend
    #[serde(default)]
    pub status: RecordStatus,

    /// Transcribed text, absent until transcription finishes
    #[serde(default)]
    pub transcription: Option<String>,

    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Scored assessment, absent until evaluation finishes
    #[serde(default)]
    pub evaluation: Option<Evaluation>,
}

/// The scored assessment attached to a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Evaluation {
    /// Numeric quality score
    #[serde(default)]
    pub mark: f64,

    /// Evaluation text
    #[serde(default)]
    pub text: String,

    /// Evaluation status string
    #[serde(default)]
    pub status: String,

    /// Optional reviewer comment
    #[serde(default)]
    pub comment: Option<String>,

    /// Optional summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Optional per-category marks, in backend order
    #[serde(default)]
    pub marks: Option<IndexMap<String, f64>>,

    /// When the evaluation was produced (RFC 3339)
    #[serde(default)]
    pub evaluated_at: Option<String>,
}

/// Transcription metadata nested in an evaluation lookup response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Speech {
    /// Transcribed text
    #[serde(default)]
    pub text: String,

    /// Original filename
    #[serde(default)]
    pub filename: String,

    /// File extension reported by the backend
    #[serde(default)]
    pub file_type: String,

    /// When transcription finished (RFC 3339)
    #[serde(default)]
    pub processed_at: String,
}

/// Aggregate statistics over all records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Statistics {
    /// Total number of records
    #[serde(default)]
    pub total_records: i64,

    /// Number of evaluated records
    #[serde(default)]
    pub evaluated_records: i64,

    /// Number of records still awaiting evaluation
    #[serde(default)]
    pub pending_evaluations: i64,

    /// Mean mark over evaluated records
    #[serde(default)]
    pub average_mark: f64,

    /// Count of records per mark, keys are the marks as strings
    #[serde(default)]
    pub marks_distribution: Option<IndexMap<String, i64>>,
}

/// Response returned immediately after an upload submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UploadResult {
    /// Identifier of the created record
    #[serde(default)]
    pub id: i64,

    /// Backend-reported status, may be absent while processing is queued
    #[serde(default)]
    pub status: Option<String>,

    /// Transcription, present when the backend processed synchronously
    #[serde(default)]
    pub text: Option<String>,
}

/// Shape of a single-evaluation lookup response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EvaluationLookup {
    /// Transcription metadata
    pub speech: Speech,

    /// The evaluation itself
    pub evaluation: Evaluation,

    /// Top-level overall mark
    pub mark: f64,

    /// Record creation timestamp (RFC 3339)
    pub created_at: String,
}

impl EvaluationLookup {
    /// Build a lookup result from a raw JSON body, coercing every field
    /// to its expected primitive type and tolerating missing nested
    /// objects: numbers default to 0 (numeric strings are accepted),
    /// strings default to empty (numbers are stringified).
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        let speech = data.get("speech");
        let evaluation = data.get("evaluation");

        Self {
            speech: Speech {
                text: coerce_string(get(speech, "text")),
                filename: coerce_string(get(speech, "filename")),
                file_type: coerce_string(get(speech, "file_type")),
                processed_at: coerce_string(get(speech, "processed_at")),
            },
            evaluation: Evaluation {
                mark: coerce_number(get(evaluation, "mark")),
                text: coerce_string(get(evaluation, "text")),
                status: coerce_string(get(evaluation, "status")),
                comment: get(evaluation, "comment")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                summary: get(evaluation, "summary")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                marks: get(evaluation, "marks").and_then(Value::as_object).map(|m| {
                    m.iter()
                        .map(|(k, v)| (k.clone(), coerce_number(Some(v))))
                        .collect()
                }),
                evaluated_at: match get(evaluation, "evaluated_at") {
                    Some(v) if !v.is_null() => Some(coerce_string(Some(v))),
                    _ => None,
                },
            },
            mark: coerce_number(data.get("mark")),
            created_at: coerce_string(data.get("created_at")),
        }
    }
}

/// Nested field access that treats a missing parent like a missing field
fn get<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(|v| v.get(key))
}

/// String coercion: strings pass through, numbers are stringified,
/// everything else becomes empty
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Numeric coercion: numbers pass through, numeric strings are parsed,
/// everything else becomes 0
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
