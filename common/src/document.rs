//! Normalized search result documents and the adapter that builds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::SearchError, search_const::{GRID_HIDDEN_COLUMNS, NO_TEXT_SENTINEL}, search_request::AttachmentLookup};

/// Keys owned by the normalized fields; everything else is passthrough.
const NORMALIZED_KEYS: [&str; 9] = [
    "DocType", "Text", "From", "To", "ReportNumber", "IngestionDate", "DocumentDate", "FileName", "IsAttachment",
];

const DATE_KEYS: [&str; 2] = ["IngestionDate", "DocumentDate"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "DocType", default)]
    pub doc_type: Option<String>,
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "To", default)]
    pub to: Option<String>,
    #[serde(rename = "ReportNumber", default)]
    pub report_number: Option<String>,
    #[serde(rename = "IngestionDate", default)]
    pub ingestion_date: Option<Value>,
    #[serde(rename = "DocumentDate", default)]
    pub document_date: Option<Value>,
    #[serde(rename = "FileName", default)]
    pub file_name: Option<String>,
    #[serde(rename = "IsAttachment", default)]
    pub is_attachment: bool,
    /// Every backend field not covered above, untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// JS-style truthiness: null, false, 0 and "" count as missing.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Plain text rendering of a scalar JSON value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn first_truthy(raw: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|k| raw.get(*k)).find(|v| truthy(v)).map(value_text)
}

fn present(raw: &Map<String, Value>, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn basename(path: &str) -> Option<String> {
    path.rsplit(['/', '\\']).next().filter(|s| !s.is_empty()).map(|s| s.to_string())
}

/// Builds a [`Document`] from one raw backend record.
///
/// Normalized fields always win over raw fields sharing their key; the
/// alternate source fields (`DocumentType`, `Branch`, `SystemPath`, ...) stay
/// in the passthrough map.
pub fn adapt_document(raw: Map<String, Value>) -> Document {
    let file_name = first_truthy(&raw, &["FileName"])
        .or_else(|| raw.get("SystemPath").map(value_text).and_then(|p| basename(&p)));
    let document = Document {
        doc_type: first_truthy(&raw, &["DocType", "DocumentType", "Branch"]),
        text: first_truthy(&raw, &["Text"]).unwrap_or_else(|| NO_TEXT_SENTINEL.to_string()),
        from: first_truthy(&raw, &["From", "DocumentFrom", "Branch"]),
        to: first_truthy(&raw, &["To", "DocumentTo"]),
        report_number: present(&raw, "ReportNumber").map(|v| value_text(&v)),
        ingestion_date: present(&raw, "IngestionDate"),
        document_date: present(&raw, "DocumentDate"),
        file_name,
        is_attachment: coerce_bool(raw.get("IsAttachment")),
        extra: BTreeMap::new(),
    };
    let extra = raw.into_iter().filter(|(k, _)| !NORMALIZED_KEYS.contains(&k.as_str())).collect();
    Document { extra, ..document }
}

/// Adapts every record of a `documents` array. A record that is not a JSON
/// object makes the whole response malformed.
pub fn adapt_documents(items: Vec<Value>) -> Result<Vec<Document>, SearchError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(raw) => Ok(adapt_document(raw)),
            other => Err(SearchError::MalformedResponse(format!("document {i} is not an object: {other}"))),
        })
        .collect()
}

/// Renders a date field: epoch numbers (seconds or milliseconds) become
/// `YYYY-MM-DD`, anything else is shown as text. A string only counts as an
/// epoch with at least 10 digits, so `"2022"` or `"20220315"` stay as given.
pub fn display_date(value: &Value) -> String {
    let epoch = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            let digits = s.strip_prefix('-').unwrap_or(s);
            if digits.len() >= 10 && digits.bytes().all(|b| b.is_ascii_digit()) { s.parse::<f64>().ok() } else { None }
        }
        _ => None,
    };
    let Some(epoch) = epoch else { return value_text(value) };
    let millis = if epoch.abs() >= 1e11 { epoch } else { epoch * 1000.0 };
    match chrono::DateTime::from_timestamp_millis(millis as i64) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => value_text(value),
    }
}

impl Document {
    fn extra_text(&self, key: &str) -> Option<String> {
        self.extra.get(key).filter(|v| truthy(v)).map(value_text)
    }

    pub fn prop_id(&self) -> Option<String> {
        self.extra_text("PropId")
    }

    pub fn parent_prop_id(&self) -> Option<String> {
        self.extra_text("ParentPropId")
    }

    /// Path of the file on the file-serving backend.
    pub fn file_path(&self) -> Option<String> {
        self.extra_text("SystemPath").or_else(|| self.extra_text("FilePath"))
    }

    pub fn display_name(&self) -> String {
        self.file_name.clone().or_else(|| self.prop_id()).unwrap_or_else(|| "Document".to_string())
    }

    /// Parameters of the attachment/parent page opened for this document.
    pub fn attachment_lookup(&self) -> AttachmentLookup {
        AttachmentLookup {
            prop_id: self.prop_id().unwrap_or_default(),
            parent_prop_id: self.parent_prop_id().unwrap_or_default(),
            is_attachment: self.is_attachment,
        }
    }

    /// All fields in display order: normalized first, then passthrough.
    pub fn fields(&self) -> Vec<(String, Value)> {
        let opt = |v: &Option<String>| v.clone().map(Value::String).unwrap_or(Value::Null);
        let mut fields = vec![
            ("DocType".to_string(), opt(&self.doc_type)),
            ("Text".to_string(), Value::String(self.text.clone())),
            ("From".to_string(), opt(&self.from)),
            ("To".to_string(), opt(&self.to)),
            ("ReportNumber".to_string(), opt(&self.report_number)),
            ("IngestionDate".to_string(), self.ingestion_date.clone().unwrap_or(Value::Null)),
            ("DocumentDate".to_string(), self.document_date.clone().unwrap_or(Value::Null)),
            ("FileName".to_string(), opt(&self.file_name)),
            ("IsAttachment".to_string(), Value::Bool(self.is_attachment)),
        ];
        fields.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        fields
    }

    pub fn field(&self, key: &str) -> Option<Value> {
        self.fields().into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Text shown for one field in the grid or the metadata panel.
    pub fn cell_text(&self, key: &str) -> String {
        match self.field(key) {
            Some(v) if DATE_KEYS.contains(&key) && !v.is_null() => display_date(&v),
            Some(v) => value_text(&v),
            None => String::new(),
        }
    }

    /// Grid columns of this document.
    pub fn columns(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(k, _)| k)
            .filter(|k| !GRID_HIDDEN_COLUMNS.contains(&k.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests;
