use serde_json::{Value, json};

use super::*;

fn adapt(value: Value) -> Document {
    match value {
        Value::Object(raw) => adapt_document(raw),
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn doc_type_falls_back_to_document_type_then_branch() {
    assert_eq!(adapt(json!({"DocType": "Report", "Branch": "London"})).doc_type.as_deref(), Some("Report"));
    assert_eq!(adapt(json!({"DocumentType": "Memo", "Branch": "London"})).doc_type.as_deref(), Some("Memo"));
    assert_eq!(adapt(json!({"DocType": "", "Branch": "London"})).doc_type.as_deref(), Some("London"));
    assert_eq!(adapt(json!({})).doc_type, None);
}

#[test]
fn missing_text_gets_sentinel() {
    assert_eq!(adapt(json!({})).text, "No text found");
    assert_eq!(adapt(json!({"Text": ""})).text, "No text found");
    assert_eq!(adapt(json!({"Text": "body"})).text, "body");
}

#[test]
fn is_attachment_accepts_bool_and_string() {
    assert!(adapt(json!({"IsAttachment": "True"})).is_attachment);
    assert!(adapt(json!({"IsAttachment": true})).is_attachment);
    assert!(!adapt(json!({"IsAttachment": "false"})).is_attachment);
    assert!(!adapt(json!({"IsAttachment": 1})).is_attachment);
    assert!(!adapt(json!({})).is_attachment);
}

#[test]
fn correspondents_fall_back() {
    let doc = adapt(json!({"DocumentFrom": "Embassy", "DocumentTo": "Ministry"}));
    assert_eq!(doc.from.as_deref(), Some("Embassy"));
    assert_eq!(doc.to.as_deref(), Some("Ministry"));
    assert_eq!(adapt(json!({"Branch": "Tokyo"})).from.as_deref(), Some("Tokyo"));
}

#[test]
fn file_name_from_system_path() {
    assert_eq!(adapt(json!({"SystemPath": "/data/2021/memo.pdf"})).file_name.as_deref(), Some("memo.pdf"));
    assert_eq!(adapt(json!({"SystemPath": "C:\\share\\x.docx"})).file_name.as_deref(), Some("x.docx"));
    assert_eq!(adapt(json!({"FileName": "given.txt", "SystemPath": "/a/b.pdf"})).file_name.as_deref(), Some("given.txt"));
}

#[test]
fn passthrough_fields_are_kept() {
    let doc = adapt(json!({
        "PropId": "p-1",
        "ParentPropId": "p-0",
        "DocumentType": "Memo",
        "highlighted_text": "<em>x</em>",
        "Pages": 3
    }));
    assert_eq!(doc.extra.get("PropId"), Some(&json!("p-1")));
    assert_eq!(doc.extra.get("DocumentType"), Some(&json!("Memo")));
    assert_eq!(doc.extra.get("Pages"), Some(&json!(3)));
    assert!(!doc.extra.contains_key("DocType"));
    assert_eq!(doc.prop_id().as_deref(), Some("p-1"));
    assert_eq!(doc.parent_prop_id().as_deref(), Some("p-0"));
}

#[test]
fn normalized_fields_win_over_raw() {
    let doc = adapt(json!({"Text": "", "DocType": null, "Branch": "London"}));
    assert_eq!(doc.field("Text"), Some(json!("No text found")));
    assert_eq!(doc.field("DocType"), Some(json!("London")));
    assert!(!doc.extra.contains_key("Text"));
}

#[test]
fn serde_round_trip_flattens_extra() {
    let doc = adapt(json!({"PropId": "p-1", "Text": "body", "IsAttachment": "True"}));
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["PropId"], "p-1");
    assert_eq!(value["IsAttachment"], true);
    let back: Document = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn non_object_record_is_malformed() {
    let err = adapt_documents(vec![json!({"PropId": "a"}), json!("oops")]).unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}

#[test]
fn epoch_dates_are_formatted() {
    assert_eq!(display_date(&json!(1_609_459_200)), "2021-01-01");
    assert_eq!(display_date(&json!(1_609_459_200_000u64)), "2021-01-01");
    assert_eq!(display_date(&json!("1609459200")), "2021-01-01");
    assert_eq!(display_date(&json!("2021-03-04")), "2021-03-04");
}

#[test]
fn short_digit_strings_are_not_epochs() {
    assert_eq!(display_date(&json!("2022")), "2022");
    assert_eq!(display_date(&json!("20220315")), "20220315");
}

#[test]
fn cells_format_dates_and_hide_text() {
    let doc = adapt(json!({"PropId": "p", "DocumentDate": 1_609_459_200, "Text": "body"}));
    assert_eq!(doc.cell_text("DocumentDate"), "2021-01-01");
    assert_eq!(doc.cell_text("IngestionDate"), "");
    assert_eq!(doc.cell_text("Missing"), "");
    let columns = doc.columns();
    assert!(!columns.iter().any(|c| c == "Text"));
    assert!(columns.iter().any(|c| c == "DocumentDate"));
}

#[test]
fn attachment_lookup_uses_ids() {
    let doc = adapt(json!({"PropId": "A", "ParentPropId": "B", "IsAttachment": "True"}));
    assert_eq!(
        doc.attachment_lookup(),
        AttachmentLookup { prop_id: "A".into(), parent_prop_id: "B".into(), is_attachment: true }
    );
    assert_eq!(doc.display_name(), "A");
}
