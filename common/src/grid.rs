//! Client-side helpers of the grid view.

use crate::document::Document;

/// Columns of the grid: the fields of the first document, minus hidden ones.
pub fn grid_columns(documents: &[Document]) -> Vec<String> {
    documents.first().map(|d| d.columns()).unwrap_or_default()
}

/// Indices of the rows whose visible cells contain `needle`, case-insensitively.
/// An empty needle keeps every row.
pub fn filter_rows(documents: &[Document], columns: &[String], needle: &str) -> Vec<usize> {
    let needle = needle.trim().to_lowercase();
    documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| {
            needle.is_empty()
                || columns.iter().any(|col| doc.cell_text(col).to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::document::adapt_document;

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(raw) => adapt_document(raw),
            _ => unreachable!(),
        }
    }

    #[test]
    fn columns_skip_text_and_highlights() {
        let docs = vec![doc(json!({"PropId": "p1", "Text": "body", "highlighted_text": "<em>x</em>"}))];
        let cols = grid_columns(&docs);
        assert!(cols.contains(&"PropId".to_string()));
        assert!(cols.contains(&"DocType".to_string()));
        assert!(!cols.contains(&"Text".to_string()));
        assert!(!cols.contains(&"highlighted_text".to_string()));
    }

    #[test]
    fn no_documents_no_columns() {
        assert!(grid_columns(&[]).is_empty());
    }

    #[test]
    fn filter_matches_any_visible_cell() {
        let docs = vec![
            doc(json!({"PropId": "p1", "Branch": "London", "Text": "secret"})),
            doc(json!({"PropId": "p2", "Branch": "Tokyo"})),
        ];
        let cols = grid_columns(&docs);
        assert_eq!(filter_rows(&docs, &cols, "tok"), vec![1]);
        assert_eq!(filter_rows(&docs, &cols, ""), vec![0, 1]);
        // Text is not a grid column
        assert!(filter_rows(&docs, &cols, "secret").is_empty());
    }
}
