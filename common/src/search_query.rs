//! Shared search query models and helpers.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whether the backend combines multiple terms with OR (`any`) or AND (`all`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Any,
    All,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Any => "any",
            SearchMode::All => "all",
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(SearchMode::Any),
            "all" => Ok(SearchMode::All),
            other => Err(format!("unknown search type: {other}")),
        }
    }
}

/// Ordered list of free-text terms, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub terms: Vec<String>,
}

impl SearchQuery {
    pub fn from_url_param(raw: &str) -> Self {
        Self { terms: parse_query_param(raw) }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// JSON array form, the one `parse_query_param` reads back.
    pub fn to_url_param(&self) -> String {
        serde_json::to_string(&self.terms).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn with_term(&self, term: &str) -> Self {
        let mut terms = self.terms.clone();
        if !term.trim().is_empty() {
            terms.push(term.to_string());
        }
        Self { terms }
    }

    pub fn without_term(&self, index: usize) -> Self {
        let mut terms = self.terms.clone();
        if index < terms.len() {
            terms.remove(index);
        }
        Self { terms }
    }
}

/// Turns the raw `q` URL parameter into a list of non-blank terms.
///
/// A JSON array of strings is taken as is (minus blank entries). Anything
/// else, malformed JSON included, becomes a single term holding the raw input.
pub fn parse_query_param(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![];
    }
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(raw) {
        if items.iter().all(|item| item.is_string()) {
            return items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                    _ => None,
                })
                .collect();
        }
    }
    if raw.trim().is_empty() {
        vec![]
    } else {
        vec![raw.to_string()]
    }
}

/// What the normal search effect should do for a given `q` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryGate {
    /// There are terms: run a fresh search.
    Run,
    /// A parameter was given but held no usable term.
    Invalid,
    /// No query parameter at all.
    Empty,
}

pub fn query_gate(raw: &str, parsed: &[String]) -> QueryGate {
    if !parsed.is_empty() {
        QueryGate::Run
    } else if !raw.is_empty() {
        QueryGate::Invalid
    } else {
        QueryGate::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_no_terms() {
        assert!(parse_query_param("").is_empty());
    }

    #[test]
    fn json_array_of_strings() {
        assert_eq!(parse_query_param(r#"["alpha","beta"]"#), vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_json_array() {
        assert!(parse_query_param("[]").is_empty());
    }

    #[test]
    fn blank_entries_are_dropped() {
        assert_eq!(parse_query_param(r#"["alpha", "  ", ""]"#), vec!["alpha"]);
    }

    #[test]
    fn plain_text_is_a_single_term() {
        assert_eq!(parse_query_param("term one"), vec!["term one"]);
    }

    #[test]
    fn non_string_array_falls_back_to_raw() {
        assert_eq!(parse_query_param("[1,2]"), vec!["[1,2]"]);
        assert_eq!(parse_query_param(r#"{"a":1}"#), vec![r#"{"a":1}"#]);
    }

    #[test]
    fn blank_raw_input_gives_no_terms() {
        assert!(parse_query_param("   ").is_empty());
    }

    #[test]
    fn url_param_round_trips_through_parser() {
        let q = SearchQuery { terms: vec!["market trends".into(), "\"exact phrase\"".into()] };
        assert_eq!(SearchQuery::from_url_param(&q.to_url_param()), q);
    }

    #[test]
    fn gate_follows_raw_and_parsed() {
        assert_eq!(query_gate("x", &["x".to_string()]), QueryGate::Run);
        assert_eq!(query_gate("[]", &[]), QueryGate::Invalid);
        assert_eq!(query_gate("", &[]), QueryGate::Empty);
    }

    #[test]
    fn search_mode_parses_wire_names() {
        assert_eq!("all".parse::<SearchMode>(), Ok(SearchMode::All));
        assert!("both".parse::<SearchMode>().is_err());
        assert_eq!(serde_json::to_string(&SearchMode::Any).unwrap(), "\"any\"");
    }
}
