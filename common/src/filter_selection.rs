//! Facet and date filters selected in the sidebar.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::search_const::{
    BRANCHTYPE_COUNTS_KEY, BRANCH_FIELD, DOCTYPE_COUNTS_KEY, DOCTYPE_FIELD, EXTENSIONTYPE_COUNTS_KEY,
    EXTENSION_FIELD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    DocType,
    Branch,
    Extension,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::DocType, Facet::Branch, Facet::Extension];

    /// Field name the backend filters on.
    pub fn backend_field(&self) -> &'static str {
        match self {
            Facet::DocType => DOCTYPE_FIELD,
            Facet::Branch => BRANCH_FIELD,
            Facet::Extension => EXTENSION_FIELD,
        }
    }

    /// Key of this facet's counts inside `aggregations`.
    pub fn aggregation_key(&self) -> &'static str {
        match self {
            Facet::DocType => DOCTYPE_COUNTS_KEY,
            Facet::Branch => BRANCHTYPE_COUNTS_KEY,
            Facet::Extension => EXTENSIONTYPE_COUNTS_KEY,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::DocType => "Document Type",
            Facet::Branch => "Branch",
            Facet::Extension => "File Extension",
        }
    }
}

/// Bounds sent as `date_range`; either side may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub doc_types: BTreeSet<String>,
    pub branches: BTreeSet<String>,
    pub extensions: BTreeSet<String>,
    pub year: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

impl FilterSelection {
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::DocType => &self.doc_types,
            Facet::Branch => &self.branches,
            Facet::Extension => &self.extensions,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::DocType => &mut self.doc_types,
            Facet::Branch => &mut self.branches,
            Facet::Extension => &mut self.extensions,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Checks the value if it was unchecked, unchecks it otherwise.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = self.selected_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    pub fn set_year(&mut self, year: &str) {
        self.year = non_blank(year);
    }

    pub fn set_from_date(&mut self, date: &str) {
        self.from_date = non_blank(date);
    }

    pub fn set_to_date(&mut self, date: &str) {
        self.to_date = non_blank(date);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A from/to pair with only one side set.
    pub fn has_incomplete_date_range(&self) -> bool {
        self.from_date.is_some() != self.to_date.is_some()
    }

    /// Resolves the year or explicit bounds into the range sent to the backend.
    /// A year wins over explicit bounds. `None` when no bound applies.
    pub fn date_range(&self) -> Result<Option<DateRange>, SearchError> {
        if self.has_incomplete_date_range() {
            return Err(SearchError::IncompleteDateRange);
        }
        let range = match &self.year {
            Some(year) => DateRange {
                from: Some(format!("{year}-01-01")),
                to: Some(format!("{year}-12-31")),
            },
            None => DateRange { from: self.from_date.clone(), to: self.to_date.clone() },
        };
        Ok(if range.is_empty() { None } else { Some(range) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut f = FilterSelection::default();
        f.toggle(Facet::Branch, "London");
        assert!(f.is_selected(Facet::Branch, "London"));
        assert!(f.selected(Facet::DocType).is_empty());
        f.toggle(Facet::Branch, "London");
        assert!(f.is_empty());
    }

    #[test]
    fn half_date_range_is_rejected() {
        let mut f = FilterSelection::default();
        f.set_from_date("2022-03-01");
        assert_eq!(f.date_range(), Err(SearchError::IncompleteDateRange));

        let mut f = FilterSelection::default();
        f.set_to_date("2022-03-01");
        assert_eq!(f.date_range(), Err(SearchError::IncompleteDateRange));
    }

    #[test]
    fn year_overrides_explicit_bounds() {
        let mut f = FilterSelection::default();
        f.set_year("2022");
        f.set_from_date("2020-01-01");
        f.set_to_date("2020-06-30");
        let range = f.date_range().unwrap().unwrap();
        assert_eq!(range.from.as_deref(), Some("2022-01-01"));
        assert_eq!(range.to.as_deref(), Some("2022-12-31"));
    }

    #[test]
    fn blank_inputs_unset_the_bound() {
        let mut f = FilterSelection::default();
        f.set_from_date("2021-01-01");
        f.set_from_date("  ");
        assert_eq!(f.from_date, None);
        assert_eq!(f.date_range(), Ok(None));
    }

    #[test]
    fn clear_resets_everything() {
        let mut f = FilterSelection::default();
        f.toggle(Facet::Extension, "pdf");
        f.set_year("2021");
        f.clear();
        assert!(f.is_empty());
    }
}
