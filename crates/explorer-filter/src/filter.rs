//! Filter records
//!
//! A [`Filter`] holds the criteria for one view of the campaign responses. The two
//! views of a dashboard ("drill-down" and "compare-to") form a [`FilterPair`].
//!
//! Multi-valued fields are ordered sets: values keep their selection order and a value
//! can be present at most once.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of selected values
pub type ValueSet = IndexSet<String>;

/// Names of the filter fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Countries,
    Regions,
    ResponseTopics,
    Ages,
    AgeBuckets,
    Genders,
    Professions,
    OnlyResponsesFromCategories,
    OnlyMultiWordPhrasesContainingFilterTerm,
    KeywordFilter,
    KeywordExclude,
}

impl FilterField {
    /// Every field, in form order
    pub const ALL: [FilterField; 11] = [
        FilterField::Countries,
        FilterField::Regions,
        FilterField::ResponseTopics,
        FilterField::Ages,
        FilterField::AgeBuckets,
        FilterField::Genders,
        FilterField::Professions,
        FilterField::OnlyResponsesFromCategories,
        FilterField::OnlyMultiWordPhrasesContainingFilterTerm,
        FilterField::KeywordFilter,
        FilterField::KeywordExclude,
    ];

    /// Wire name of the field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Countries => "countries",
            FilterField::Regions => "regions",
            FilterField::ResponseTopics => "response_topics",
            FilterField::Ages => "ages",
            FilterField::AgeBuckets => "age_buckets",
            FilterField::Genders => "genders",
            FilterField::Professions => "professions",
            FilterField::OnlyResponsesFromCategories => "only_responses_from_categories",
            FilterField::OnlyMultiWordPhrasesContainingFilterTerm => {
                "only_multi_word_phrases_containing_filter_term"
            }
            FilterField::KeywordFilter => "keyword_filter",
            FilterField::KeywordExclude => "keyword_exclude",
        }
    }

    /// Whether the field holds a set of values
    #[inline]
    #[must_use]
    pub fn is_multi_value(self) -> bool {
        matches!(
            self,
            FilterField::Countries
                | FilterField::Regions
                | FilterField::ResponseTopics
                | FilterField::Ages
                | FilterField::AgeBuckets
                | FilterField::Genders
                | FilterField::Professions
        )
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed edit of one field, as produced by a selection widget or text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Countries(Vec<String>),
    Regions(Vec<String>),
    ResponseTopics(Vec<String>),
    Ages(Vec<String>),
    AgeBuckets(Vec<String>),
    Genders(Vec<String>),
    Professions(Vec<String>),
    OnlyResponsesFromCategories(bool),
    OnlyMultiWordPhrasesContainingFilterTerm(bool),
    KeywordFilter(String),
    KeywordExclude(String),
}

impl FieldEdit {
    /// Field targeted by this edit
    #[must_use]
    pub fn field(&self) -> FilterField {
        match self {
            FieldEdit::Countries(_) => FilterField::Countries,
            FieldEdit::Regions(_) => FilterField::Regions,
            FieldEdit::ResponseTopics(_) => FilterField::ResponseTopics,
            FieldEdit::Ages(_) => FilterField::Ages,
            FieldEdit::AgeBuckets(_) => FilterField::AgeBuckets,
            FieldEdit::Genders(_) => FilterField::Genders,
            FieldEdit::Professions(_) => FilterField::Professions,
            FieldEdit::OnlyResponsesFromCategories(_) => FilterField::OnlyResponsesFromCategories,
            FieldEdit::OnlyMultiWordPhrasesContainingFilterTerm(_) => {
                FilterField::OnlyMultiWordPhrasesContainingFilterTerm
            }
            FieldEdit::KeywordFilter(_) => FilterField::KeywordFilter,
            FieldEdit::KeywordExclude(_) => FilterField::KeywordExclude,
        }
    }
}

/// Criteria narrowing which survey responses are aggregated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Country alpha-2 codes
    pub countries: ValueSet,
    /// Region keys of the single selected country
    pub regions: ValueSet,
    pub response_topics: ValueSet,
    pub ages: ValueSet,
    pub age_buckets: ValueSet,
    pub genders: ValueSet,
    pub professions: ValueSet,
    pub only_responses_from_categories: bool,
    pub only_multi_word_phrases_containing_filter_term: bool,
    pub keyword_filter: String,
    pub keyword_exclude: String,
}

impl Filter {
    /// Create empty filter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With preselected countries
    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Values of a multi-valued field
    #[must_use]
    pub fn values(&self, field: FilterField) -> Option<&ValueSet> {
        match field {
            FilterField::Countries => Some(&self.countries),
            FilterField::Regions => Some(&self.regions),
            FilterField::ResponseTopics => Some(&self.response_topics),
            FilterField::Ages => Some(&self.ages),
            FilterField::AgeBuckets => Some(&self.age_buckets),
            FilterField::Genders => Some(&self.genders),
            FilterField::Professions => Some(&self.professions),
            _ => None,
        }
    }

    fn values_mut(&mut self, field: FilterField) -> Option<&mut ValueSet> {
        match field {
            FilterField::Countries => Some(&mut self.countries),
            FilterField::Regions => Some(&mut self.regions),
            FilterField::ResponseTopics => Some(&mut self.response_topics),
            FilterField::Ages => Some(&mut self.ages),
            FilterField::AgeBuckets => Some(&mut self.age_buckets),
            FilterField::Genders => Some(&mut self.genders),
            FilterField::Professions => Some(&mut self.professions),
            _ => None,
        }
    }

    /// Append a value to a multi-valued field
    ///
    /// Returns `false` when the value is already present or the field is not
    /// multi-valued. Existing values are never removed.
    pub fn insert_value(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        match self.values_mut(field) {
            Some(values) => values.insert(value.into()),
            None => false,
        }
    }

    /// Replace keyword filter, returning whether it changed
    ///
    /// Keywords are committed lower-cased, so a keyword differing only in case is the
    /// same keyword.
    pub fn set_keyword_filter(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into().to_lowercase();
        if self.keyword_filter.to_lowercase() == keyword {
            return false;
        }
        self.keyword_filter = keyword;
        true
    }

    /// Apply a widget edit, returning whether the filter changed
    pub fn apply_edit(&mut self, edit: FieldEdit) -> bool {
        let field = edit.field();
        match edit {
            FieldEdit::Countries(values)
            | FieldEdit::Regions(values)
            | FieldEdit::ResponseTopics(values)
            | FieldEdit::Ages(values)
            | FieldEdit::AgeBuckets(values)
            | FieldEdit::Genders(values)
            | FieldEdit::Professions(values) => {
                let next: ValueSet = values.into_iter().collect();
                match self.values_mut(field) {
                    // Order matters to the widget, so compare as sequences
                    Some(current) if !current.iter().eq(next.iter()) => {
                        *current = next;
                        true
                    }
                    _ => false,
                }
            }
            FieldEdit::OnlyResponsesFromCategories(flag) => {
                replace(&mut self.only_responses_from_categories, flag)
            }
            FieldEdit::OnlyMultiWordPhrasesContainingFilterTerm(flag) => {
                replace(&mut self.only_multi_word_phrases_containing_filter_term, flag)
            }
            FieldEdit::KeywordFilter(text) => replace(&mut self.keyword_filter, text),
            FieldEdit::KeywordExclude(text) => replace(&mut self.keyword_exclude, text),
        }
    }

    /// Lower-case both keyword fields in place
    pub fn normalize_keywords(&mut self) {
        if !self.keyword_filter.is_empty() {
            self.keyword_filter = self.keyword_filter.to_lowercase();
        }
        if !self.keyword_exclude.is_empty() {
            self.keyword_exclude = self.keyword_exclude.to_lowercase();
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Which form of the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormId {
    /// Drill-down
    Filter1,
    /// Compare-to
    Filter2,
}

impl FormId {
    /// Both forms, in tab order
    pub const BOTH: [FormId; 2] = [FormId::Filter1, FormId::Filter2];

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormId::Filter1 => "drill-down",
            FormId::Filter2 => "compare-to",
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The drill-down and compare-to filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPair {
    pub filter1: Filter,
    pub filter2: Filter,
}

impl FilterPair {
    /// Create pair from two filters
    #[inline]
    #[must_use]
    pub fn new(filter1: Filter, filter2: Filter) -> Self {
        Self { filter1, filter2 }
    }

    /// Both forms starting from the same defaults
    #[must_use]
    pub fn uniform(defaults: &Filter) -> Self {
        Self::new(defaults.clone(), defaults.clone())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, form: FormId) -> &Filter {
        match form {
            FormId::Filter1 => &self.filter1,
            FormId::Filter2 => &self.filter2,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, form: FormId) -> &mut Filter {
        match form {
            FormId::Filter1 => &mut self.filter1,
            FormId::Filter2 => &mut self.filter2,
        }
    }

    /// Lower-case the keyword fields of both filters
    pub fn normalize_keywords(&mut self) {
        self.filter1.normalize_keywords();
        self.filter2.normalize_keywords();
    }

    /// Whether both filters select the same responses
    #[inline]
    #[must_use]
    pub fn are_identical(&self) -> bool {
        self.filter1 == self.filter2
    }
}
