use folio_types::{Category, Error, ProjectRecord};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::facets::{available_categories, available_tags, projects_in_year, reconcile};

/// Year facet selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum YearSelection {
    #[default]
    All,
    Year(i32),
}

impl YearSelection {
    /// The current calendar year in local time
    pub fn current() -> Self {
        YearSelection::Year(folio_types::current_year())
    }

    pub fn matches(&self, year: Option<i32>) -> bool {
        match self {
            YearSelection::All => true,
            YearSelection::Year(y) => year == Some(*y),
        }
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelection::All => write!(f, "all"),
            YearSelection::Year(y) => write!(f, "{}", y),
        }
    }
}

impl FromStr for YearSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(YearSelection::All);
        }
        if s.eq_ignore_ascii_case("current") {
            return Ok(YearSelection::current());
        }
        s.trim()
            .parse::<i32>()
            .map(YearSelection::Year)
            .map_err(|_| Error::UnknownVariant {
                kind: "year",
                value: s.to_string(),
            })
    }
}

impl Serialize for YearSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearSelection::All => serializer.serialize_str("all"),
            YearSelection::Year(y) => serializer.serialize_i32(*y),
        }
    }
}

/// Category facet selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryFilter::All => serializer.serialize_str("all"),
            CategoryFilter::Only(c) => c.serialize(serializer),
        }
    }
}

/// Selection state of a filterable project list.
///
/// Owned by the caller and passed into the engine's pure functions; the
/// engine never keeps state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub year: YearSelection,
    pub category: CategoryFilter,
    pub tags: BTreeSet<String>,
}

impl FilterState {
    /// State starting on a given year with no other filter
    pub fn for_year(year: i32) -> Self {
        Self {
            year: YearSelection::Year(year),
            ..Self::default()
        }
    }

    /// Switch year, then drop the category and tags the new year lacks
    pub fn select_year(&mut self, records: &[ProjectRecord], year: YearSelection) {
        self.year = year;
        let in_year = projects_in_year(records, year);
        let categories = available_categories(&in_year);
        let tags = available_tags(&in_year);
        reconcile(self, &categories, &tags);
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Add the tag if absent, remove it otherwise. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.year != YearSelection::All
            || self.category != CategoryFilter::All
            || !self.tags.is_empty()
    }
}
