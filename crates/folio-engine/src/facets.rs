use folio_types::{Category, ProjectRecord};
use std::collections::BTreeSet;

use crate::filter::{CategoryFilter, FilterState, YearSelection};

/// Distinct years present in the records, most recent first
pub fn available_years(records: &[ProjectRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().filter_map(|r| r.year()).collect();
    years.into_iter().rev().collect()
}

/// Records dated in `year`; `All` keeps everything
pub fn projects_in_year(records: &[ProjectRecord], year: YearSelection) -> Vec<ProjectRecord> {
    records
        .iter()
        .filter(|r| year.matches(r.year()))
        .cloned()
        .collect()
}

/// `All` followed by the categories present, in enumeration order
pub fn available_categories(records: &[ProjectRecord]) -> Vec<CategoryFilter> {
    let present: BTreeSet<Category> = records.iter().map(|r| r.category()).collect();

    std::iter::once(CategoryFilter::All)
        .chain(
            Category::ALL
                .into_iter()
                .filter(|c| present.contains(c))
                .map(CategoryFilter::Only),
        )
        .collect()
}

/// Distinct tags, sorted lexically
pub fn available_tags(records: &[ProjectRecord]) -> Vec<String> {
    let tags: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.tags().iter().map(String::as_str))
        .collect();
    tags.into_iter().map(str::to_string).collect()
}

/// Keep the records matching the category and at least one selected tag.
///
/// An empty tag selection matches every record.
pub fn apply_filters(
    records: &[ProjectRecord],
    category: CategoryFilter,
    tags: &BTreeSet<String>,
) -> Vec<ProjectRecord> {
    records
        .iter()
        .filter(|r| category.matches(r.category()))
        .filter(|r| tags.is_empty() || r.tags().iter().any(|t| tags.contains(t)))
        .cloned()
        .collect()
}

/// Drop selections that are no longer offered.
///
/// A category outside `categories` resets to `All`; tags outside `tags`
/// are removed.
pub fn reconcile(state: &mut FilterState, categories: &[CategoryFilter], tags: &[String]) {
    if !categories.contains(&state.category) {
        state.category = CategoryFilter::All;
    }
    state.tags.retain(|t| tags.contains(t));
}
