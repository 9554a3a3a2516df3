use folio_types::ProjectRecord;
use serde::Serialize;

use crate::facets::{
    apply_filters, available_categories, available_tags, available_years, projects_in_year,
};
use crate::filter::{CategoryFilter, FilterState};

/// Everything a project list screen needs for one selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    /// Years across the whole catalog, most recent first
    pub years: Vec<i32>,
    /// Categories offered for the selected year, `All` first
    pub categories: Vec<CategoryFilter>,
    /// Tags offered for the selected year
    pub tags: Vec<String>,
    /// Records passing every filter, in input order
    pub visible: Vec<ProjectRecord>,
    /// Size of the unfiltered catalog
    pub total: usize,
}

/// Compute facets and visible records for `state`.
///
/// The state is applied as given; use [`FilterState::select_year`] to keep
/// it consistent with the facets of a newly selected year.
pub fn derive_view(records: &[ProjectRecord], state: &FilterState) -> CatalogView {
    let in_year = projects_in_year(records, state.year);

    CatalogView {
        years: available_years(records),
        categories: available_categories(&in_year),
        tags: available_tags(&in_year),
        visible: apply_filters(&in_year, state.category, &state.tags),
        total: records.len(),
    }
}

/// Split records into featured and the rest, keeping their order
pub fn partition_featured(records: &[ProjectRecord]) -> (Vec<ProjectRecord>, Vec<ProjectRecord>) {
    records.iter().cloned().partition(|r| r.is_featured())
}
