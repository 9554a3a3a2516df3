use folio_engine::{CatalogView, YearSelection, projects_in_year};
use folio_types::{Locale, ProjectRecord};
use std::collections::BTreeMap;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CategoryCount, CommandResultViewModel, FacetsViewModel, Guidance, StatusBadge, TagCount,
};

pub fn present_facets(
    locale: &Locale,
    records: &[ProjectRecord],
    year: YearSelection,
    view: CatalogView,
) -> CommandResultViewModel<FacetsViewModel> {
    let in_year = projects_in_year(records, year);

    let categories = view
        .categories
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: in_year
                .iter()
                .filter(|r| category.matches(r.category()))
                .count(),
        })
        .collect();

    let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &in_year {
        for tag in record.tags() {
            *tag_counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    let tags = view
        .tags
        .into_iter()
        .map(|tag| TagCount {
            count: tag_counts.get(tag.as_str()).copied().unwrap_or(0),
            tag,
        })
        .collect();

    let empty = in_year.is_empty();
    let content = FacetsViewModel {
        locale: locale.clone(),
        year,
        years: view.years,
        categories,
        tags,
    };

    let mut result = CommandResultViewModel::new(content);
    if empty {
        result = result.with_badge(StatusBadge::info(format!("No projects for year {}", year)));
        if year != YearSelection::All {
            result = result.with_suggestion(
                Guidance::new("Show facets across every year").with_command(cmd::FACETS_ALL_YEARS),
            );
        }
    }
    result
}
