use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use folio_engine::{FilterState, YearSelection, derive_view};
use folio_runtime::Site;

pub fn handle(
    site: &Site,
    locale: Option<String>,
    year: Option<YearSelection>,
    ctx: &HandlerContext,
) -> Result<()> {
    let locale = site.resolve_locale(locale.as_deref());
    let year = year.unwrap_or_default();

    let load = site.catalog().list_projects_with_report(&locale)?;
    let state = FilterState {
        year,
        ..FilterState::default()
    };
    let view = derive_view(&load.records, &state);

    let view_model = presenters::present_facets(&locale, &load.records, year, view);
    ctx.render(view_model)
}
