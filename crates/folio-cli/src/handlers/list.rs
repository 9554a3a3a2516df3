use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use folio_engine::{CategoryFilter, FilterState, YearSelection};
use folio_runtime::Site;

pub fn handle(
    site: &Site,
    locale: Option<String>,
    year: Option<YearSelection>,
    category: Option<CategoryFilter>,
    tags: Vec<String>,
    featured: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let locale = site.resolve_locale(locale.as_deref());

    let state = FilterState {
        year: year.unwrap_or_default(),
        category: category.unwrap_or_default(),
        tags: tags.into_iter().collect(),
    };

    let outcome = site.list(&locale, &state)?;
    let view_model =
        presenters::present_project_list(&outcome.load, outcome.view, state, featured);

    ctx.render(view_model)
}
