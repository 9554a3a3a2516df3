use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use folio_runtime::Site;

pub fn handle(
    site: &Site,
    slug: &str,
    locale: Option<String>,
    include_body: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let locale = site.resolve_locale(locale.as_deref());

    let Some(record) = site.catalog().get_project(slug, &locale)? else {
        bail!("Project not found: {} (locale '{}')", slug, locale);
    };

    let view_model = presenters::present_project_detail(record, &locale, include_body);
    ctx.render(view_model)
}
