use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use folio_runtime::Site;

pub fn handle(site: &Site, locale: Option<String>, ctx: &HandlerContext) -> Result<()> {
    let locale = locale.map(|l| site.resolve_locale(Some(&l)));
    let reports = site.check(locale.as_ref())?;

    let view_model = presenters::present_check(reports);
    let malformed = view_model.content.malformed_documents();
    ctx.render(view_model)?;

    if malformed > 0 {
        bail!("{} malformed document(s) found", malformed);
    }
    Ok(())
}
