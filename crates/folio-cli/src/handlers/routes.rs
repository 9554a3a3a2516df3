use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use folio_runtime::Site;

pub fn handle(site: &Site, ctx: &HandlerContext) -> Result<()> {
    let routes = site.routes()?;
    ctx.render(presenters::present_routes(routes))
}
