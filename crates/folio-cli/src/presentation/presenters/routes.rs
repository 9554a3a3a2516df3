use folio_content::RouteParam;

use crate::presentation::view_models::{CommandResultViewModel, RoutesViewModel, StatusBadge};

pub fn present_routes(routes: Vec<RouteParam>) -> CommandResultViewModel<RoutesViewModel> {
    let label = format!("{} routes", routes.len());
    CommandResultViewModel::new(RoutesViewModel { routes }).with_badge(StatusBadge::info(label))
}
