use folio_content::RouteParam;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct RoutesViewModel {
    pub routes: Vec<RouteParam>,
}

impl CreateView for RoutesViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::routes::RoutesView;
        Box::new(RoutesView::new(self))
    }
}
