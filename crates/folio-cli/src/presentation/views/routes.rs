use std::fmt;

use crate::presentation::view_models::RoutesViewModel;

pub struct RoutesView<'a> {
    data: &'a RoutesViewModel,
}

impl<'a> RoutesView<'a> {
    pub fn new(data: &'a RoutesViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RoutesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for route in &self.data.routes {
            writeln!(f, "/{}/projects/{}", route.locale, route.slug)?;
        }
        Ok(())
    }
}
