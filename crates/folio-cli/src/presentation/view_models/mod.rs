pub mod check;
pub mod common;
pub mod facets;
pub mod project;
pub mod result;
pub mod routes;

use std::fmt;

pub use check::{CheckViewModel, LocaleCheckSummary};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use facets::{CategoryCount, FacetsViewModel, TagCount};
pub use project::{ProjectDetailViewModel, ProjectEntryViewModel, ProjectListViewModel};
pub use result::CommandResultViewModel;
pub use routes::RoutesViewModel;

/// Bridge from a view model to the text view rendering it at a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
