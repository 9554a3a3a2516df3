use folio_engine::{CategoryFilter, YearSelection};
use folio_types::{Category, Locale};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct FacetsViewModel {
    pub locale: Locale,
    pub year: YearSelection,
    pub years: Vec<i32>,
    pub categories: Vec<CategoryCount>,
    pub tags: Vec<TagCount>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: CategoryFilter,
    pub count: usize,
}

impl CategoryCount {
    pub fn category(&self) -> Option<Category> {
        match self.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(c),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl CreateView for FacetsViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::facets::FacetsView;
        Box::new(FacetsView::new(self))
    }
}
