use std::fmt;

use crate::presentation::formatters::text;
use crate::presentation::view_models::FacetsViewModel;

pub struct FacetsView<'a> {
    data: &'a FacetsViewModel,
}

impl<'a> FacetsView<'a> {
    pub fn new(data: &'a FacetsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FacetsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let locale = &self.data.locale;

        let years: Vec<String> = self.data.years.iter().map(|y| y.to_string()).collect();
        writeln!(f, "Years: all, {}", years.join(", "))?;
        writeln!(f, "Selected year: {}", self.data.year)?;
        writeln!(f)?;

        writeln!(f, "Categories:")?;
        for entry in &self.data.categories {
            let label = match entry.category() {
                Some(category) => category.label(locale),
                None if locale.is_french() => "Tous",
                None => "All",
            };
            writeln!(f, "  {} {:>3}", text::pad(label, 16), entry.count)?;
        }

        writeln!(f)?;
        if self.data.tags.is_empty() {
            writeln!(f, "Tags: (none)")?;
        } else {
            writeln!(f, "Tags:")?;
            for entry in &self.data.tags {
                writeln!(f, "  {} {:>3}", text::pad(&entry.tag, 16), entry.count)?;
            }
        }

        Ok(())
    }
}
