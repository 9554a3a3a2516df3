// Engine module - Pure derivations over loaded project records
// This layer sits between the catalog (content) and CLI presentation

pub mod facets;
pub mod filter;
pub mod view;

pub use facets::{
    apply_filters, available_categories, available_tags, available_years, projects_in_year,
    reconcile,
};
pub use filter::{CategoryFilter, FilterState, YearSelection};
pub use view::{CatalogView, derive_view, partition_featured};
