pub mod check;
pub mod facets;
pub mod project;
pub mod routes;

pub use check::present_check;
pub use facets::present_facets;
pub use project::{present_project_detail, present_project_list};
pub use routes::present_routes;
