mod context;

pub mod check;
pub mod facets;
pub mod list;
pub mod routes;
pub mod show;

pub use context::HandlerContext;
