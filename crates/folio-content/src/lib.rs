//! Content layer of the folio catalog.
//!
//! A content root holds one directory per locale, each containing one
//! `{slug}.{ext}` document per project: a front-matter block followed by a
//! markdown body. This crate reads those documents through a
//! [`DocumentStore`], validates their metadata and exposes the
//! locale-aware [`Catalog`].

pub mod catalog;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod schema;
pub mod store;
pub mod traits;

pub use catalog::{Catalog, CatalogLoad, CheckReport, LoadPolicy, RouteParam};
pub use document::parse_document;
pub use error::{Error, Result};
pub use frontmatter::{FrontMatter, FrontMatterFormat};
pub use schema::{DocumentIssue, IssueKind, Violation};
pub use store::{DEFAULT_EXTENSION, FsDocumentStore};
pub use traits::{DocumentStore, RawDocument};
