pub mod config;
pub mod error;
pub mod site;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result};
pub use site::{ListOutcome, Site};
