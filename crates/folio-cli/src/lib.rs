// NOTE: folio CLI layout
//
// Handlers read the site through folio-runtime, hand domain values to a
// presenter, and render the resulting view model. Filtering never happens
// in handlers: the selection state is built from the arguments and passed
// to folio-engine unchanged.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
pub use logging::init_logging;
