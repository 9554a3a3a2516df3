//! # Presentation Layer
//!
//! Console output for the CLI, following a small MVVM split.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                 ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** Dates stay `YYYY-MM-DD` strings, categories
//!   and statuses stay enum values; localized labels are resolved by views.
//! * **`ViewMode` is density, not shape.** Minimal prints slugs only, Compact
//!   one line per item, Standard adds context, Verbose shows every field.
//! * **JSON ignores `ViewMode`.** `--format json` always dumps the complete
//!   `{ badge, content, suggestions }` envelope.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Count, group, or decide when to show a tip | `presenters/` |
//! | Change colors, layout, or what a mode hides | `views/` |
//! | Truncate or pad text | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
