pub mod check;
pub mod facets;
pub mod project;
pub mod routes;

use folio_types::{Locale, Status, StatusTone};
use owo_colors::OwoColorize;

/// Localized status label, colored by the status tone
pub(crate) fn status_label(status: Status, locale: &Locale) -> String {
    let label = status.label(locale);
    match status.tone() {
        StatusTone::Blue => label.blue().to_string(),
        StatusTone::Orange => label.truecolor(255, 165, 0).to_string(),
        StatusTone::Cyan => label.cyan().to_string(),
        StatusTone::Purple => label.magenta().to_string(),
        StatusTone::Green => label.green().to_string(),
    }
}
