use super::common::ViewModeArgs;
use clap::Subcommand;
use folio_engine::{CategoryFilter, YearSelection};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List projects, most recent first")]
    List {
        #[arg(long, help = "Locale to read (defaults to the site's default locale)")]
        locale: Option<String>,

        #[arg(long, help = "Year to show, 'current' or 'all'")]
        year: Option<YearSelection>,

        #[arg(long, help = "Category to show, or 'all'")]
        category: Option<CategoryFilter>,

        #[arg(long = "tag", help = "Keep projects carrying any of these tags")]
        tags: Vec<String>,

        #[arg(long, help = "Only featured projects")]
        featured: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one project")]
    Show {
        slug: String,

        #[arg(long)]
        locale: Option<String>,

        #[arg(long, help = "Include the markdown body")]
        body: bool,
    },

    #[command(about = "Show the years, categories and tags available for filtering")]
    Facets {
        #[arg(long)]
        locale: Option<String>,

        #[arg(long, help = "Year the category and tag facets are computed for, 'current' or 'all'")]
        year: Option<YearSelection>,
    },

    #[command(about = "Report malformed project documents")]
    Check {
        #[arg(long, help = "Locale to check (defaults to every configured locale)")]
        locale: Option<String>,
    },

    #[command(about = "List the (locale, slug) pairs to render statically")]
    Routes,
}
