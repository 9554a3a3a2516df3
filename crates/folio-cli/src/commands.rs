use super::args::hints::{cmd, fmt};
use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use folio_runtime::Site;

pub fn run(cli: Cli) -> Result<()> {
    let site = Site::open(&cli.config, cli.content_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&site);
        return Ok(());
    };

    match command {
        Commands::List {
            locale,
            year,
            category,
            tags,
            featured,
            view_mode,
        } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::list::handle(&site, locale, year, category, tags, featured, &ctx)
        }

        Commands::Show { slug, locale, body } => {
            let ctx = HandlerContext::standard(cli.format);
            handlers::show::handle(&site, &slug, locale, body, &ctx)
        }

        Commands::Facets { locale, year } => {
            let ctx = HandlerContext::standard(cli.format);
            handlers::facets::handle(&site, locale, year, &ctx)
        }

        Commands::Check { locale } => {
            let ctx = HandlerContext::standard(cli.format);
            handlers::check::handle(&site, locale, &ctx)
        }

        Commands::Routes => {
            let ctx = HandlerContext::standard(cli.format);
            handlers::routes::handle(&site, &ctx)
        }
    }
}

fn show_guidance(site: &Site) {
    println!("folio - localized project catalog\n");
    println!("Content root: {}", site.content_root().display());

    let locales: Vec<&str> = site.supported_locales().iter().map(|l| l.as_str()).collect();
    println!(
        "Locales: {} (default: {})\n",
        locales.join(", "),
        site.default_locale()
    );

    println!("Quick commands:");
    println!("  {:<34} # List projects", cmd::LIST);
    for locale in site.supported_locales().iter().skip(1) {
        println!("  {:<34} # List another locale", fmt::list_locale(locale.as_str()));
    }
    println!("  {:<34} # Show one project", fmt::show("<slug>"));
    println!("  {:<34} # Years, categories and tags", cmd::FACETS);
    println!("  {:<34} # Validate documents", cmd::CHECK);
    println!("  {:<34} # Static route params\n", cmd::ROUTES);

    println!("For more commands:");
    println!("  folio --help");
}
