pub mod cmd {
    pub const LIST: &str = "folio list";
    pub const FACETS: &str = "folio facets";
    pub const FACETS_ALL_YEARS: &str = "folio facets --year all";
    pub const CHECK: &str = "folio check";
    pub const ROUTES: &str = "folio routes";
}

pub mod fmt {
    pub fn show(slug: &str) -> String {
        format!("folio show {}", slug)
    }

    pub fn list_locale(locale: &str) -> String {
        format!("folio list --locale {}", locale)
    }

    pub fn check_locale(locale: &str) -> String {
        format!("folio check --locale {}", locale)
    }
}
