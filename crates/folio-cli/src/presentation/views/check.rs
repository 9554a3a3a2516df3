use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::CheckViewModel;

pub struct CheckView<'a> {
    data: &'a CheckViewModel,
}

impl<'a> CheckView<'a> {
    pub fn new(data: &'a CheckViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for summary in &self.data.locales {
            write!(f, "{:<6}", summary.locale.to_string().bold())?;
            match &summary.resolved {
                None => writeln!(f, " no collection")?,
                Some(resolved) => {
                    write!(
                        f,
                        " {} documents, {} valid",
                        summary.total, summary.valid
                    )?;
                    if resolved != &summary.locale {
                        write!(f, " {}", format!("(read from '{}')", resolved).bright_black())?;
                    }
                    writeln!(f)?;
                }
            }
        }

        if self.data.issues.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Issues:")?;
        for issue in &self.data.issues {
            writeln!(
                f,
                "  {} {} [{}] {}",
                "✗".red(),
                issue.path.display(),
                issue.kind,
                issue.reason
            )?;
        }

        Ok(())
    }
}
