use marks_core::error::Error;
use marks_core::types::{Bookmark, FilterCriteria};

use crate::resolve::Session;

/// What to change on the bookmark that `criteria` resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateArgs {
    pub criteria: FilterCriteria,
    pub new_id: Option<String>,
    pub new_url: Option<String>,
    pub new_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    /// Clears the url; takes precedence over `new_url`.
    pub remove_url: bool,
}

impl UpdateArgs {
    /// The first removal tag `bookmark` does not carry, if any.
    fn missing_removal<'a>(&'a self, bookmark: &Bookmark) -> Option<&'a str> {
        self.remove_tags
            .iter()
            .map(String::as_str)
            .find(|t| !bookmark.has_tag(t))
    }

    fn apply(&self, selected: &Bookmark) -> Bookmark {
        let id = non_empty(&self.new_id).unwrap_or(selected.id.as_str()).to_string();
        let url = if self.remove_url {
            String::new()
        } else {
            non_empty(&self.new_url).unwrap_or(selected.url.as_str()).to_string()
        };

        let removed: Vec<String> = self.remove_tags.iter().map(|t| t.to_lowercase()).collect();
        let tags = selected
            .tags
            .iter()
            .chain(self.new_tags.iter())
            .filter(|t| !removed.contains(&t.to_lowercase()))
            .cloned()
            .collect();

        Bookmark { id, url, tags }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn update_bookmark(session: &Session<'_>, args: &UpdateArgs) -> Result<(), Error> {
    let selected = match session.resolve("Select bookmark to update", &args.criteria) {
        Ok(b) => b,
        Err(e) => return session.report_not_found(e),
    };
    let printer = session.printer;

    if let Some(tag) = args.missing_removal(&selected) {
        tracing::warn!(id = %selected.id, tag, "tag to remove is not present");
        printer.error(&format!(
            "Bookmark {:?} does not contain tag {:?}",
            selected.id, tag
        ));
        return Ok(());
    }

    let updated = args.apply(&selected);
    match session.store.update(&selected.id, updated.clone()) {
        Ok(()) => {}
        Err(e) if e.is_already_exists() => {
            printer.error(&format!(
                "Bookmark with id {:?} already exists",
                updated.id
            ));
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    printer.msg(&format!(
        "Bookmark updated from:\n{}\nto:\n{}",
        printer.full(&selected),
        printer.full(&updated)
    ));
    Ok(())
}
