use marks_core::error::{Error, ResolveError};
use marks_core::types::{Bookmark, FilterCriteria};

use crate::ports::{Printer, Prompter};
use crate::store::BookmarkStore;

/// The collaborators every selecting action needs.
#[derive(Clone, Copy)]
pub struct Session<'a> {
    pub store: &'a dyn BookmarkStore,
    pub printer: &'a dyn Printer,
    pub prompter: &'a dyn Prompter,
}

impl<'a> Session<'a> {
    pub fn new(
        store: &'a dyn BookmarkStore,
        printer: &'a dyn Printer,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            store,
            printer,
            prompter,
        }
    }

    pub fn resolve(&self, label: &str, criteria: &FilterCriteria) -> Result<Bookmark, Error> {
        resolve(self.store, self.printer, self.prompter, label, criteria)
    }

    /// Print the NotFound message and swallow it; every other error is returned.
    pub(crate) fn report_not_found(&self, err: Error) -> Result<(), Error> {
        if err.is_not_found() {
            tracing::warn!("{err}");
            self.printer.error(&err.to_string());
            return Ok(());
        }
        Err(err)
    }
}

/// Narrow `criteria` down to exactly one bookmark.
///
/// A single match is returned without prompting. Several matches are shown as
/// a table and the user picks one; cancelling the pick is `Error::Cancelled`.
pub fn resolve(
    store: &dyn BookmarkStore,
    printer: &dyn Printer,
    prompter: &dyn Prompter,
    label: &str,
    criteria: &FilterCriteria,
) -> Result<Bookmark, Error> {
    let mut matches = store.filter(criteria)?;
    tracing::debug!(count = matches.len(), "resolving bookmark");

    match matches.len() {
        0 => Err(ResolveError::NoMatch {
            criteria: printer.full_with_fields(&criteria.as_bookmark()),
        }
        .into()),
        1 => Ok(matches.remove(0)),
        count => {
            let rows = printer.tabulate(&matches);
            let index = prompter.select(label, &rows)?;
            if index >= count {
                return Err(ResolveError::IndexOutOfRange { index, count }.into());
            }
            Ok(matches.swap_remove(index))
        }
    }
}
