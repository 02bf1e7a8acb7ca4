use marks_core::error::Error;
use marks_core::types::FilterCriteria;

use crate::resolve::Session;

/// Resolve one bookmark, confirm unless `assume_yes`, then delete it.
pub fn delete_bookmark(
    session: &Session<'_>,
    criteria: &FilterCriteria,
    assume_yes: bool,
) -> Result<(), Error> {
    let bookmark = match session.resolve("Select bookmark to delete", criteria) {
        Ok(b) => b,
        Err(e) => return session.report_not_found(e),
    };
    let printer = session.printer;
    printer.msg(&format!("Selected: {}", printer.full(&bookmark)));

    if !assume_yes && !session.prompter.confirm("Are you sure you want to delete?")? {
        printer.msg("Exiting");
        return Ok(());
    }

    session.store.delete(&bookmark.id)?;
    tracing::info!(id = %bookmark.id, "deleted bookmark");
    printer.msg("Deleted");
    Ok(())
}
