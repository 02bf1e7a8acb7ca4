use marks_core::error::Error;
use marks_core::types::FilterCriteria;

use crate::ports::Clipper;
use crate::resolve::Session;

pub fn copy_bookmark(
    session: &Session<'_>,
    clipper: &dyn Clipper,
    criteria: &FilterCriteria,
) -> Result<(), Error> {
    let bookmark = match session.resolve("Select bookmark to copy", criteria) {
        Ok(b) => b,
        Err(e) => return session.report_not_found(e),
    };

    clipper.copy(&bookmark.url)?;
    session.printer.msg(&format!(
        "Url copied to clipboard: {}",
        session.printer.url(&bookmark.url)
    ));
    Ok(())
}
