use marks_core::error::Error;
use marks_core::types::FilterCriteria;

use crate::ports::Opener;
use crate::resolve::Session;

pub fn open_bookmark(
    session: &Session<'_>,
    opener: &dyn Opener,
    browser: &str,
    criteria: &FilterCriteria,
) -> Result<(), Error> {
    let bookmark = match session.resolve("Select bookmark to open", criteria) {
        Ok(b) => b,
        Err(e) => return session.report_not_found(e),
    };

    opener.open(&bookmark.url, browser)?;
    let printer = session.printer;
    printer.msg(&format!(
        "Url opened in {}: {}",
        printer.browser(browser),
        printer.url(&bookmark.url)
    ));
    Ok(())
}
