use marks_core::error::Error;
use marks_core::types::Bookmark;

use crate::ports::Printer;
use crate::store::BookmarkStore;

/// Create `bookmark`, reporting an id clash as a message rather than a failure.
pub fn add_bookmark(
    store: &dyn BookmarkStore,
    printer: &dyn Printer,
    bookmark: Bookmark,
) -> Result<(), Error> {
    let exists = format!("Bookmark with id {:?} already exists", bookmark.id);
    if store.contains(&bookmark.id)? {
        tracing::warn!(id = %bookmark.id, "bookmark already exists");
        printer.error(&exists);
        return Ok(());
    }

    let created = printer.full(&bookmark);
    match store.create(bookmark) {
        Ok(()) => {
            printer.msg(&format!("Bookmark created: {created}"));
            Ok(())
        }
        Err(e) if e.is_already_exists() => {
            printer.error(&exists);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
