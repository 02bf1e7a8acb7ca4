use marks_core::error::Error;
use marks_core::types::FilterCriteria;

use crate::ports::Printer;
use crate::store::BookmarkStore;

/// Print every bookmark matching `criteria` as an aligned table.
///
/// Returns how many rows were printed.
pub fn list_bookmarks(
    store: &dyn BookmarkStore,
    printer: &dyn Printer,
    criteria: &FilterCriteria,
) -> Result<usize, Error> {
    let matches = store.filter(criteria)?;
    if matches.is_empty() {
        printer.msg("No bookmarks found");
        return Ok(0);
    }
    for row in printer.tabulate(&matches) {
        printer.msg(&row);
    }
    Ok(matches.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{memory_store, sample_bookmarks, RecordingPrinter};

    #[test]
    fn prints_one_row_per_match_in_store_order() {
        let store = memory_store(&sample_bookmarks());
        let printer = RecordingPrinter::default();

        let n = list_bookmarks(&store, &printer, &FilterCriteria::new("", "", vec!["news".into()]))
            .unwrap();

        assert_eq!(n, 2);
        let rows = printer.messages();
        assert!(rows[0].starts_with("Abc News"));
        assert!(rows[1].starts_with("Guardian"));
    }

    #[test]
    fn empty_result_says_so() {
        let store = memory_store(&sample_bookmarks());
        let printer = RecordingPrinter::default();

        let n = list_bookmarks(&store, &printer, &FilterCriteria::new("xyz", "", vec![])).unwrap();

        assert_eq!(n, 0);
        assert_eq!(printer.messages(), vec!["No bookmarks found"]);
    }

    #[test]
    fn empty_criteria_lists_everything() {
        let store = memory_store(&sample_bookmarks());
        let printer = RecordingPrinter::default();

        assert_eq!(
            list_bookmarks(&store, &printer, &FilterCriteria::default()).unwrap(),
            3
        );
    }
}
