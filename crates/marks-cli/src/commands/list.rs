use anyhow::Context;

use marks_core::types::FilterCriteria;
use marks_ops::BookmarkStore;

use crate::app::App;

pub(crate) fn cmd_list(app: &App, criteria: &FilterCriteria, json: bool) -> anyhow::Result<()> {
    if json {
        let matches = app
            .store
            .filter(criteria)
            .with_context(|| format!("read {}", app.store.path().display()))?;
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    marks_ops::list_bookmarks(&app.store, &app.printer, criteria)
        .with_context(|| format!("read {}", app.store.path().display()))?;
    Ok(())
}
