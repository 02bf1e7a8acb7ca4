use anyhow::Context;

use crate::app::App;
use crate::cli::Selector;

pub(crate) fn cmd_delete(app: &App, selector: &Selector, yes: bool) -> anyhow::Result<()> {
    marks_ops::delete_bookmark(&app.session(), &selector.criteria(), yes)
        .with_context(|| format!("delete bookmark from {}", app.store.path().display()))
}
