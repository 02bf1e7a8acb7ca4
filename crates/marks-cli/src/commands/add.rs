use anyhow::Context;

use marks_core::types::Bookmark;

use crate::app::App;

pub(crate) fn cmd_add(app: &App, id: String, url: String, tags: Vec<String>) -> anyhow::Result<()> {
    marks_ops::add_bookmark(&app.store, &app.printer, Bookmark::new(id, url, tags))
        .with_context(|| format!("add bookmark to {}", app.store.path().display()))
}
