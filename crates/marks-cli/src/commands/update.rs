use anyhow::Context;

use marks_ops::UpdateArgs;

use crate::app::App;

pub(crate) fn cmd_update(app: &App, args: UpdateArgs) -> anyhow::Result<()> {
    marks_ops::update_bookmark(&app.session(), &args)
        .with_context(|| format!("update bookmark in {}", app.store.path().display()))
}
