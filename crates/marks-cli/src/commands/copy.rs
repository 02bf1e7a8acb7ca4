use anyhow::Context;

use crate::app::App;
use crate::cli::Selector;
use crate::clipper::SystemClipper;

pub(crate) fn cmd_copy(app: &App, selector: &Selector) -> anyhow::Result<()> {
    marks_ops::copy_bookmark(&app.session(), &SystemClipper, &selector.criteria())
        .context("copy bookmark")
}
