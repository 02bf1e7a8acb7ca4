use anyhow::Context;

use crate::app::App;
use crate::cli::Selector;
use crate::config::validate_browser;
use crate::opener::CommandOpener;

pub(crate) fn cmd_open(app: &App, selector: &Selector, browser: Option<&str>) -> anyhow::Result<()> {
    let browser = match browser {
        Some(b) => validate_browser(b)?,
        None => app.config.browser.clone(),
    };
    let opener = CommandOpener::new(&app.config);
    marks_ops::open_bookmark(&app.session(), &opener, &browser, &selector.criteria())
        .with_context(|| format!("open bookmark in {browser}"))
}
