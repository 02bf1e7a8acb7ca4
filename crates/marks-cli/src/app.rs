use marks_ops::{FileStore, Session};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::printer::{color_enabled, TerminalPrinter};
use crate::prompter::TerminalPrompter;

/// Everything a command needs, built once per invocation.
pub(crate) struct App {
    pub(crate) config: Config,
    pub(crate) store: FileStore,
    pub(crate) printer: TerminalPrinter,
    pub(crate) prompter: TerminalPrompter,
}

impl App {
    pub(crate) fn session(&self) -> Session<'_> {
        Session::new(&self.store, &self.printer, &self.prompter)
    }
}

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref(), cli.file.as_deref())?;

    let colors = color_enabled(cli.color);
    colored::control::set_override(colors);

    let app = App {
        store: FileStore::open(&config.marks_path).with_mode(config.file_mode),
        printer: TerminalPrinter::new(&config.palette, colors),
        prompter: TerminalPrompter::new(),
        config,
    };

    match cli.cmd {
        Command::Add { id, url, tags } => crate::commands::add::cmd_add(&app, id, url, tags),
        Command::Copy { selector } => crate::commands::copy::cmd_copy(&app, &selector),
        Command::Delete { selector, yes } => {
            crate::commands::delete::cmd_delete(&app, &selector, yes)
        }
        Command::Open { selector, browser } => {
            crate::commands::open::cmd_open(&app, &selector, browser.as_deref())
        }
        Command::Update {
            selector,
            new_id,
            new_url,
            new_tags,
            remove_tags,
            remove_url,
        } => crate::commands::update::cmd_update(
            &app,
            marks_ops::UpdateArgs {
                criteria: selector.criteria(),
                new_id,
                new_url,
                new_tags,
                remove_tags,
                remove_url,
            },
        ),
        Command::List {
            id,
            extra_tags,
            url,
            mut tags,
            json,
        } => {
            tags.extend(extra_tags);
            let criteria = marks_core::FilterCriteria::new(id.unwrap_or_default(), url, tags);
            crate::commands::list::cmd_list(&app, &criteria, json)
        }
    }
}
