use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use marks_core::types::FilterCriteria;

#[derive(Parser)]
#[command(
    name = "marks",
    version,
    about = "Store, find, copy, and open bookmarks from the terminal.",
    long_about = "Store, find, copy, and open bookmarks from the terminal.\n\nNotes:\n  - Ids are unique ignoring case; id and url filters match substrings.\n  - Tags given after the id are extra tag filters; every tag must match.\n  - When a filter matches several bookmarks you are asked to pick one."
)]
pub(crate) struct Cli {
    /// Configuration file (defaults to `~/.marks/config.yaml`).
    #[arg(long, global = true, env = "MARKS_CONFIG", value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Bookmarks file, overriding `content_path` and `marks_file` from the config.
    #[arg(long, global = true, env = "MARKS_FILE", value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// When to color output.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub(crate) color: ColorMode,

    /// Raise the log level (repeatable); `MARKS_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Identifying criteria shared by every command that acts on one bookmark.
#[derive(Debug, Args)]
pub(crate) struct Selector {
    /// Id to match (case-insensitive substring).
    pub(crate) id: String,

    /// Extra tags to match, in addition to `--tag`.
    #[arg(value_name = "TAGS")]
    pub(crate) extra_tags: Vec<String>,

    /// Url to match (case-insensitive substring).
    #[arg(short, long, default_value = "")]
    pub(crate) url: String,

    /// Tag the bookmark must carry (repeatable or comma-separated).
    #[arg(short = 't', long = "tag", value_delimiter = ',')]
    pub(crate) tags: Vec<String>,
}

impl Selector {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        let mut tags = self.tags.clone();
        tags.extend(self.extra_tags.iter().cloned());
        FilterCriteria::new(self.id.as_str(), self.url.as_str(), tags)
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Add a bookmark.
    Add {
        /// Unique id of the new bookmark.
        id: String,
        /// Url of the new bookmark.
        #[arg(short, long, default_value = "")]
        url: String,
        /// Tag to attach (repeatable or comma-separated).
        #[arg(short = 't', long = "tag", value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Copy a bookmark's url to the clipboard.
    Copy {
        #[command(flatten)]
        selector: Selector,
    },
    /// Delete a bookmark.
    Delete {
        #[command(flatten)]
        selector: Selector,
        /// Delete without asking for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Open a bookmark in a browser.
    Open {
        #[command(flatten)]
        selector: Selector,
        /// Browser to open with (`chrome` or `firefox`); defaults to the configured one.
        #[arg(short, long)]
        browser: Option<String>,
    },
    /// Update a bookmark's id, url, or tags.
    Update {
        #[command(flatten)]
        selector: Selector,
        /// Replacement id.
        #[arg(long)]
        new_id: Option<String>,
        /// Replacement url.
        #[arg(long, conflicts_with = "remove_url")]
        new_url: Option<String>,
        /// Tag to add (repeatable or comma-separated).
        #[arg(long = "new-tag", value_delimiter = ',')]
        new_tags: Vec<String>,
        /// Tag to remove (repeatable or comma-separated); every one must be present.
        #[arg(long = "remove-tag", value_delimiter = ',')]
        remove_tags: Vec<String>,
        /// Clear the url.
        #[arg(long)]
        remove_url: bool,
    },
    /// List bookmarks, optionally filtered.
    List {
        /// Id to match (case-insensitive substring).
        id: Option<String>,
        /// Extra tags to match, in addition to `--tag`.
        #[arg(value_name = "TAGS")]
        extra_tags: Vec<String>,
        /// Url to match (case-insensitive substring).
        #[arg(short, long, default_value = "")]
        url: String,
        /// Tag the bookmark must carry (repeatable or comma-separated).
        #[arg(short = 't', long = "tag", value_delimiter = ',')]
        tags: Vec<String>,
        /// Emit the matches as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_parses_url_and_repeated_tags() {
        let cli = Cli::try_parse_from([
            "marks",
            "add",
            "Abc News",
            "-u",
            "https://abc.net.au/news/",
            "-t",
            "news",
            "--tag",
            "current affairs",
        ])
        .expect("parse should succeed");
        match cli.cmd {
            Command::Add { id, url, tags } => {
                assert_eq!(id, "Abc News");
                assert_eq!(url, "https://abc.net.au/news/");
                assert_eq!(tags, vec!["news", "current affairs"]);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn tag_flags_split_on_commas() {
        let cli = Cli::try_parse_from(["marks", "copy", "abc", "-t", "news,sport", "-t", "au"])
            .expect("parse should succeed");
        match cli.cmd {
            Command::Copy { selector } => {
                assert_eq!(selector.tags, vec!["news", "sport", "au"]);
            }
            _ => panic!("expected copy command"),
        }

        let cli = Cli::try_parse_from([
            "marks",
            "update",
            "abc",
            "--new-tag",
            "a,b",
            "--remove-tag",
            "c,d",
        ])
        .expect("parse should succeed");
        match cli.cmd {
            Command::Update {
                new_tags,
                remove_tags,
                ..
            } => {
                assert_eq!(new_tags, vec!["a", "b"]);
                assert_eq!(remove_tags, vec!["c", "d"]);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn trailing_positionals_are_extra_tags_after_flag_tags() {
        let cli = Cli::try_parse_from(["marks", "copy", "abc", "sport", "-t", "news"])
            .expect("parse should succeed");
        match cli.cmd {
            Command::Copy { selector } => {
                assert_eq!(
                    selector.criteria(),
                    FilterCriteria::new("abc", "", vec!["news".into(), "sport".into()])
                );
            }
            _ => panic!("expected copy command"),
        }
    }

    #[test]
    fn selecting_commands_require_an_id() {
        assert!(Cli::try_parse_from(["marks", "open"]).is_err());
        assert!(Cli::try_parse_from(["marks", "delete"]).is_err());
    }

    #[test]
    fn delete_accepts_yes() {
        let cli = Cli::try_parse_from(["marks", "delete", "goo", "-y"]).expect("parse should succeed");
        match cli.cmd {
            Command::Delete { yes, .. } => assert!(yes),
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn open_accepts_a_browser() {
        let cli = Cli::try_parse_from(["marks", "open", "goo", "--browser", "firefox"])
            .expect("parse should succeed");
        match cli.cmd {
            Command::Open { browser, selector } => {
                assert_eq!(browser.as_deref(), Some("firefox"));
                assert_eq!(selector.id, "goo");
            }
            _ => panic!("expected open command"),
        }
    }

    #[test]
    fn update_parses_every_change() {
        let cli = Cli::try_parse_from([
            "marks",
            "update",
            "abc",
            "--new-id",
            "ABC",
            "--new-tag",
            "a",
            "--new-tag",
            "b",
            "--remove-tag",
            "news",
        ])
        .expect("parse should succeed");
        match cli.cmd {
            Command::Update {
                new_id,
                new_url,
                new_tags,
                remove_tags,
                remove_url,
                ..
            } => {
                assert_eq!(new_id.as_deref(), Some("ABC"));
                assert_eq!(new_url, None);
                assert_eq!(new_tags, vec!["a", "b"]);
                assert_eq!(remove_tags, vec!["news"]);
                assert!(!remove_url);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn update_rejects_new_url_with_remove_url() {
        let res = Cli::try_parse_from([
            "marks",
            "update",
            "abc",
            "--new-url",
            "https://x",
            "--remove-url",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn list_parses_defaults() {
        let cli = Cli::try_parse_from(["marks", "list"]).expect("parse should succeed");
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.verbose, 0);
        match cli.cmd {
            Command::List {
                id,
                extra_tags,
                url,
                tags,
                json,
            } => {
                assert_eq!(id, None);
                assert!(extra_tags.is_empty());
                assert_eq!(url, "");
                assert!(tags.is_empty());
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "marks",
            "list",
            "--json",
            "--color",
            "never",
            "--file",
            "/tmp/b.yaml",
            "-vv",
        ])
        .expect("parse should succeed");
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/b.yaml")));
        assert_eq!(cli.verbose, 2);
    }
}
