use marks_core::error::Error;
use marks_core::types::Bookmark;

/// Terminal output plus the renderings used to show bookmarks.
///
/// Rendering is display-only; no decision is ever made on a rendered string.
pub trait Printer {
    fn msg(&self, text: &str);
    fn error(&self, text: &str);

    /// One aligned row per bookmark: id, url, tags.
    fn tabulate(&self, bookmarks: &[Bookmark]) -> Vec<String>;

    /// `id url [tags]`, omitting an empty url or tag list.
    fn full(&self, bookmark: &Bookmark) -> String;

    /// `Id: id, Url: url, Tags: [tags]`, omitting an empty url or tag list.
    fn full_with_fields(&self, bookmark: &Bookmark) -> String;

    fn url(&self, url: &str) -> String;
    fn browser(&self, browser: &str) -> String;
}

pub trait Prompter {
    /// Blocks until the user picks one of `items`; returns its zero-based index.
    /// An aborted selection is `Error::Cancelled`.
    fn select(&self, label: &str, items: &[String]) -> Result<usize, Error>;

    fn confirm(&self, label: &str) -> Result<bool, Error>;
}

pub trait Clipper {
    fn copy(&self, text: &str) -> Result<(), Error>;
}

pub trait Opener {
    fn open(&self, url: &str, browser: &str) -> Result<(), Error>;
}
