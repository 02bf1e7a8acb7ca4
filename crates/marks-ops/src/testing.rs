//! In-memory doubles for the store's storage and every port.

use std::cell::{Cell, RefCell};
use std::path::Path;

use marks_core::error::{Error, LaunchError};
use marks_core::types::Bookmark;
use marks_format::Storage;

use crate::ports::{Clipper, Opener, Printer, Prompter};
use crate::store::FileStore;

pub(crate) fn sample_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark::new(
            "Abc News",
            "https://abc.net.au/news/",
            vec!["news".to_string(), "current affairs".to_string()],
        ),
        Bookmark::new("Google", "https://google.com", vec!["search".to_string()]),
        Bookmark::new(
            "Guardian",
            "https://theguardian.com",
            vec!["news".to_string(), "uk".to_string()],
        ),
    ]
}

#[derive(Default)]
pub(crate) struct MemoryStorage {
    bytes: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }

    pub(crate) fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }

    pub(crate) fn put(&self, bytes: &[u8]) {
        *self.bytes.borrow_mut() = Some(bytes.to_vec());
    }

    pub(crate) fn clear(&self) {
        *self.bytes.borrow_mut() = None;
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self, _path: &Path) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.snapshot())
    }

    fn write_all(&self, _path: &Path, bytes: &[u8], _mode: u32) -> Result<(), Error> {
        self.put(bytes);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// A store seeded with `bookmarks`; seeding does not count as a write.
pub(crate) fn memory_store(bookmarks: &[Bookmark]) -> FileStore<MemoryStorage> {
    let storage = MemoryStorage::default();
    storage.put(&marks_format::encode(bookmarks).expect("encode seed"));
    FileStore::with_storage(storage, "memory/bookmarks.yaml")
}

/// Renders without color so assertions can compare plain text.
#[derive(Default)]
pub(crate) struct RecordingPrinter {
    pub(crate) messages: RefCell<Vec<String>>,
    pub(crate) errors: RefCell<Vec<String>>,
}

impl RecordingPrinter {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Printer for RecordingPrinter {
    fn msg(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.borrow_mut().push(text.to_string());
    }

    fn tabulate(&self, bookmarks: &[Bookmark]) -> Vec<String> {
        bookmarks.iter().map(|b| self.full(b)).collect()
    }

    fn full(&self, b: &Bookmark) -> String {
        let mut out = vec![b.id.clone()];
        if !b.url.is_empty() {
            out.push(b.url.clone());
        }
        if !b.tags.is_empty() {
            out.push(format!("[{}]", b.tags.join(", ")));
        }
        out.join(" ")
    }

    fn full_with_fields(&self, b: &Bookmark) -> String {
        let mut out = vec![format!("Id: {}", b.id)];
        if !b.url.is_empty() {
            out.push(format!("Url: {}", b.url));
        }
        if !b.tags.is_empty() {
            out.push(format!("Tags: [{}]", b.tags.join(", ")));
        }
        out.join(", ")
    }

    fn url(&self, url: &str) -> String {
        url.to_string()
    }

    fn browser(&self, browser: &str) -> String {
        browser.to_string()
    }
}

/// Answers every selection with `selection` (`None` cancels) and every
/// confirmation with `confirm`, recording what it was asked.
pub(crate) struct ScriptedPrompter {
    pub(crate) selection: Option<usize>,
    pub(crate) confirm: bool,
    pub(crate) selects: RefCell<Vec<(String, Vec<String>)>>,
    pub(crate) confirms: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(selection: Option<usize>, confirm: bool) -> Self {
        Self {
            selection,
            confirm,
            selects: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn select_count(&self) -> usize {
        self.selects.borrow().len()
    }
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        Self::new(Some(0), true)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, label: &str, items: &[String]) -> Result<usize, Error> {
        self.selects
            .borrow_mut()
            .push((label.to_string(), items.to_vec()));
        self.selection.ok_or(Error::Cancelled)
    }

    fn confirm(&self, label: &str) -> Result<bool, Error> {
        self.confirms.borrow_mut().push(label.to_string());
        Ok(self.confirm)
    }
}

#[derive(Default)]
pub(crate) struct RecordingClipper {
    pub(crate) fail: bool,
    pub(crate) copied: RefCell<Vec<String>>,
}

impl Clipper for RecordingClipper {
    fn copy(&self, text: &str) -> Result<(), Error> {
        if self.fail {
            return Err(Error::Clipboard("no display".to_string()));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingOpener {
    pub(crate) fail: bool,
    pub(crate) opened: RefCell<Vec<(String, String)>>,
}

impl Opener for RecordingOpener {
    fn open(&self, url: &str, browser: &str) -> Result<(), Error> {
        if self.fail {
            return Err(LaunchError::UnsupportedBrowser(browser.to_string()).into());
        }
        self.opened
            .borrow_mut()
            .push((url.to_string(), browser.to_string()));
        Ok(())
    }
}
