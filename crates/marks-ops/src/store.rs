use std::path::{Path, PathBuf};

use marks_core::error::{Error, StoreError};
use marks_core::types::{Bookmark, FilterCriteria};
use marks_format::{FsStorage, Storage, DEFAULT_FILE_MODE};

/// The authoritative bookmark collection.
///
/// Every operation works on a freshly loaded copy; mutations write the whole
/// collection back. Id comparisons are case-insensitive throughout.
pub trait BookmarkStore {
    /// Absence is `Ok(None)`, not an error.
    fn get(&self, id: &str) -> Result<Option<Bookmark>, Error>;
    fn list(&self) -> Result<Vec<Bookmark>, Error>;
    fn contains(&self, id: &str) -> Result<bool, Error>;
    fn create(&self, bookmark: Bookmark) -> Result<(), Error>;
    fn update(&self, id: &str, bookmark: Bookmark) -> Result<(), Error>;
    fn delete(&self, id: &str) -> Result<(), Error>;
    fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Bookmark>, Error>;
}

/// A store backed by a single YAML file.
#[derive(Debug, Clone)]
pub struct FileStore<S = FsStorage> {
    storage: S,
    path: PathBuf,
    mode: u32,
}

impl FileStore<FsStorage> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(FsStorage, path)
    }
}

impl<S: Storage> FileStore<S> {
    pub fn with_storage(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
            mode: DEFAULT_FILE_MODE,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn load(&self) -> Result<Vec<Bookmark>, Error> {
        let bookmarks = match self.storage.read_all(&self.path)? {
            Some(bytes) => marks_format::decode(&bytes)?,
            None => Vec::new(),
        };
        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "loaded bookmarks");
        Ok(bookmarks)
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), Error> {
        let bytes = marks_format::encode(bookmarks)?;
        self.storage.write_all(&self.path, &bytes, self.mode)?;
        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "saved bookmarks");
        Ok(())
    }

    /// Load, locate `id`, apply `change` at its position, save.
    fn modify(
        &self,
        id: &str,
        change: impl FnOnce(&mut Vec<Bookmark>, usize) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let mut bookmarks = self.load()?;
        let Some(pos) = bookmarks.iter().position(|b| b.id_matches(id)) else {
            return Err(StoreError::DoesNotExist { id: id.to_string() }.into());
        };
        change(&mut bookmarks, pos)?;
        self.save(&bookmarks)
    }
}

impl<S: Storage> BookmarkStore for FileStore<S> {
    fn get(&self, id: &str) -> Result<Option<Bookmark>, Error> {
        Ok(self.load()?.into_iter().find(|b| b.id_matches(id)))
    }

    fn list(&self) -> Result<Vec<Bookmark>, Error> {
        self.load()
    }

    fn contains(&self, id: &str) -> Result<bool, Error> {
        Ok(self.load()?.iter().any(|b| b.id_matches(id)))
    }

    fn create(&self, bookmark: Bookmark) -> Result<(), Error> {
        let mut bookmarks = self.load()?;
        if bookmarks.iter().any(|b| b.id_matches(&bookmark.id)) {
            return Err(StoreError::AlreadyExists { id: bookmark.id }.into());
        }
        bookmarks.push(bookmark);
        self.save(&bookmarks)
    }

    fn update(&self, id: &str, bookmark: Bookmark) -> Result<(), Error> {
        self.modify(id, |bookmarks, pos| {
            let clash = bookmarks
                .iter()
                .enumerate()
                .any(|(i, b)| i != pos && b.id_matches(&bookmark.id));
            if clash {
                return Err(StoreError::AlreadyExists { id: bookmark.id }.into());
            }
            bookmarks[pos] = bookmark;
            Ok(())
        })
    }

    fn delete(&self, id: &str) -> Result<(), Error> {
        self.modify(id, |bookmarks, pos| {
            bookmarks.remove(pos);
            Ok(())
        })
    }

    fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Bookmark>, Error> {
        Ok(marks_core::filter(&self.load()?, criteria))
    }
}
