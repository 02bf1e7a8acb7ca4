use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("selection cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl Error {
    /// True only for the "nothing matched the filter" condition, which callers
    /// report as a friendly message rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Resolve(ResolveError::NoMatch { .. }))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::Store(StoreError::AlreadyExists { .. }))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid bookmarks YAML: {0}")]
    Decode(String),

    #[error("cannot encode bookmarks as YAML: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bookmark {id:?} already exists")]
    AlreadyExists { id: String },

    #[error("bookmark {id:?} does not exist")]
    DoesNotExist { id: String },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No bookmarks found matching: {criteria}")]
    NoMatch { criteria: String },

    #[error("no bookmark at index {index} ({count} candidates)")]
    IndexOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("browser {0:?} is not supported")]
    UnsupportedBrowser(String),

    #[error("invalid open template {template:?}: {reason}")]
    Template {
        template: String,
        reason: &'static str,
    },

    #[error("cannot split open arguments {args:?}: {reason}")]
    Arguments { args: String, reason: String },

    #[error("{command} exited with {status}: {output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_only_the_no_match_kind() {
        let e: Error = ResolveError::NoMatch {
            criteria: "Id: xyz".to_string(),
        }
        .into();
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "No bookmarks found matching: Id: xyz");

        let e: Error = ResolveError::IndexOutOfRange { index: 3, count: 2 }.into();
        assert!(!e.is_not_found());

        let e: Error = StoreError::DoesNotExist { id: "x".into() }.into();
        assert!(!e.is_not_found());
        assert!(!Error::Cancelled.is_not_found());
    }

    #[test]
    fn already_exists_is_detectable() {
        let e: Error = StoreError::AlreadyExists { id: "Google".into() }.into();
        assert!(e.is_already_exists());
        assert_eq!(e.to_string(), "bookmark \"Google\" already exists");
    }
}
