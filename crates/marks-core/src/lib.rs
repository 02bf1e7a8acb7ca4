//! Core data structures, errors, and the filter engine for marks.
//!
//! This crate defines the bookmark model and the pure narrowing filter that every
//! other crate in the workspace builds on.

pub mod error;
pub mod filter;
pub mod types;

pub use error::{Error, FormatError, LaunchError, ResolveError, StoreError};
pub use filter::filter;
pub use types::{Bookmark, FilterCriteria};
