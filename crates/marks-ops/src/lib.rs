//! Bookmark store, resolver, and the action runners behind every `marks` command.
//!
//! Collaborators that touch the terminal, the clipboard, or other processes are
//! reached through the traits in [`ports`], so every runner can be exercised with
//! in-memory doubles.

pub mod add;
pub mod copy;
pub mod delete;
pub mod list;
pub mod open;
pub mod ports;
pub mod resolve;
pub mod store;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use add::add_bookmark;
pub use copy::copy_bookmark;
pub use delete::delete_bookmark;
pub use list::list_bookmarks;
pub use open::open_bookmark;
pub use ports::{Clipper, Opener, Printer, Prompter};
pub use resolve::{resolve, Session};
pub use store::{BookmarkStore, FileStore};
pub use update::{update_bookmark, UpdateArgs};
