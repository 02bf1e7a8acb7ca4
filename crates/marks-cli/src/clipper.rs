use arboard::Clipboard;

use marks_core::error::Error;
use marks_ops::Clipper;

/// The system clipboard, opened per copy.
pub(crate) struct SystemClipper;

impl Clipper for SystemClipper {
    fn copy(&self, text: &str) -> Result<(), Error> {
        let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        tracing::debug!(bytes = text.len(), "copied to clipboard");
        Ok(())
    }
}
