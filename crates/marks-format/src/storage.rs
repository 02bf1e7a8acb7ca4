use marks_core::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Permissions given to a bookmarks file the first time it is written.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Whole-file persistence for the bookmark collection.
pub trait Storage {
    /// Returns `Ok(None)` when the file does not exist yet.
    fn read_all(&self, path: &Path) -> Result<Option<Vec<u8>>, Error>;

    fn write_all(&self, path: &Path, bytes: &[u8], mode: u32) -> Result<(), Error>;
}

/// Filesystem storage; writes go through a sibling temp file and `rename`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_all(&self, path: &Path) -> Result<Option<Vec<u8>>, Error> {
        match std::fs::read(path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "read bookmarks file");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "bookmarks file does not exist yet");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, path: &Path, bytes: &[u8], mode: u32) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        atomic_write(path, bytes, mode)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote bookmarks file");
        Ok(())
    }
}

pub fn atomic_write(path: &Path, bytes: &[u8], mode: u32) -> Result<(), Error> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("bookmarks.yaml");

    let mut i = 0u32;
    loop {
        let tmp_name = if i == 0 {
            format!(".{base}.tmp")
        } else {
            format!(".{base}.tmp.{i}")
        };
        let tmp_path = dir.join(tmp_name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(mut f) => {
                let written = f
                    .write_all(bytes)
                    .and_then(|()| f.sync_all())
                    .and_then(|()| set_mode(&tmp_path, mode))
                    .and_then(|()| std::fs::rename(&tmp_path, path));
                if let Err(e) = written {
                    let _ = std::fs::remove_file(&tmp_path);
                    return Err(e.into());
                }
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                i = i.saturating_add(1);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
