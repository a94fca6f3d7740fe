use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path` with `content` in a single rename
///
/// The content is written to a temporary file in the destination directory
/// and then renamed over the target, so readers see either the previous file
/// or the complete new one. Concurrent writers to the same path resolve as
/// last-writer-wins.
pub(crate) fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(directory)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
