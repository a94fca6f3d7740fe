use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single cache entry (64 MB)
/// Inventory listings for large projects are big, but never this big
pub const MAX_CACHE_ENTRY_SIZE: u64 = 64 * 1024 * 1024;

/// Maximum size of the YAML config file (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Rejects a write destination that is a symbolic link
///
/// A missing destination is fine; it will be created by the write.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// Cache and summary files live in predictable locations, so a planted link
/// could otherwise redirect the write elsewhere.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn reject_symlink_destination(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a regular file after checking it is not a symlink and not oversized
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Used in error messages (e.g., "cache entry")
/// * `max_size` - Maximum accepted size in bytes
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link or not a regular file
/// - The file is larger than `max_size`
/// - The file is not valid UTF-8
pub fn read_bounded_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
