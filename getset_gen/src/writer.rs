use crate::error::GenerateError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Create or truncate `path` and write `contents`; on Unix new files get `perm`.
pub fn write_generated_file(path: &Path, contents: &str, perm: u32) -> Result<(), GenerateError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(perm);
    }
    #[cfg(not(unix))]
    let _ = perm;

    let to_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;

    tracing::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
