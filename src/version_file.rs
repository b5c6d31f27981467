use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Write a local version suffix to `path`.
///
/// A non-empty suffix is written as a single line with a trailing newline.
/// An empty suffix produces an empty file.
pub fn write_local_version<P: AsRef<Path>>(path: P, suffix: &str) -> Result<()> {
    let contents = if suffix.is_empty() {
        String::new()
    } else {
        format!("{}\n", suffix)
    };
    fs::write(path, contents)?;
    Ok(())
}

/// Read the local version suffix stored at `path`.
///
/// Returns the trimmed first line, or an empty string when the file does not
/// exist or is empty.
///
/// # Example
/// ```no_run
/// let local = gitversion::version_file::read_local_version("LOCAL-VERSION")?;
/// let version = format!("{}{}", "1.0.1", local);
/// # Ok::<(), gitversion::GitVersionError>(())
/// ```
pub fn read_local_version<P: AsRef<Path>>(path: P) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.lines().next().unwrap_or("").trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
