//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod density;
pub mod highlight;
pub mod info;
pub mod schema;
pub mod stats;
pub mod top;

/// Path that selects stdin instead of a file.
const STDIN_PATH: &str = "-";

/// Read the input text and validate its size against the configured limit.
///
/// A path of `-` reads from stdin. Files are checked via metadata before
/// being read; stdin is read up to one byte past the limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let mut stdin = std::io::stdin().lock();
    if let Some(max) = max_bytes {
        stdin
            .by_ref()
            .take(max as u64 + 1)
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        if content.len() > max {
            anyhow::bail!("input too large: stdin exceeds {max} bytes");
        }
    } else {
        stdin
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
    }
    Ok(content)
}

/// Human-readable name for an input path.
pub fn display_name(path: &Utf8Path) -> &str {
    if path.as_str() == STDIN_PATH {
        "<stdin>"
    } else {
        path.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("in.txt");
        fs::write(&path, "hello world").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "hello world");
        assert_eq!(read_input_file(&path, None).unwrap(), "hello world");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "0123456789").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/nonexistent/input.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn stdin_display_name() {
        assert_eq!(display_name(Utf8Path::new("-")), "<stdin>");
        assert_eq!(display_name(Utf8Path::new("notes.txt")), "notes.txt");
    }
}
