//! Reading optional inline/file/stdin input sources.

use crate::error::{Error, ErrorKind, Result};

/// Resolve an optional input that may come inline or from a file.
///
/// A non-blank `inline` value wins. Otherwise, `path` is read when given;
/// the conventional `-` path reads standard input. Returns `None` when
/// neither source is present.
pub fn read_source(inline: &str, path: Option<&str>) -> Result<Option<String>> {
    if !inline.trim().is_empty() {
        return Ok(Some(inline.to_string()));
    }

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = if path == "-" {
        std::io::read_to_string(std::io::stdin()).map_err(|e| {
            Error::with_source(
                ErrorKind::Io {
                    path: "stdin".into(),
                    message: e.to_string(),
                },
                e,
            )
        })?
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            Error::with_source(
                ErrorKind::Io {
                    path: path.to_string(),
                    message: e.to_string(),
                },
                e,
            )
        })?
    };

    Ok(Some(contents))
}
