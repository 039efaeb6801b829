//! Loading CSV text from files and standard input.

use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

fn read_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Reject UTF-16 byte order marks.
fn check_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Reads a CSV file as UTF-8 text, dropping a leading byte order mark.
pub fn read_csv_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
    check_encoding(path, &bytes)?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read CSV file");
    Ok(text
        .strip_prefix(UTF8_BOM)
        .map(str::to_string)
        .unwrap_or(text))
}

/// Reads all of standard input as text.
pub fn read_stdin_text() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(IngestError::StdinRead)?;
    Ok(text
        .strip_prefix(UTF8_BOM)
        .map(str::to_string)
        .unwrap_or(text))
}

/// Trims surrounding whitespace and rejects input with no content.
pub fn prepare_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    Ok(trimmed)
}
