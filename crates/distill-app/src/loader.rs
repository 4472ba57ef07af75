//! Reading input documents from disk.

use std::path::Path;

use tracing::debug;

use crate::error::AppError;

/// Load a `.txt` file as a string.
///
/// Bytes are decoded as UTF-8, falling back to Latin-1 when they are not valid
/// UTF-8. Any other extension is rejected.
pub fn load_text(path: &Path) -> Result<String, AppError> {
    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(AppError::UnsupportedFileType(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), "Input is not UTF-8, decoding as Latin-1");
            decode_latin1(e.as_bytes())
        }
    };
    Ok(text)
}

/// Every byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
