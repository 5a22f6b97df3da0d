//! AFI file reading
//!
//! Turns a file on disk into numbered [`RawLine`]s. AFI files produced by
//! older tooling are often ISO-8859-1, so undecodable UTF-8 falls back to a
//! byte-per-character Latin-1 decoding.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{AfiError, Result};
use crate::models::RawLine;

/// Read an AFI file into numbered lines
pub fn read_afi_file(path: &Path) -> Result<Vec<RawLine>> {
    if !path.exists() {
        return Err(AfiError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| AfiError::io(path, e))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, decoding as ISO-8859-1",
                path.display()
            );
            decode_latin1(e.as_bytes())
        }
    };

    let lines = split_lines(&content);
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split text on `\n` or `\r\n` into 1-based numbered lines.
///
/// A trailing line terminator does not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<RawLine> {
    content
        .lines()
        .enumerate()
        .map(|(i, text)| RawLine::new(i + 1, text))
        .collect()
}

/// ISO-8859-1 maps every byte to the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_lines_handles_crlf_and_trailing_newline() {
        let lines = split_lines("ETI1\r\nEMP2\nTRA3\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], RawLine::new(1, "ETI1"));
        assert_eq!(lines[1].text, "EMP2");
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_split_lines_keeps_interior_blank_lines() {
        let lines = split_lines("A\n\nB");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "");
    }

    #[test]
    fn test_read_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "AYNMUÑOZ\r\nDOM\r\n").unwrap();

        let lines = read_afi_file(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "AYNMUÑOZ");
    }

    #[test]
    fn test_read_latin1_file() {
        let mut file = NamedTempFile::new().unwrap();
        // "MUÑOZ" with Ñ as the single Latin-1 byte 0xD1
        file.write_all(b"AYNMU\xD1OZ\n").unwrap();

        let lines = read_afi_file(file.path()).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "AYNMUÑOZ");
        assert_eq!(lines[0].char_len(), 8);
    }

    #[test]
    fn test_missing_file() {
        let result = read_afi_file(Path::new("/no/such/file.afi"));
        assert!(matches!(result, Err(AfiError::FileNotFound { .. })));
    }
}
