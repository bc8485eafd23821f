//! Charset and filter file decoding
//!
//! Charset files ship in UTF-16 (the upstream toolchain emits them with a
//! BOM); filter files use the same loader. Byte-order is sniffed from the
//! BOM, with UTF-8 as the no-BOM fallback. Line breaks are layout in the
//! source files, not characters to rasterize, so they are stripped here.

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::path::Path;

/// Read a character-list file and return its characters.
///
/// Duplicates and order are preserved; callers deduplicate and sort.
pub fn load_chars(path: &Path) -> Result<Vec<char>> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read charset file: {}", path.display()))?;
    let text = decode(&data)
        .with_context(|| format!("failed to decode charset file: {}", path.display()))?;

    let chars: Vec<char> = text.chars().filter(|&c| c != '\n' && c != '\r').collect();
    debug!("Loaded {} characters from {}", chars.len(), path.display());
    Ok(chars)
}

/// Decode raw bytes as UTF-16 (BOM-sniffed) or UTF-8.
fn decode(data: &[u8]) -> Result<String> {
    match data {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8(data.to_vec()).map_err(|e| anyhow!("not valid UTF-8: {}", e)),
    }
}

fn decode_utf16(data: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(anyhow!("odd byte count in UTF-16 payload"));
    }
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| anyhow!("invalid UTF-16: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf16_le_bom() {
        // BOM + "AB"
        let data = [0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00];
        assert_eq!(decode(&data).unwrap(), "AB");
    }

    #[test]
    fn test_decode_utf16_be_bom() {
        let data = [0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42];
        assert_eq!(decode(&data).unwrap(), "AB");
    }

    #[test]
    fn test_decode_utf8_fallback() {
        assert_eq!(decode("漢字".as_bytes()).unwrap(), "漢字");
    }

    #[test]
    fn test_decode_odd_utf16_fails() {
        let data = [0xFF, 0xFE, 0x41];
        assert!(decode(&data).is_err());
    }

    #[test]
    fn test_load_strips_newlines() {
        let dir = std::env::temp_dir().join("mfntgen_charset_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chars.txt");
        std::fs::write(&path, "A\nB\r\nC").unwrap();
        let chars = load_chars(&path).unwrap();
        assert_eq!(chars, vec!['A', 'B', 'C']);
    }
}
