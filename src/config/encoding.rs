//! Byte-exact text decoding for host files
//!
//! Hotkey files written by older hosts are often Windows-1252 rather than
//! UTF-8. Files that fail UTF-8 validation are decoded one byte per char
//! (Latin-1), which maps every byte value to a distinct char and back, so
//! lines the user never touched are written out unchanged.

/// Encoding a file was read with, reused when writing it back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes`, preferring UTF-8
    pub fn decode(bytes: &[u8]) -> (String, Self) {
        match std::str::from_utf8(bytes) {
            Ok(text) => (text.to_string(), Self::Utf8),
            Err(_) => (bytes.iter().copied().map(char::from).collect(), Self::Latin1),
        }
    }

    /// Encode `text` back to bytes
    ///
    /// Returns `None` when a Latin-1 file gained a char above U+00FF.
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            Self::Utf8 => Some(text.as_bytes().to_vec()),
            Self::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_stays_utf8() {
        let (text, encoding) = TextEncoding::decode("[Café]\r\n".as_bytes());
        assert_eq!(text, "[Café]\r\n");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_invalid_utf8_keeps_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let (text, encoding) = TextEncoding::decode(&bytes);

        assert_eq!(encoding, TextEncoding::Latin1);
        assert_eq!(encoding.encode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_latin1_rejects_wide_chars() {
        assert_eq!(TextEncoding::Latin1.encode("Caf\u{e9}").unwrap(), b"Caf\xE9");
        assert!(TextEncoding::Latin1.encode("\u{20ac}").is_none());
    }
}
