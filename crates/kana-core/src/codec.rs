//! Single-character codec for the one supported byte scheme (UTF-8), plus
//! codepoint classification for Japanese text.
//!
//! Everything here assumes UTF-8 unconditionally. There is no encoding
//! switch: callers holding text in another encoding must convert first, and
//! `Encoding::from_label` rejects any other label up front.

use std::fmt;

use crate::ranges::{in_ranges, KANA_RANGES, KANJI_RANGES, WIDE_LATIN_RANGES};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("offset {offset} out of bounds (len {len})")]
    OutOfBounds { offset: usize, len: usize },

    #[error("invalid lead byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadByte { offset: usize, byte: u8 },

    #[error("truncated sequence at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("invalid continuation byte 0x{byte:02X} at offset {offset}")]
    InvalidContinuation { offset: usize, byte: u8 },

    #[error("unsupported encoding: {0} (only UTF-8 is supported)")]
    Unsupported(String),
}

/// The byte scheme text is assumed to be in. There is exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
}

impl Encoding {
    /// Resolve an encoding label. Anything but a UTF-8 spelling is an error.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            _ => Err(EncodingError::Unsupported(label.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
        }
    }
}

/// Character class of a codepoint. Derived from the value, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Kanji,
    Kana,
    WideLatin,
    Other,
}

/// A scalar value decoded from (or destined for) the byte scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(pub u32);

impl Codepoint {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn class(self) -> CharClass {
        classify(self)
    }

    pub fn is_kanji(self) -> bool {
        is_kanji(self)
    }

    pub fn is_kana(self) -> bool {
        is_kana(self)
    }

    pub fn is_wide_latin(self) -> bool {
        is_wide_latin(self)
    }

    /// `None` for surrogates and values past U+10FFFF.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub fn encode(self) -> EncodedChar {
        encode(self)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

pub fn is_kanji(cp: Codepoint) -> bool {
    in_ranges(cp.0, KANJI_RANGES)
}

/// Hiragana, katakana and the katakana phonetic extensions.
pub fn is_kana(cp: Codepoint) -> bool {
    in_ranges(cp.0, KANA_RANGES)
}

/// Full-width digits and Latin letters (U+FF10..U+FF5A).
pub fn is_wide_latin(cp: Codepoint) -> bool {
    in_ranges(cp.0, WIDE_LATIN_RANGES)
}

pub fn classify(cp: Codepoint) -> CharClass {
    if is_kanji(cp) {
        CharClass::Kanji
    } else if is_kana(cp) {
        CharClass::Kana
    } else if is_wide_latin(cp) {
        CharClass::WideLatin
    } else {
        CharClass::Other
    }
}

/// Decode the character starting at `offset`.
///
/// Returns the codepoint and the number of bytes it occupies. The lead byte
/// decides the length (`0xxxxxxx`, `110xxxxx`, `1110xxxx`, `11110xxx`); every
/// trailing byte must be a `10xxxxxx` continuation.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(Codepoint, usize), EncodingError> {
    let lead = *bytes.get(offset).ok_or(EncodingError::OutOfBounds {
        offset,
        len: bytes.len(),
    })?;

    let (len, payload) = match lead {
        0x00..=0x7F => return Ok((Codepoint(lead as u32), 1)),
        0xC0..=0xDF => (2, lead & 0x1F),
        0xE0..=0xEF => (3, lead & 0x0F),
        0xF0..=0xF7 => (4, lead & 0x07),
        _ => return Err(EncodingError::InvalidLeadByte { offset, byte: lead }),
    };

    let available = bytes.len() - offset;
    if available < len {
        return Err(EncodingError::Truncated {
            offset,
            needed: len,
            available,
        });
    }

    let mut value = payload as u32;
    for (i, &b) in bytes[offset + 1..offset + len].iter().enumerate() {
        if b & 0xC0 != 0x80 {
            return Err(EncodingError::InvalidContinuation {
                offset: offset + 1 + i,
                byte: b,
            });
        }
        value = (value << 6) | (b & 0x3F) as u32;
    }
    Ok((Codepoint(value), len))
}

/// An encoded character held on the stack (at most 4 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedChar {
    buf: [u8; 4],
    len: u8,
}

impl EncodedChar {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn byte_len(&self) -> usize {
        self.len as usize
    }
}

impl AsRef<[u8]> for EncodedChar {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encode a codepoint using the shortest form that holds its value.
///
/// Values above 0x1FFFFF do not fit the 4-byte form; only the low 21 bits
/// are kept for them.
pub fn encode(cp: Codepoint) -> EncodedChar {
    let v = cp.0;
    let mut buf = [0u8; 4];
    let len = if v <= 0x7F {
        buf[0] = v as u8;
        1
    } else if v <= 0x7FF {
        buf[0] = 0xC0 | (v >> 6) as u8;
        buf[1] = 0x80 | (v & 0x3F) as u8;
        2
    } else if v <= 0xFFFF {
        buf[0] = 0xE0 | (v >> 12) as u8;
        buf[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (v & 0x3F) as u8;
        3
    } else {
        buf[0] = 0xF0 | ((v >> 18) & 0x07) as u8;
        buf[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (v & 0x3F) as u8;
        4
    };
    EncodedChar { buf, len }
}

/// Iterator over the characters of an encoded buffer.
///
/// Yields `(codepoint, byte_len)` pairs. After the first error the iterator
/// is exhausted.
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Codepoints<'_> {
    /// Byte offset of the next character to be decoded.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<(Codepoint, usize), EncodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        match decode(self.bytes, self.pos) {
            Ok((cp, len)) => {
                self.pos += len;
                Some(Ok((cp, len)))
            }
            Err(e) => {
                self.pos = self.bytes.len();
                Some(Err(e))
            }
        }
    }
}

pub fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints { bytes, pos: 0 }
}

/// Number of characters in an encoded buffer.
pub fn char_count(bytes: &[u8]) -> Result<usize, EncodingError> {
    codepoints(bytes).try_fold(0, |n, r| r.map(|_| n + 1))
}
