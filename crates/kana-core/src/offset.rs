//! Byte-offset ↔ character-offset translation over encoded text.
//!
//! Every walk goes through `codec::codepoints`, so malformed input surfaces
//! as `OffsetError::Encoding` rather than being skipped. A byte offset that
//! lands inside a character is not an error: it yields `Ok(None)`.

use crate::codec::{char_count, codepoints, encode, Codepoint, EncodingError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    #[error("offset {offset} out of range (limit {limit})")]
    Range { offset: usize, limit: usize },

    #[error("expected exactly one character, found {0}")]
    NotSingleChar(usize),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Convert a byte offset to a character offset.
///
/// `byte_offset` may equal `text.len()` (the end position). Returns
/// `Ok(None)` if the offset splits a multi-byte character.
pub fn byte_to_char(text: &[u8], byte_offset: usize) -> Result<Option<usize>, OffsetError> {
    if byte_offset > text.len() {
        return Err(OffsetError::Range {
            offset: byte_offset,
            limit: text.len(),
        });
    }

    let mut consumed = 0;
    let mut index = 0;
    let mut chars = codepoints(text);
    while consumed < byte_offset {
        let Some(item) = chars.next() else { break };
        let (_, len) = item?;
        consumed += len;
        index += 1;
    }
    Ok((consumed == byte_offset).then_some(index))
}

/// Convert a character offset to the byte offset where that character starts.
///
/// `char_offset` may equal the character count (the end position).
pub fn char_to_byte(text: &[u8], char_offset: usize) -> Result<usize, OffsetError> {
    let mut chars = codepoints(text);
    for index in 0..char_offset {
        match chars.next() {
            Some(item) => {
                item?;
            }
            None => {
                return Err(OffsetError::Range {
                    offset: char_offset,
                    limit: index,
                })
            }
        }
    }
    Ok(chars.position())
}

/// Find `needle` at or after character `from_char`, returning the match's
/// character offset.
///
/// The search itself is byte-level. A match that does not start on a
/// character boundary is reported as `None`, the same as no match.
pub fn find_char_offset(
    text: &[u8],
    needle: &[u8],
    from_char: usize,
) -> Result<Option<usize>, OffsetError> {
    let start = char_to_byte(text, from_char)?;
    match find_bytes(&text[start..], needle) {
        Some(found) => byte_to_char(text, start + found),
        None => Ok(None),
    }
}

/// Take up to `char_count` characters starting at character `start_char`.
///
/// Returns fewer characters if the text ends first.
pub fn slice_chars(
    text: &[u8],
    start_char: usize,
    char_count: usize,
) -> Result<Vec<u8>, OffsetError> {
    let start = char_to_byte(text, start_char)?;
    let mut out = Vec::with_capacity(text.len() - start);
    for item in codepoints(&text[start..]).take(char_count) {
        let (cp, _) = item?;
        out.extend_from_slice(encode(cp).as_bytes());
    }
    Ok(out)
}

/// The codepoint of a text that must hold exactly one character.
pub fn single_codepoint(text: &[u8]) -> Result<Codepoint, OffsetError> {
    let mut chars = codepoints(text);
    match (chars.next(), chars.next()) {
        (Some(first), None) => Ok(first?.0),
        _ => Err(OffsetError::NotSingleChar(char_count(text)?)),
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "aあ漢b𠀀";

    #[test]
    fn test_char_to_byte() {
        let t = TEXT.as_bytes();
        assert_eq!(char_to_byte(t, 0), Ok(0));
        assert_eq!(char_to_byte(t, 1), Ok(1));
        assert_eq!(char_to_byte(t, 2), Ok(4));
        assert_eq!(char_to_byte(t, 3), Ok(7));
        assert_eq!(char_to_byte(t, 4), Ok(8));
        assert_eq!(char_to_byte(t, 5), Ok(12));
    }

    #[test]
    fn test_char_to_byte_out_of_range() {
        assert_eq!(
            char_to_byte(TEXT.as_bytes(), 6),
            Err(OffsetError::Range {
                offset: 6,
                limit: 5
            })
        );
        assert!(char_to_byte(b"", 1).is_err());
        assert_eq!(char_to_byte(b"", 0), Ok(0));
    }

    #[test]
    fn test_byte_to_char_boundaries() {
        let t = TEXT.as_bytes();
        assert_eq!(byte_to_char(t, 0), Ok(Some(0)));
        assert_eq!(byte_to_char(t, 1), Ok(Some(1)));
        assert_eq!(byte_to_char(t, 4), Ok(Some(2)));
        assert_eq!(byte_to_char(t, 7), Ok(Some(3)));
        assert_eq!(byte_to_char(t, 8), Ok(Some(4)));
        assert_eq!(byte_to_char(t, 12), Ok(Some(5)));
    }

    #[test]
    fn test_byte_to_char_mid_character() {
        let t = TEXT.as_bytes();
        assert_eq!(byte_to_char(t, 2), Ok(None));
        assert_eq!(byte_to_char(t, 3), Ok(None));
        assert_eq!(byte_to_char(t, 9), Ok(None));
        assert_eq!(byte_to_char(t, 11), Ok(None));
    }

    #[test]
    fn test_byte_to_char_out_of_range() {
        assert_eq!(
            byte_to_char(b"abc", 4),
            Err(OffsetError::Range {
                offset: 4,
                limit: 3
            })
        );
    }

    #[test]
    fn test_walk_propagates_encoding_error() {
        let bad = [b'a', 0xFF, b'b'];
        assert!(matches!(
            char_to_byte(&bad, 2),
            Err(OffsetError::Encoding(EncodingError::InvalidLeadByte { .. }))
        ));
        assert!(matches!(
            byte_to_char(&bad, 3),
            Err(OffsetError::Encoding(_))
        ));
    }

    #[test]
    fn test_find_char_offset() {
        let t = "ラーメンとラーメン".as_bytes();
        let needle = "ラー".as_bytes();
        assert_eq!(find_char_offset(t, needle, 0), Ok(Some(0)));
        assert_eq!(find_char_offset(t, needle, 1), Ok(Some(5)));
        assert_eq!(find_char_offset(t, needle, 6), Ok(None));
        assert_eq!(find_char_offset(t, "と".as_bytes(), 0), Ok(Some(4)));
        assert_eq!(find_char_offset(t, b"", 3), Ok(Some(3)));
        assert!(find_char_offset(t, needle, 10).is_err());
    }

    #[test]
    fn test_find_char_offset_misaligned_match() {
        // Trailing two bytes of あ (E3 81 82) matched on their own.
        let t = "xあ".as_bytes();
        assert_eq!(find_char_offset(t, &[0x81, 0x82], 0), Ok(None));
    }

    #[test]
    fn test_slice_chars() {
        let t = TEXT.as_bytes();
        assert_eq!(slice_chars(t, 1, 2).unwrap(), "あ漢".as_bytes());
        assert_eq!(slice_chars(t, 0, 0).unwrap(), b"");
        assert_eq!(slice_chars(t, 3, 10).unwrap(), "b𠀀".as_bytes());
        assert_eq!(slice_chars(t, 5, 1).unwrap(), b"");
        assert!(slice_chars(t, 6, 1).is_err());
    }

    #[test]
    fn test_single_codepoint() {
        assert_eq!(single_codepoint("漢".as_bytes()), Ok(Codepoint(0x6F22)));
        assert_eq!(
            single_codepoint("漢字".as_bytes()),
            Err(OffsetError::NotSingleChar(2))
        );
        assert_eq!(single_codepoint(b""), Err(OffsetError::NotSingleChar(0)));
    }
}
