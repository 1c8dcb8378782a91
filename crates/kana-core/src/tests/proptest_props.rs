//! Property-based tests across the codec, offset translator, kana tables,
//! romanizer and sort keys.

use proptest::prelude::*;

use crate::codec::{char_count, decode, encode, Codepoint};
use crate::kana::{to_hiragana, unvoice_kana, voice_kana};
use crate::offset::{byte_to_char, char_to_byte, slice_chars};
use crate::romanize::romanize;
use crate::sort_key::sort_key;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Scalar values clustered around the encoded-length boundaries.
fn arb_boundary_value() -> impl Strategy<Value = u32> {
    prop_oneof![
        0x70u32..=0x8F,
        0x7F0u32..=0x80F,
        0xFFF0u32..=0xFFFF,
        0x10000u32..=0x1000F,
        0u32..=0x2A6DF,
    ]
}

fn arb_japanese_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::char::range('ぁ', 'ゖ'),
        3 => prop::char::range('ァ', 'ヺ'),
        1 => prop::char::range('一', '龥'),
        1 => prop::char::range('０', 'ｚ'),
        1 => prop::char::range('a', 'z'),
        1 => Just('ー'),
        1 => Just('★'),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_japanese_char(), 0..24).prop_map(|v| v.into_iter().collect())
}

/// Plain kana that have a dakuten form.
fn arb_unvoiced() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(
            "かきくけこさしすせそたちつてとカキクケコサシスセソタチツテトウ"
                .chars()
                .collect::<Vec<_>>(),
        ),
        0..12,
    )
    .prop_map(|v| v.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn codec_round_trip(v in arb_boundary_value()) {
        let enc = encode(Codepoint(v));
        let expected_len = match v {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        };
        prop_assert_eq!(decode(enc.as_bytes(), 0), Ok((Codepoint(v), expected_len)));
    }

    #[test]
    fn offsets_invert(text in arb_text()) {
        let bytes = text.as_bytes();
        let n = char_count(bytes).unwrap();
        let mut last = None;
        for i in 0..=n {
            let b = char_to_byte(bytes, i).unwrap();
            if let Some(prev) = last {
                prop_assert!(b > prev, "char_to_byte must be strictly monotonic");
            }
            last = Some(b);
            prop_assert_eq!(byte_to_char(bytes, b).unwrap(), Some(i));
        }
    }

    #[test]
    fn mid_character_offsets_are_none(text in arb_text()) {
        let bytes = text.as_bytes();
        for (start, c) in text.char_indices() {
            for inner in 1..c.len_utf8() {
                prop_assert_eq!(byte_to_char(bytes, start + inner).unwrap(), None);
            }
        }
    }

    #[test]
    fn slice_matches_std(text in arb_text(), start in 0usize..24, count in 0usize..24) {
        let n = text.chars().count();
        let got = slice_chars(text.as_bytes(), start, count);
        if start > n {
            prop_assert!(got.is_err());
        } else {
            let expected: String = text.chars().skip(start).take(count).collect();
            prop_assert_eq!(got.unwrap(), expected.into_bytes());
        }
    }

    #[test]
    fn to_hiragana_idempotent(text in arb_text()) {
        let once = to_hiragana(&text);
        prop_assert_eq!(to_hiragana(&once), once);
    }

    #[test]
    fn voice_unvoice_round_trip(text in arb_unvoiced()) {
        prop_assert_eq!(unvoice_kana(&voice_kana(&text)), text.clone());
    }

    #[test]
    fn voicing_survives_unvoice_then_voice(text in arb_unvoiced()) {
        let voiced = voice_kana(&text);
        prop_assert_eq!(voice_kana(&unvoice_kana(&voiced)), voiced);
    }

    #[test]
    fn romanize_never_panics_and_reports_only_source_chars(text in arb_text()) {
        let r = romanize(&text, true);
        for d in &r.diagnostics {
            prop_assert!(text.contains(d.character));
            prop_assert_eq!(&d.source, &text);
        }
        prop_assert!(romanize(&text, false).diagnostics.is_empty());
    }

    #[test]
    fn sort_key_is_printable_ascii(text in arb_text()) {
        let key = sort_key(&text);
        prop_assert!(key.as_bytes().iter().all(|b| (0x21..=0x7E).contains(b)));
    }

    #[test]
    fn sort_key_ignores_script(text in arb_text()) {
        prop_assert_eq!(sort_key(&to_hiragana(&text)), sort_key(&text));
    }
}
