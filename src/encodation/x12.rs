use super::ascii;
use super::c40::{encode_generic, range, Charset, Class};

/// ANSI X12 EDI, no shift sets and no case.
#[rustfmt::skip]
static X12: Charset = Charset {
    latch: ascii::LATCH_X12,
    shift_sets: false,
    ranges: &[
        range(12, Class::Illegal, 0),
        // segment terminator <CR>
        range(13, Class::Basic, 13),
        range(31, Class::Illegal, 0),
        range(32, Class::Basic, 29),
        range(41, Class::Illegal, 0),
        // segment separator '*'
        range(42, Class::Basic, 41),
        range(47, Class::Illegal, 0),
        range(57, Class::Basic, 44),
        range(61, Class::Illegal, 0),
        // sub-element separator '>'
        range(62, Class::Basic, 60),
        range(64, Class::Illegal, 0),
        range(90, Class::Basic, 51),
        range(255, Class::Illegal, 0),
    ],
};

#[cfg(test)]
fn is_native_x12(ch: u8) -> bool {
    matches!(ch, 13 | 42 | 62 | 32 | b'0'..=b'9' | b'A'..=b'Z')
}

pub(super) fn encode(data: &[u8]) -> Option<Vec<u8>> {
    encode_generic(data, &X12)
}

#[test]
fn test_x12_charset() {
    for ch in 0..=255u8 {
        let encoded = encode(&[b'A', b'A', ch]);
        assert_eq!(encoded.is_some(), is_native_x12(ch), "ch = {}", ch);
    }
}

#[test]
fn test_x12_separators() {
    assert_eq!(
        encode(b"ABC>*\r").unwrap(),
        vec![238, 89, 233, 12, 169, 254]
    );
}

#[test]
fn test_x12_rest_in_ascii() {
    // no padding in X12, two remaining characters are written in ASCII
    assert_eq!(encode(b"ABCDE").unwrap(), vec![238, 89, 233, 254, 69, 70]);
    assert_eq!(encode(b"AB").unwrap(), vec![238, 254, 66, 67]);
}

#[test]
fn test_x12_illegal() {
    assert_eq!(encode(b"abc"), None);
    assert_eq!(encode(b"AB\x80"), None);
}
