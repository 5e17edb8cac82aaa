use super::ascii;
use super::c40::{encode_generic, range, Charset, Class, SHIFT1, SHIFT2, SHIFT3};

/// Like C40, but with lower and upper case swapped.
#[rustfmt::skip]
static TEXT: Charset = Charset {
    latch: ascii::LATCH_TEXT,
    shift_sets: true,
    ranges: &[
        range(31, Class::Shift(SHIFT1), 0),
        range(32, Class::Basic, 29),
        range(47, Class::Shift(SHIFT2), 33),
        range(57, Class::Basic, 44),
        range(64, Class::Shift(SHIFT2), 43),
        range(90, Class::Shift(SHIFT3), 64),
        range(95, Class::Shift(SHIFT2), 69),
        range(96, Class::Shift(SHIFT3), 96),
        range(122, Class::Basic, 83),
        range(127, Class::Shift(SHIFT3), 96),
    ],
};

pub(super) fn encode(data: &[u8]) -> Option<Vec<u8>> {
    encode_generic(data, &TEXT)
}

#[test]
fn test_text_lower_case() {
    assert_eq!(encode(b"aimaim").unwrap(), vec![239, 91, 11, 91, 11, 254]);
    assert_eq!(
        encode(b"hello world").unwrap(),
        vec![239, 134, 42, 160, 164, 229, 128, 158, 233, 254]
    );
}

#[test]
fn test_text_upper_case_uses_shift3() {
    assert_eq!(
        encode(b"AIMAIMAIM").unwrap(),
        vec![239, 12, 171, 56, 158, 12, 171, 56, 158, 12, 171, 56, 158, 254]
    );
}

#[test]
fn test_text_grave_accent() {
    // '`' is Shift 3, 0 and not a basic value
    let mut expected = Vec::new();
    super::c40::write_three_values(&mut expected, 14, SHIFT3, 0);
    assert_eq!(encode(b"a`").unwrap()[1..3], expected[..]);
}

#[test]
fn test_text_shift_does_not_fit_last_triple() {
    // "A" needs two values, the second "A" is written in ASCII
    assert_eq!(encode(b"AB").unwrap(), vec![239, 12, 169, 254, 67]);
}
