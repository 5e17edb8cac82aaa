pub(super) const LATCH_C40: u8 = 230;
pub(super) const LATCH_BASE256: u8 = 231;
pub(super) const LATCH_X12: u8 = 238;
pub(super) const LATCH_TEXT: u8 = 239;
pub(super) const LATCH_EDIFACT: u8 = 240;
pub(crate) const PAD: u8 = 129;

const FNC1: u8 = 232;
const UPPER_SHIFT: u8 = 235;

/// The group separator which GS1 data uses between element strings.
const GS: u8 = 29;

fn two_digits_coming(rest: &[u8]) -> bool {
    match rest {
        [a, b, ..] => a.is_ascii_digit() && b.is_ascii_digit(),
        _ => false,
    }
}

fn encode_with(mut rest: &[u8], gs1: bool) -> Vec<u8> {
    let mut codewords = Vec::with_capacity(rest.len());
    while let Some((&ch, tail)) = rest.split_first() {
        if two_digits_coming(rest) {
            codewords.push((ch - b'0') * 10 + (tail[0] - b'0') + 130);
            rest = &tail[1..];
            continue;
        }
        match ch {
            GS if gs1 => codewords.push(FNC1),
            0..=127 => codewords.push(ch + 1),
            128..=255 => {
                codewords.push(UPPER_SHIFT);
                codewords.push(ch - 128 + 1);
            }
        }
        rest = tail;
    }
    codewords
}

/// ASCII encodation, pairs of digits are packed into one codeword.
pub(super) fn encode(data: &[u8]) -> Vec<u8> {
    encode_with(data, false)
}

/// ASCII encodation with the group separator written as FNC1.
pub(super) fn encode_gs1(data: &[u8]) -> Vec<u8> {
    encode_with(data, true)
}

#[test]
fn test_single_chars() {
    assert_eq!(encode(b"TEST"), vec![85, 70, 84, 85]);
    assert_eq!(encode(b"\x00 \x7f"), vec![1, 33, 128]);
}

#[test]
fn test_two_digits() {
    assert_eq!(encode(b"123456"), vec![142, 164, 186]);
    assert_eq!(encode(b"00"), vec![130]);
    assert_eq!(encode(b"99"), vec![229]);
}

#[test]
fn test_odd_number_of_digits() {
    assert_eq!(encode(b"12345"), vec![142, 164, 54]);
    assert_eq!(encode(b"1A2"), vec![50, 66, 51]);
}

#[test]
fn test_two_digits_with_upper() {
    assert_eq!(encode(b"123456\xa3"), vec![142, 164, 186, 235, 36]);
    assert_eq!(encode(b"\x80\xff"), vec![235, 1, 235, 128]);
}

#[test]
fn test_example1() {
    assert_eq!(
        encode(b"30Q324343430794<OQQ"),
        vec![160, 82, 162, 173, 173, 173, 137, 224, 61, 80, 82, 82]
    );
}

#[test]
fn test_gs1_separator() {
    assert_eq!(encode_gs1(b"\x1d01"), vec![232, 131]);
    assert_eq!(encode(b"\x1d01"), vec![30, 131]);
    // the same as ASCII otherwise
    let plain = b"ABC 123 \xe4";
    assert_eq!(encode_gs1(plain), encode(plain));
}

#[test]
fn test_empty() {
    assert!(encode(b"").is_empty());
}
