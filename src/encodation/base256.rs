use super::ascii;

/// Longest input which the two codeword length field can describe.
const MAX_LEN: usize = 1555;

/// Perform the 255 state randomization as defined in the standard.
///
/// `pos` must be the number of the byte to be written w.r.t. to the full
/// codeword vector, the number is 1-based.
fn randomize_255_state(ch: u8, pos: usize) -> u8 {
    let pseudo_random = ((149 * pos) % 255) + 1;
    let tmp = ch as u16 + pseudo_random as u16;
    if tmp <= 255 {
        tmp as u8
    } else {
        (tmp - 256) as u8
    }
}

/// Base 256 encodation, the input is written byte by byte after a length field.
pub(super) fn encode(data: &[u8]) -> Option<Vec<u8>> {
    let len = data.len();
    let mut codewords = Vec::with_capacity(len + 3);
    codewords.push(ascii::LATCH_BASE256);
    if len <= 249 {
        codewords.push(len as u8);
    } else if len <= MAX_LEN {
        codewords.push(((len / 250) + 249) as u8);
        codewords.push((len % 250) as u8);
    } else {
        return None;
    }
    codewords.extend_from_slice(data);
    // the latch is not randomized, it is at position 1
    for (i, ch) in codewords.iter_mut().enumerate().skip(1) {
        *ch = randomize_255_state(*ch, i + 1);
    }
    Some(codewords)
}

#[test]
fn test_randomize() {
    assert_eq!(randomize_255_state(0, 2), 44);
    assert_eq!(randomize_255_state(255, 2), 43);
}

#[test]
fn test_short() {
    assert_eq!(encode(b"").unwrap(), vec![231, 44]);
    assert_eq!(encode(b"ab").unwrap(), vec![231, 46, 34, 185]);
    assert_eq!(
        encode(&[0, 1, 2, 3, 4]).unwrap(),
        vec![231, 49, 193, 88, 238, 133, 28]
    );
}

#[test]
fn test_two_byte_length() {
    let enc = encode(&[0; 300]).unwrap();
    assert_eq!(enc.len(), 303);
    // 300 = 250 * 1 + 50
    assert_eq!(enc[..5], [231, 38, 243, 87, 236]);
}

#[test]
fn test_length_field_boundary() {
    let enc = encode(&[0; 249]).unwrap();
    assert_eq!(enc.len(), 251);
    assert_eq!(enc[1], 37);
    // 250 already needs the two codeword form, 250 = 250 * 1 + 0
    let enc = encode(&[0; 250]).unwrap();
    assert_eq!(enc.len(), 253);
    assert_eq!(enc[1..3], [38, 193]);
}

#[test]
fn test_too_long() {
    assert!(encode(&[0; MAX_LEN]).is_some());
    assert_eq!(encode(&[0; MAX_LEN + 1]), None);
}
