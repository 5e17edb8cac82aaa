use arrayvec::ArrayVec;

use super::ascii;

const UNLATCH: u8 = 0b011111;

#[inline]
fn is_encodable(ch: u8) -> bool {
    matches!(ch, 32..=94)
}

/// Encode four EDIFACT values (6 bits each) into three codewords.
fn write4(codewords: &mut Vec<u8>, s: &ArrayVec<u8, 4>) {
    let [s0, s1, s2, s3] = [s[0], s[1], s[2], s[3]].map(|v| v & 0b11_1111);
    codewords.push((s0 << 2) | (s1 >> 4));
    codewords.push((s1 << 4) | (s2 >> 2));
    codewords.push((s2 << 6) | s3);
}

/// EDIFACT encodation.
///
/// The input is split into groups of four. The value slot after the last
/// complete group of three or four characters holds the UNLATCH. Characters
/// which did not make it into a group are written in ASCII.
pub(super) fn encode(data: &[u8]) -> Option<Vec<u8>> {
    if !data.iter().cloned().all(is_encodable) {
        return None;
    }
    // number of value slots including the UNLATCH
    let slots = (data.len() + 1) & !0b11;
    let mut codewords = Vec::with_capacity(slots / 4 * 3 + 3);
    if slots > 0 {
        codewords.push(ascii::LATCH_EDIFACT);
    }
    let values = data
        .iter()
        .cloned()
        .take(slots.saturating_sub(1))
        .chain(core::iter::once(UNLATCH))
        .take(slots);
    let mut group = ArrayVec::<u8, 4>::new();
    for value in values {
        group.push(value);
        if group.is_full() {
            write4(&mut codewords, &group);
            group.clear();
        }
    }
    if slots <= data.len() {
        codewords.extend(ascii::encode(&data[slots.saturating_sub(1)..]));
    }
    Some(codewords)
}

#[test]
fn test_write4() {
    let mut cw = Vec::new();
    let s: ArrayVec<u8, 4> = [0b10_01_00, 0b11_01_10, 0b011010, 1].into();
    write4(&mut cw, &s);
    assert_eq!(cw, vec![0b10_01_00_11, 0b01_10_01_10, 0b10_00_00_01]);
}

#[test]
fn test_three_chars_and_unlatch() {
    assert_eq!(encode(b"ABC").unwrap(), vec![240, 4, 32, 223]);
    assert_eq!(encode(b"ABCDEFG").unwrap(), vec![240, 4, 32, 196, 20, 97, 223]);
}

#[test]
fn test_rest_in_ascii() {
    // the fourth character does not fit next to the UNLATCH
    assert_eq!(encode(b"ABCD").unwrap(), vec![240, 4, 32, 223, 69]);
    // too short for EDIFACT at all
    assert_eq!(encode(b"A").unwrap(), vec![66]);
    assert!(encode(b"").unwrap().is_empty());
}

#[test]
fn test_longer_input() {
    assert_eq!(
        encode(b".A.C1.3.DATA.123DATA.123DATA").unwrap(),
        vec![
            240, 184, 27, 131, 198, 236, 238, 16, 21, 1, 187, 28, 179, 16, 21, 1, 187, 28, 179,
            16, 21, 31, 66
        ]
    );
}

#[test]
fn test_not_encodable() {
    assert_eq!(encode(b"abc"), None);
    assert_eq!(encode(b"AB\x1f"), None);
    assert_eq!(encode(b"AB_"), None);
    assert!(encode(b" ^").is_some());
}
