//! C40 encodation and the machinery shared with Text and X12.
//!
//! The three modes pack three values from 0 to 39 into two codewords. They
//! only differ in which characters map to which values, so a single encoder
//! is driven by a [Charset] table.
use arrayvec::ArrayVec;

use super::{ascii, UNLATCH};

pub(super) const SHIFT1: u8 = 0;
pub(super) const SHIFT2: u8 = 1;
pub(super) const SHIFT3: u8 = 2;
const UPPER_SHIFT: u8 = 30;

/// How a range of characters is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Class {
    /// One value from the basic set.
    Basic,
    /// A shift value followed by the character's value.
    Shift(u8),
    /// Not representable.
    Illegal,
}

/// Entry of a charset table, covering all characters up to `last`.
pub(super) struct Range {
    last: u8,
    class: Class,
    offset: u8,
}

pub(super) const fn range(last: u8, class: Class, offset: u8) -> Range {
    Range {
        last,
        class,
        offset,
    }
}

/// Character table for one of the C40 like encodations.
pub(super) struct Charset {
    /// Codeword to switch from ASCII into this mode.
    pub(super) latch: u8,
    /// Supports the shift sets, including the upper shift for characters
    /// above 127. A final incomplete triple is padded with Shift 1.
    pub(super) shift_sets: bool,
    /// Ascending by `last`, the last entry must end at 127 or 255.
    pub(super) ranges: &'static [Range],
}

impl Charset {
    fn lookup(&self, ch: u8) -> (Class, u8) {
        self.ranges
            .iter()
            .find(|r| ch <= r.last)
            .map_or((Class::Illegal, 0), |r| (r.class, ch - r.offset))
    }
}

#[rustfmt::skip]
static C40: Charset = Charset {
    latch: ascii::LATCH_C40,
    shift_sets: true,
    ranges: &[
        range(31, Class::Shift(SHIFT1), 0),
        range(32, Class::Basic, 29),
        range(47, Class::Shift(SHIFT2), 33),
        range(57, Class::Basic, 44),
        range(64, Class::Shift(SHIFT2), 43),
        range(90, Class::Basic, 51),
        range(95, Class::Shift(SHIFT2), 69),
        range(127, Class::Shift(SHIFT3), 96),
    ],
};

/// Values collected until three are available for a codeword pair.
struct Triple<'a> {
    codewords: &'a mut Vec<u8>,
    values: ArrayVec<u8, 3>,
}

impl<'a> Triple<'a> {
    fn push(&mut self, value: u8) {
        self.values.push(value);
        if self.values.is_full() {
            write_three_values(self.codewords, self.values[0], self.values[1], self.values[2]);
            self.values.clear();
        }
    }

    fn pending(&self) -> usize {
        self.values.len()
    }
}

/// Encode three C40 values into two codewords.
pub(super) fn write_three_values(codewords: &mut Vec<u8>, c1: u8, c2: u8, c3: u8) {
    let enc = 1600 * c1 as u16 + 40 * c2 as u16 + c3 as u16 + 1;
    codewords.push((enc >> 8) as u8);
    codewords.push((enc & 0xFF) as u8);
}

/// Encode `data` with the given charset.
///
/// The mode is entered right away and left with an UNLATCH. Characters which
/// do not complete a triple at the end are written in ASCII after it.
pub(super) fn encode_generic(data: &[u8], charset: &Charset) -> Option<Vec<u8>> {
    let mut codewords = vec![charset.latch];
    let mut triple = Triple {
        codewords: &mut codewords,
        values: ArrayVec::new(),
    };

    let mut i = 0;
    while i < data.len() {
        let last = i + 1 == data.len();
        // a lone last character is cheaper in ASCII
        if last && triple.pending() == 0 {
            break;
        }
        let mut ch = data[i];
        if ch > 127 && charset.shift_sets {
            triple.push(SHIFT2);
            triple.push(UPPER_SHIFT);
            ch -= 128;
        }
        let (class, value) = charset.lookup(ch);
        match class {
            Class::Illegal => return None,
            // the upper shift was already written, nothing can follow it
            Class::Basic if last && triple.pending() == 0 => return None,
            // shift and value do not fit into the last triple
            Class::Shift(_) if last && triple.pending() == 2 => break,
            Class::Shift(shift) => triple.push(shift),
            Class::Basic => (),
        }
        triple.push(value);
        i += 1;
    }

    let mut pending = triple.pending();
    if pending == 2 && charset.shift_sets {
        triple.push(SHIFT1);
        pending = 0;
    }
    codewords.push(UNLATCH);
    if pending > 0 || i < data.len() {
        codewords.extend(ascii::encode(&data[i - pending..]));
    }
    Some(codewords)
}

pub(super) fn encode(data: &[u8]) -> Option<Vec<u8>> {
    encode_generic(data, &C40)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn vals(charset: &Charset, data: &[u8]) -> Vec<u8> {
    let mut vals = Vec::new();
    for ch in data.iter().cloned() {
        match charset.lookup(ch) {
            (Class::Shift(s), v) => vals.extend([s, v]),
            (_, v) => vals.push(v),
        }
    }
    vals
}

#[test]
fn test_enc_basic_set() {
    let vals = vals(&C40, b" 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let out: Vec<u8> = (3..=39).collect();
    assert_eq!(vals, out);
}

#[test]
fn test_enc_shift1_set() {
    let input: Vec<u8> = (0..=31).collect();
    let expected: Vec<u8> = (0..=31).flat_map(|v| [SHIFT1, v]).collect();
    assert_eq!(vals(&C40, &input), expected);
}

#[test]
fn test_enc_shift2_set() {
    let vals = vals(&C40, b"!\"#$%&'()*+,-./:;<=>?@[\\]^_");
    let expected: Vec<u8> = (0..=26).flat_map(|v| [SHIFT2, v]).collect();
    assert_eq!(vals, expected);
}

#[test]
fn test_enc_shift3_set() {
    let vals = vals(&C40, b"`abcdefghijklmnopqrstuvwxyz{|}~\x7f");
    let expected: Vec<u8> = (0..=31).flat_map(|v| [SHIFT3, v]).collect();
    assert_eq!(vals, expected);
}

#[test]
fn test_write_three_values() {
    let mut cw = Vec::new();
    // "AIM"
    write_three_values(&mut cw, 14, 22, 26);
    assert_eq!(cw, vec![91, 11]);
}

#[test]
fn test_c40_basic() {
    assert_eq!(encode(b"AIMAIMAIM").unwrap(), vec![230, 91, 11, 91, 11, 91, 11, 254]);
}

#[test]
fn test_c40_spec_example() {
    assert_eq!(
        encode(b"A1B2C3D4E5F6G7H8I9J0K1L2").unwrap(),
        vec![230, 88, 88, 40, 8, 107, 147, 59, 67, 126, 206, 78, 126, 144, 121, 35, 47, 254]
    );
}

#[test]
fn test_c40_last_char_ascii() {
    // "B" alone at the end is written in ASCII
    assert_eq!(encode(b"AIMAIAB").unwrap(), vec![230, 91, 11, 90, 255, 254, 67]);
    assert_eq!(encode(b"ABCD").unwrap(), vec![230, 89, 233, 254, 69]);
    assert_eq!(encode(b"A").unwrap(), vec![230, 254, 66]);
}

#[test]
fn test_c40_pad_with_shift1() {
    assert_eq!(encode(b"AB").unwrap(), vec![230, 89, 217, 254]);
    assert_eq!(encode(b"ABCDE").unwrap(), vec![230, 89, 233, 109, 17, 254]);
}

#[test]
fn test_c40_upper_shift() {
    // A, B, Shift 2 | Upper Shift, Shift 1, 0
    assert_eq!(encode(b"AB\x80").unwrap(), vec![230, 89, 218, 187, 129, 254]);
}

#[test]
fn test_c40_upper_shift_alone_at_end() {
    // after Shift 2, Upper Shift the "A" would be alone in the last triple
    assert_eq!(encode(b"A\xc1"), None);
}

#[test]
fn test_c40_lower_case() {
    assert_eq!(
        encode(b"aimaim").unwrap(),
        vec![230, 12, 171, 56, 158, 12, 171, 56, 158, 254]
    );
}

#[test]
fn test_c40_empty() {
    assert_eq!(encode(b"").unwrap(), vec![230, 254]);
}
