//! Data part encoding
//!
//! The bytes encoded into a Data Matrix symbol consist of two parts,
//! the first part is the actual information one wants to encode,
//! the second part are error correction bytes.
//!
//! The functions in this module can be used to encode the first part,
//! the data part. [encode](crate::encode) is built on top of them, but
//! they can be useful if one needs to work on a lower level.
use flagset::FlagSet;

use crate::encodation::{self, ascii};
pub use crate::encodation::{DataEncodingError, EncodationType};
use crate::{EncodeOptions, SymbolSize};

/// Encode input to the padded data codewords of a Data Matrix.
///
/// Returns the codewords together with the symbol size they fill and the
/// encodation which was used.
pub fn encode_data(
    data: &[u8],
    options: &EncodeOptions,
) -> Result<(Vec<u8>, SymbolSize, EncodationType), DataEncodingError> {
    let (encodation, mut codewords) = encodation::encode(data, options.encodations())?;
    let symbol_size = SymbolSize::for_codewords(codewords.len(), options.rectangular)
        .ok_or(DataEncodingError::TooMuchData)?;
    tracing::debug!(size = ?symbol_size, len = codewords.len(), "symbol size selected");
    add_padding(&mut codewords, symbol_size.num_data_codewords());
    Ok((codewords, symbol_size, encodation))
}

/// Encode the input with each encodation in `types`.
///
/// Encodations which can not represent the input, or which produce no
/// codewords, are left out. The codewords are not padded.
pub fn encodings(data: &[u8], types: FlagSet<EncodationType>) -> Vec<(EncodationType, Vec<u8>)> {
    encodation::candidates(data, types)
}

/// Fill the codewords up to `capacity`.
///
/// The first pad is written as is, the following ones are scrambled with
/// their 1-based position in the codeword stream.
fn add_padding(codewords: &mut Vec<u8>, capacity: usize) {
    let num_padding = capacity.saturating_sub(codewords.len());
    tracing::trace!(num_padding, "padding");
    if num_padding == 0 {
        return;
    }
    codewords.push(ascii::PAD);
    while codewords.len() < capacity {
        let pos = codewords.len() + 1;
        codewords.push((((149 * pos) % 253 + 130) % 254) as u8);
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn test_padding() {
    let mut cw = vec![66];
    add_padding(&mut cw, 5);
    assert_eq!(cw, vec![66, 129, 70, 220, 115]);

    let mut cw = vec![];
    add_padding(&mut cw, 12);
    assert_eq!(cw, vec![129, 175, 70, 220, 115, 11, 161, 56, 206, 101, 251, 147]);
}

#[test]
fn test_padding_full() {
    let mut cw = vec![1, 2, 3];
    add_padding(&mut cw, 3);
    assert_eq!(cw, vec![1, 2, 3]);
}

#[test]
fn test_padding_can_be_zero() {
    let mut cw = vec![0; 27];
    add_padding(&mut cw, 30);
    assert_eq!(cw[27], 129);
    assert_eq!(cw[28], 150);
    let mut cw = vec![0; 26];
    add_padding(&mut cw, 28);
    assert_eq!(cw[27], 0);
}

#[test]
fn test_encode_data_fills_capacity() {
    let inputs: [&[u8]; 4] = [b"", b"A", b"Chunky Bacon", &[0x80; 300]];
    for input in inputs {
        for rectangular in [false, true] {
            let options = EncodeOptions::default().rectangular(rectangular);
            let (cw, size, _) = encode_data(input, &options).unwrap();
            assert_eq!(cw.len(), size.num_data_codewords());
        }
    }
}

#[test]
fn test_encode_data_test() {
    let (cw, size, encodation) = encode_data(b"TEST", &EncodeOptions::default()).unwrap();
    assert_eq!(cw, vec![85, 70, 84, 85, 129]);
    assert_eq!(size, SymbolSize::Square12);
    assert_eq!(encodation, EncodationType::Ascii);
}

#[test]
fn test_encode_data_too_much() {
    let options = EncodeOptions::default();
    assert_eq!(encode_data(&[0x80; 3200], &options), Err(DataEncodingError::TooMuchData));
    // Text represents it, but needs 1602 codewords
    let options = options.encodation(EncodationType::Text);
    assert_eq!(encode_data(&[b'a'; 2400], &options), Err(DataEncodingError::TooMuchData));
}

#[test]
fn test_encodings() {
    let all = encodings(b"\x1d01", EncodationType::Gs1 | EncodationType::Ascii);
    assert_eq!(
        all,
        vec![
            (EncodationType::Ascii, vec![30, 131]),
            (EncodationType::Gs1, vec![232, 131]),
        ]
    );
}
