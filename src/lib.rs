//! Data Matrix (ECC 200) encoder.
//!
//! The input bytes are turned into codewords by one of the encodations
//! (ASCII, C40, Text, X12, EDIFACT, Base 256 or GS1), padded to fill the
//! smallest fitting symbol, protected with Reed-Solomon error correction
//! and finally placed into the grid of modules.
//!
//! ```rust
//! let symbol = dmtx::encode(b"Hello, World!", &dmtx::EncodeOptions::default()).unwrap();
//! for (x, y) in symbol.pixels() {
//!     // draw a dark module at (x, y)
//! #   let _ = (x, y);
//! }
//! ```
mod encodation;
pub mod errorcode;
mod options;
pub mod placement;
mod symbol_size;

pub mod data;

pub use encodation::{DataEncodingError, EncodationType};
pub use options::EncodeOptions;
pub use symbol_size::SymbolSize;

use placement::{Bitmap, MatrixMap, Visitor};

struct CodewordPlacer(Vec<u8>);

impl Visitor<bool> for CodewordPlacer {
    fn visit(&mut self, idx: usize) -> [bool; 8] {
        let codeword = self.0[idx];
        // 0 = MSB, 7 = LSB
        core::array::from_fn(|i| ((codeword >> (7 - i)) & 1) == 1)
    }
}

/// An encoded Data Matrix.
///
/// The symbol includes the finder patterns but no quiet zone.
#[derive(Clone, PartialEq, Eq)]
pub struct Symbol {
    bitmap: Bitmap<bool>,
    encodation: EncodationType,
    symbol_size: SymbolSize,
}

impl Symbol {
    /// Width in modules.
    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    /// Height in modules.
    pub fn height(&self) -> usize {
        self.bitmap.height()
    }

    /// Is the module at column `x` and row `y` dark?
    ///
    /// The origin is the top left corner. Coordinates outside of the
    /// symbol are light.
    pub fn bit(&self, x: usize, y: usize) -> bool {
        self.bitmap.get(x, y).copied().unwrap_or(false)
    }

    /// Iterator over the coordinates `(x, y)` of the dark modules.
    ///
    /// See [Bitmap::pixels] for the details.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bitmap.pixels()
    }

    /// The encodation used for the data.
    pub fn encodation(&self) -> EncodationType {
        self.encodation
    }

    /// The size class the symbol was built with.
    pub fn symbol_size(&self) -> SymbolSize {
        self.symbol_size
    }

    /// The underlying bitmap, finder patterns included.
    pub fn bitmap(&self) -> &Bitmap<bool> {
        &self.bitmap
    }
}

impl core::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}x{}@{}", self.width(), self.height(), self.encodation.name())
    }
}

/// Encode the data as a Data Matrix ECC200.
///
/// Fails if the data can not be represented with the encodations the
/// options allow, or if it is too long for the largest symbol.
pub fn encode(data: &[u8], options: &EncodeOptions) -> Result<Symbol, DataEncodingError> {
    let (mut codewords, symbol_size, encodation) = data::encode_data(data, options)?;
    let ecc = errorcode::encode_error(&codewords, symbol_size);
    codewords.extend_from_slice(&ecc);
    let mut map = MatrixMap::new(symbol_size);
    map.traverse(&mut CodewordPlacer(codewords));
    let symbol = Symbol {
        bitmap: map.bitmap(),
        encodation,
        symbol_size,
    };
    tracing::debug!(symbol = ?symbol, "encoded");
    Ok(symbol)
}

/// Encode a string, see [encode].
pub fn encode_str(text: &str, options: &EncodeOptions) -> Result<Symbol, DataEncodingError> {
    encode(text.as_bytes(), options)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn test_encode_test() {
    let symbol = encode(b"TEST", &EncodeOptions::default()).unwrap();
    #[rustfmt::skip]
    let should = [
        "101010101010",
        "101100010011",
        "100010101010",
        "111000001101",
        "100100111110",
        "111111110111",
        "111011101110",
        "100100110101",
        "111001010000",
        "101011110101",
        "101001011010",
        "111111111111",
    ];
    assert_eq!(symbol.bitmap().rows(), should);
    assert_eq!(format!("{:?}", symbol), "12x12@ascii");
}

#[test]
fn test_encode_rectangular() {
    let options = EncodeOptions::default().rectangular(true);
    let symbol = encode_str("Hello", &options).unwrap();
    #[rustfmt::skip]
    let should = [
        "101010101010101010",
        "101101101111111101",
        "110001101000001110",
        "111011001111011011",
        "111100010000011000",
        "111100101110011001",
        "100111010110110000",
        "111111111111111111",
    ];
    assert_eq!(symbol.bitmap().rows(), should);
    assert_eq!(symbol.symbol_size(), SymbolSize::Rect8x18);
}

#[test]
fn test_encode_chunky_bacon() {
    let symbol = encode_str("Chunky Bacon", &EncodeOptions::default()).unwrap();
    assert_eq!(symbol.encodation(), EncodationType::Ascii);
    assert_eq!(symbol.symbol_size(), SymbolSize::Square16);
    assert_eq!((symbol.width(), symbol.height()), (16, 16));
    assert!(symbol.pixels().count() > 0);
    assert!(symbol.bit(0, 0));
    assert!(!symbol.bit(16, 0));
}

#[test]
fn test_encode_deterministic() {
    let options = EncodeOptions::default();
    let data = b"Deterministic? 1234567890 \x80\xff";
    assert_eq!(encode(data, &options).unwrap(), encode(data, &options).unwrap());
}

#[test]
fn test_encode_gs1() {
    let options = EncodeOptions::default().encodation_name("gs1").unwrap();
    let symbol = encode(b"\x1d01095011010209171719050810ABCD1234\x1d2110", &options).unwrap();
    assert_eq!(symbol.encodation(), EncodationType::Gs1);
    let (codewords, _, _) = data::encode_data(b"\x1d0109501101", &options).unwrap();
    assert_eq!(codewords[0], 232);
}

#[test]
fn test_encode_forced_fails() {
    let options = EncodeOptions::default().encodation(EncodationType::X12);
    assert_eq!(encode(b"abc", &options), Err(DataEncodingError::IllegalData));
    assert!(encode(b"abc", &options).unwrap_err().is_encoding_error());
}

#[test]
fn test_encode_too_long() {
    let err = encode(&[0x80; 3200], &EncodeOptions::default()).unwrap_err();
    assert_eq!(err, DataEncodingError::TooMuchData);
    assert!(err.is_encoding_error());
}

#[test]
fn test_encode_rectangular_falls_back_to_square() {
    let options = EncodeOptions::default().rectangular(true);
    let symbol = encode(&[0x80; 60], &options).unwrap();
    assert_eq!(symbol.encodation(), EncodationType::Base256);
    assert_eq!(symbol.symbol_size(), SymbolSize::Square32);
    assert_eq!((symbol.width(), symbol.height()), (32, 32));
}

#[test]
fn test_dimensions_match_regions() {
    use enum_iterator::all;

    for size in all::<SymbolSize>() {
        let setup = size.block_setup();
        let (rx, ry) = size.data_regions();
        assert_eq!(size.width(), setup.content_width() + 2 * rx);
        assert_eq!(size.height(), setup.content_height() + 2 * ry);

        let map = MatrixMap::<bool>::new(size);
        let bitmap = map.bitmap();
        assert_eq!((bitmap.width(), bitmap.height()), (size.width(), size.height()));
    }
}
