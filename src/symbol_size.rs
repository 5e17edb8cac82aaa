#[cfg(test)]
use enum_iterator::{all, Sequence};

#[cfg(test)]
use pretty_assertions::assert_eq;

/// The symbol sizes supported by Data Matrix.
///
/// The number behind a variant, e.g., [Square10](SymbolSize::Square10),
/// describes the number of modules (the tiny black squares) the symbol is
/// tall/wide. Rectangles are given as height x width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Sequence))]
pub enum SymbolSize {
    Square10,
    Square12,
    Square14,
    Square16,
    Square18,
    Square20,
    Square22,
    Square24,
    Square26,
    Square32,
    Square36,
    Square40,
    Square44,
    Square48,
    Square52,
    Square64,
    Square72,
    Square80,
    Square88,
    Square96,
    Square104,
    Square120,
    Square132,
    Square144,
    Rect8x18,
    Rect8x32,
    Rect12x26,
    Rect12x36,
    Rect16x36,
    Rect16x48,
}

#[rustfmt::skip]
const SQUARE_SIZES: [SymbolSize; 24] = [
    SymbolSize::Square10, SymbolSize::Square12, SymbolSize::Square14, SymbolSize::Square16,
    SymbolSize::Square18, SymbolSize::Square20, SymbolSize::Square22, SymbolSize::Square24,
    SymbolSize::Square26, SymbolSize::Square32, SymbolSize::Square36, SymbolSize::Square40,
    SymbolSize::Square44, SymbolSize::Square48, SymbolSize::Square52, SymbolSize::Square64,
    SymbolSize::Square72, SymbolSize::Square80, SymbolSize::Square88, SymbolSize::Square96,
    SymbolSize::Square104, SymbolSize::Square120, SymbolSize::Square132, SymbolSize::Square144,
];

#[rustfmt::skip]
const RECT_SIZES: [SymbolSize; 6] = [
    SymbolSize::Rect8x18, SymbolSize::Rect8x32, SymbolSize::Rect12x26,
    SymbolSize::Rect12x36, SymbolSize::Rect16x36, SymbolSize::Rect16x48,
];

/// Rectangles are only tried for fewer codewords than this.
const RECT_LIMIT: usize = 50;

pub(crate) struct BlockSetup {
    /// Number of interleaved error correction blocks
    pub(crate) num_ecc_blocks: usize,
    /// Number of error correction codewords per block
    pub(crate) num_ecc_per_block: usize,
    /// Total width of the symbol including alignment pattern but not quiet zone
    pub(crate) width: usize,
    /// Total height of the symbol including alignment pattern but not quiet zone
    pub(crate) height: usize,
    /// Number of data regions next to each other
    pub(crate) regions_x: usize,
    /// Number of data regions on top of each other
    pub(crate) regions_y: usize,
}

impl BlockSetup {
    const fn new(
        width: usize,
        height: usize,
        regions_x: usize,
        regions_y: usize,
        num_ecc_per_block: usize,
        num_ecc_blocks: usize,
    ) -> Self {
        Self {
            num_ecc_blocks,
            num_ecc_per_block,
            width,
            height,
            regions_x,
            regions_y,
        }
    }

    /// Width of the symbol without any alignment patterns.
    pub(crate) fn content_width(&self) -> usize {
        self.width - 2 * self.regions_x
    }

    /// Height of the symbol without any alignment patterns.
    pub(crate) fn content_height(&self) -> usize {
        self.height - 2 * self.regions_y
    }

    pub(crate) fn num_error_codes(&self) -> usize {
        self.num_ecc_blocks * self.num_ecc_per_block
    }
}

impl SymbolSize {
    /// Find the smallest symbol which can hold `num_codewords` data codewords.
    ///
    /// Rectangular symbols are used if requested and the data is short
    /// enough, otherwise the square symbols. Returns `None` if the
    /// data is too big for all of them.
    pub fn for_codewords(num_codewords: usize, rectangular: bool) -> Option<Self> {
        let candidates: &[Self] = if rectangular && num_codewords < RECT_LIMIT {
            &RECT_SIZES
        } else {
            &SQUARE_SIZES
        };
        candidates
            .iter()
            .find(|s| s.num_data_codewords() >= num_codewords)
            .cloned()
    }

    /// Number of data codewords the symbol holds, padding included.
    pub fn num_data_codewords(&self) -> usize {
        match self {
            Self::Square10 => 3,
            Self::Square12 => 5,
            Self::Square14 => 8,
            Self::Square16 => 12,
            Self::Square18 => 18,
            Self::Square20 => 22,
            Self::Square22 => 30,
            Self::Square24 => 36,
            Self::Square26 => 44,
            Self::Square32 => 62,
            Self::Square36 => 86,
            Self::Square40 => 114,
            Self::Square44 => 144,
            Self::Square48 => 174,
            Self::Square52 => 204,
            Self::Square64 => 280,
            Self::Square72 => 368,
            Self::Square80 => 456,
            Self::Square88 => 576,
            Self::Square96 => 696,
            Self::Square104 => 816,
            Self::Square120 => 1050,
            Self::Square132 => 1304,
            Self::Square144 => 1558,
            Self::Rect8x18 => 5,
            Self::Rect8x32 => 10,
            Self::Rect12x26 => 16,
            Self::Rect12x36 => 22,
            Self::Rect16x36 => 32,
            Self::Rect16x48 => 49,
        }
    }

    pub fn is_square(&self) -> bool {
        !RECT_SIZES.contains(self)
    }

    /// Width in modules, alignment patterns included.
    pub fn width(&self) -> usize {
        self.block_setup().width
    }

    /// Height in modules, alignment patterns included.
    pub fn height(&self) -> usize {
        self.block_setup().height
    }

    /// Number of data regions `(horizontal, vertical)`.
    pub fn data_regions(&self) -> (usize, usize) {
        let setup = self.block_setup();
        (setup.regions_x, setup.regions_y)
    }

    /// Number of interleaved error correction blocks.
    pub fn num_ecc_blocks(&self) -> usize {
        self.block_setup().num_ecc_blocks
    }

    /// Number of error correction codewords in each block.
    pub fn num_ecc_per_block(&self) -> usize {
        self.block_setup().num_ecc_per_block
    }

    #[rustfmt::skip]
    pub(crate) fn block_setup(&self) -> BlockSetup {
        match self {
            // width, height, regions x, regions y, ecc per block, blocks
            Self::Square10 => BlockSetup::new(10, 10, 1, 1, 5, 1),
            Self::Square12 => BlockSetup::new(12, 12, 1, 1, 7, 1),
            Self::Square14 => BlockSetup::new(14, 14, 1, 1, 10, 1),
            Self::Square16 => BlockSetup::new(16, 16, 1, 1, 12, 1),
            Self::Square18 => BlockSetup::new(18, 18, 1, 1, 14, 1),
            Self::Square20 => BlockSetup::new(20, 20, 1, 1, 18, 1),
            Self::Square22 => BlockSetup::new(22, 22, 1, 1, 20, 1),
            Self::Square24 => BlockSetup::new(24, 24, 1, 1, 24, 1),
            Self::Square26 => BlockSetup::new(26, 26, 1, 1, 28, 1),
            Self::Square32 => BlockSetup::new(32, 32, 2, 2, 36, 1),
            Self::Square36 => BlockSetup::new(36, 36, 2, 2, 42, 1),
            Self::Square40 => BlockSetup::new(40, 40, 2, 2, 48, 1),
            Self::Square44 => BlockSetup::new(44, 44, 2, 2, 56, 1),
            Self::Square48 => BlockSetup::new(48, 48, 2, 2, 68, 1),
            Self::Square52 => BlockSetup::new(52, 52, 2, 2, 42, 2),
            Self::Square64 => BlockSetup::new(64, 64, 4, 4, 56, 2),
            Self::Square72 => BlockSetup::new(72, 72, 4, 4, 36, 4),
            Self::Square80 => BlockSetup::new(80, 80, 4, 4, 48, 4),
            Self::Square88 => BlockSetup::new(88, 88, 4, 4, 56, 4),
            Self::Square96 => BlockSetup::new(96, 96, 4, 4, 68, 4),
            Self::Square104 => BlockSetup::new(104, 104, 4, 4, 56, 6),
            Self::Square120 => BlockSetup::new(120, 120, 6, 6, 68, 6),
            Self::Square132 => BlockSetup::new(132, 132, 6, 6, 62, 8),
            Self::Square144 => BlockSetup::new(144, 144, 6, 6, 62, 10),
            Self::Rect8x18 => BlockSetup::new(18, 8, 1, 1, 7, 1),
            Self::Rect8x32 => BlockSetup::new(32, 8, 2, 1, 11, 1),
            Self::Rect12x26 => BlockSetup::new(26, 12, 1, 1, 14, 1),
            Self::Rect12x36 => BlockSetup::new(36, 12, 2, 1, 18, 1),
            Self::Rect16x36 => BlockSetup::new(36, 16, 2, 1, 24, 1),
            Self::Rect16x48 => BlockSetup::new(48, 16, 2, 1, 28, 1),
        }
    }

    #[cfg(test)]
    pub(crate) fn num_codewords(&self) -> usize {
        self.num_data_codewords() + self.block_setup().num_error_codes()
    }

    /// The data area has four modules left which no codeword covers.
    pub(crate) fn has_padding_modules(&self) -> bool {
        matches!(
            self,
            Self::Square12 | Self::Square16 | Self::Square20 | Self::Square24
        )
    }
}

#[test]
fn test_iter_all_symbols() {
    let all: Vec<SymbolSize> = all::<SymbolSize>().collect();
    let mut expected: Vec<SymbolSize> = SQUARE_SIZES.into();
    expected.extend_from_slice(&RECT_SIZES);
    assert_eq!(all, expected);
}

#[test]
fn symbol_size_order() {
    for list in [&SQUARE_SIZES[..], &RECT_SIZES[..]] {
        for pair in list.windows(2) {
            assert!(pair[0].num_data_codewords() < pair[1].num_data_codewords());
        }
    }
}

#[test]
fn test_content_sizes_consistency() {
    for size in all::<SymbolSize>() {
        let setup = size.block_setup();
        let padding = if size.has_padding_modules() { 4 } else { 0 };
        let len = size.num_codewords() * 8 + padding;

        assert_eq!(len, setup.content_width() * setup.content_height(), "{:?}", size);
    }
}

#[test]
fn test_regions_evenly_sized() {
    for size in all::<SymbolSize>() {
        let setup = size.block_setup();
        assert_eq!(setup.content_width() % setup.regions_x, 0);
        assert_eq!(setup.content_height() % setup.regions_y, 0);
        assert_eq!(size.is_square(), setup.width == setup.height);
    }
}

#[test]
fn test_blocks_split_data_evenly() {
    // all blocks hold the same amount of data, except for 144x144
    for size in all::<SymbolSize>() {
        let blocks = size.num_ecc_blocks();
        let rest = size.num_data_codewords() % blocks;
        if size == SymbolSize::Square144 {
            assert_eq!(rest, 8);
        } else {
            assert_eq!(rest, 0, "{:?}", size);
        }
    }
}

#[test]
fn test_for_codewords_square() {
    assert_eq!(SymbolSize::for_codewords(0, false), Some(SymbolSize::Square10));
    assert_eq!(SymbolSize::for_codewords(3, false), Some(SymbolSize::Square10));
    assert_eq!(SymbolSize::for_codewords(4, false), Some(SymbolSize::Square12));
    assert_eq!(SymbolSize::for_codewords(1558, false), Some(SymbolSize::Square144));
    assert_eq!(SymbolSize::for_codewords(1559, false), None);
}

#[test]
fn test_for_codewords_rect() {
    assert_eq!(SymbolSize::for_codewords(5, true), Some(SymbolSize::Rect8x18));
    assert_eq!(SymbolSize::for_codewords(6, true), Some(SymbolSize::Rect8x32));
    assert_eq!(SymbolSize::for_codewords(49, true), Some(SymbolSize::Rect16x48));
}

#[test]
fn test_for_codewords_rect_falls_back_to_square() {
    assert_eq!(SymbolSize::for_codewords(50, true), Some(SymbolSize::Square32));
    assert_eq!(SymbolSize::for_codewords(1559, true), None);
}
