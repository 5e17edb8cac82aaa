//! Arrangement of bits in a Data Matrix symbol.
//!
//! The module contains the struct [MatrixMap] which walks over the bit
//! positions of each codeword in the final symbol, i.e., it decides how the
//! black squares are mapped to the encoded bytes.
//!
//! The walk is a diagonal sweep over the symbol without its finder patterns.
//! Codewords which would leave the area wrap around to the other side, and
//! four special corner layouts take over at fixed positions depending on
//! the symbol's dimensions.
//!
//! A [Bitmap] is the final output, the data with the finder patterns of
//! all data regions drawn around it.

/// Trait for a visitor to the symbol's bits.
///
/// A bit is called "module" in the Data Matrix standard. Each
/// codeword consists of eight bits (modules).
///
/// During traversal the visitor is asked for the bits of each codeword,
/// most significant bit first.
pub trait Visitor<B: Bit> {
    /// Return the bits of the codeword with the given index.
    fn visit(&mut self, codeword_index: usize) -> [B; 8];
}

/// Abstract "bit" type used in [MatrixMap].
pub trait Bit: Clone + PartialEq + core::fmt::Debug {
    const LOW: Self;
    const HIGH: Self;
}

impl Bit for bool {
    const LOW: bool = false;
    const HIGH: bool = true;
}

/// Special codeword layouts used at the borders.
///
/// The offsets are (row, column) pairs, a negative value counts from the
/// bottom or right border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    A,
    B,
    C,
    D,
}

impl Corner {
    /// Find the corner layout for the cursor position, if any.
    ///
    /// At most one of the conditions holds, they are checked in the
    /// order A to D.
    fn at(row: i16, col: i16, nrow: i16, ncol: i16) -> Option<Self> {
        if row == nrow && col == 0 {
            Some(Self::A)
        } else if row == nrow - 2 && col == 0 && ncol % 4 != 0 {
            Some(Self::B)
        } else if row == nrow - 2 && col == 0 && ncol % 8 == 4 {
            Some(Self::C)
        } else if row == nrow + 4 && col == 2 && ncol % 8 == 0 {
            Some(Self::D)
        } else {
            None
        }
    }

    #[rustfmt::skip]
    fn offsets(self) -> [(i16, i16); 8] {
        match self {
            Self::A => [(-1, 0), (-1, 1), (-1, 2), (0, -2), (0, -1), (1, -1), (2, -1), (3, -1)],
            Self::B => [(-3, 0), (-2, 0), (-1, 0), (0, -4), (0, -3), (0, -2), (0, -1), (1, -1)],
            Self::C => [(-3, 0), (-2, 0), (-1, 0), (0, -2), (0, -1), (1, -1), (2, -1), (3, -1)],
            Self::D => [(-1, 0), (-1, -1), (0, -3), (0, -2), (0, -1), (1, -3), (1, -2), (1, -1)],
        }
    }
}

/// Representation of the bits in a Data Matrix symbol without finder patterns.
pub struct MatrixMap<B: Bit> {
    entries: Vec<B>,
    visited: Vec<bool>,
    width: usize,
    height: usize,
    regions_x: usize,
    regions_y: usize,
    has_padding: bool,
}

impl<B: Bit> MatrixMap<B> {
    /// Create a new, empty matrix for the given symbol size.
    pub fn new(size: crate::SymbolSize) -> Self {
        let setup = size.block_setup();
        let w = setup.content_width();
        let h = setup.content_height();
        Self {
            entries: vec![B::LOW; w * h],
            visited: vec![false; w * h],
            width: w,
            height: h,
            regions_x: setup.regions_x,
            regions_y: setup.regions_y,
            has_padding: size.has_padding_modules(),
        }
    }

    /// Traverse the symbol in codeword order and write the bits the
    /// visitor returns.
    pub fn traverse<V: Visitor<B>>(&mut self, visitor: &mut V) {
        let nrow = self.height as i16;
        let ncol = self.width as i16;

        // starting in the correct location for first character, bit 8
        let mut i = 4;
        let mut j = 0;
        let mut codeword_idx = 0;

        loop {
            if let Some(corner) = Corner::at(i, j, nrow, ncol) {
                let indices = self.corner(corner);
                self.place(indices, visitor.visit(codeword_idx));
                codeword_idx += 1;
            }
            // sweep upward diagonally
            loop {
                if i < nrow && j >= 0 && !self.visited[(i * ncol + j) as usize] {
                    let indices = self.utah(i, j);
                    self.place(indices, visitor.visit(codeword_idx));
                    codeword_idx += 1;
                }
                i -= 2;
                j += 2;
                if !(i >= 0 && j < ncol) {
                    break;
                }
            }
            i += 1;
            j += 3;

            // sweep downward diagonally
            loop {
                if i >= 0 && j < ncol && !self.visited[(i * ncol + j) as usize] {
                    let indices = self.utah(i, j);
                    self.place(indices, visitor.visit(codeword_idx));
                    codeword_idx += 1;
                }
                i += 2;
                j -= 2;
                if !(i < nrow && j >= 0) {
                    break;
                }
            }
            i += 3;
            j += 1;

            // until entire map is traversed
            if !(i < nrow || j < ncol) {
                break;
            }
        }

        self.write_padding();
    }

    // The four modules in the lower right corner no codeword covers
    // get a fixed checkerboard.
    fn write_padding(&mut self) {
        if !self.has_padding {
            return;
        }
        let (h, w) = (self.height, self.width);
        self.entries[(h - 2) * w + (w - 2)] = B::HIGH;
        self.entries[(h - 1) * w + (w - 1)] = B::HIGH;
    }

    fn place(&mut self, indices: [usize; 8], bits: [B; 8]) {
        for (idx, bit) in indices.into_iter().zip(bits) {
            self.entries[idx] = bit;
            self.visited[idx] = true;
        }
    }

    // compute idx with wrapping
    fn idx(&self, mut i: i16, mut j: i16) -> usize {
        let h = self.height as i16;
        let w = self.width as i16;
        if i < 0 {
            i += h;
            j += 4 - ((h + 4) % 8);
        }
        if j < 0 {
            j += w;
            i += 4 - ((w + 4) % 8);
        }
        (i * w + j) as usize
    }

    // compute indices for utah-shaped symbol (the standard symbol)
    fn utah(&self, i: i16, j: i16) -> [usize; 8] {
        [
            self.idx(i - 2, j - 2),
            self.idx(i - 2, j - 1),
            self.idx(i - 1, j - 2),
            self.idx(i - 1, j - 1),
            self.idx(i - 1, j),
            self.idx(i, j - 2),
            self.idx(i, j - 1),
            self.idx(i, j),
        ]
    }

    fn corner(&self, corner: Corner) -> [usize; 8] {
        let h = self.height as i16;
        let w = self.width as i16;
        corner.offsets().map(|(i, j)| {
            let i = if i < 0 { h + i } else { i };
            let j = if j < 0 { w + j } else { j };
            (i * w + j) as usize
        })
    }

    /// Get the content of the matrix as a bitmap with finder patterns added.
    pub fn bitmap(&self) -> Bitmap<B> {
        let h = self.height + 2 * self.regions_y;
        let w = self.width + 2 * self.regions_x;
        let mut bits = vec![B::LOW; h * w];

        let idx = |i: usize, j: usize| i * w + j;

        // each region has a solid line left and bottom, and a dotted
        // line top and right
        let blk_h = self.height / self.regions_y;
        for r in 0..self.regions_y {
            let top = r * (blk_h + 2);
            let bottom = top + blk_h + 1;
            for j in 0..w {
                bits[idx(bottom, j)] = B::HIGH;
            }
            for j in (0..w).step_by(2) {
                bits[idx(top, j)] = B::HIGH;
            }
        }
        let blk_w = self.width / self.regions_x;
        for r in 0..self.regions_x {
            let left = r * (blk_w + 2);
            let right = left + blk_w + 1;
            for i in 0..h {
                bits[idx(i, left)] = B::HIGH;
            }
            for i in (0..h).filter(|i| (h - 1 - i) % 2 == 0) {
                bits[idx(i, right)] = B::HIGH;
            }
        }

        // copy the data
        for (b_i, b) in self.entries.iter().enumerate() {
            let mut i = b_i / self.width;
            i += 1 + (i / blk_h) * 2;
            let mut j = b_i % self.width;
            j += 1 + (j / blk_w) * 2;
            bits[idx(i, j)] = b.clone();
        }

        Bitmap { width: w, bits }
    }
}

/// An abstract bitmap.
///
/// Rows are stored from top to bottom. For rendering targets which use
/// something similar to pixels try [pixels()](Self::pixels).
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap<M> {
    width: usize,
    bits: Vec<M>,
}

impl<B: Bit> Bitmap<B> {
    /// Return the width of the bitmap (no quiet zone included).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the height of the bitmap (no quiet zone included).
    pub fn height(&self) -> usize {
        self.bits.len() / self.width
    }

    /// Module at column `x` and row `y`, `None` outside of the bitmap.
    pub fn get(&self, x: usize, y: usize) -> Option<&B> {
        if x >= self.width {
            return None;
        }
        self.bits.get(y * self.width + x)
    }

    /// Get an iterator over the "black" pixels' coordinates `(x, y)`.
    ///
    /// A black pixel refers to one of the tiny black squares a Data Matrix
    /// is usually made of. Depending on your target, such a pixel
    /// may be rendered using multiple image pixels, or whatever you use
    /// to visualize the Data Matrix.
    ///
    /// The coordinate system is centered in the top left corner starting
    /// in `(0, 0)` with a horizontal x-axis and vertical y-axis.
    /// The pixels are returned in order, incrementing x before y.
    ///
    /// A quiet zone is not included in the coordinates but one must
    /// be added when rendering: The minimum free space required around the
    /// Data Matrix has to have the width/height of one "black" pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width();
        self.bits
            .iter()
            .enumerate()
            .filter(|(_i, b)| **b == B::HIGH)
            .map(move |(i, _b)| (i % w, i / w))
    }
}

impl Bitmap<bool> {
    /// Rows as strings of '0' and '1', top to bottom.
    #[cfg(test)]
    pub(crate) fn rows(&self) -> Vec<String> {
        self.bits
            .chunks(self.width)
            .map(|row| row.iter().map(|b| if *b { '1' } else { '0' }).collect())
            .collect()
    }
}

#[cfg(test)]
use crate::SymbolSize;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
mod tests {
    impl super::Bit for (u16, u8) {
        const LOW: Self = (0, 0);
        const HIGH: Self = (0, 1);
    }

    /// Writes (codeword number, bit number), both counted from 1.
    struct LogVisitor;

    impl super::Visitor<(u16, u8)> for LogVisitor {
        fn visit(&mut self, cw: usize) -> [(u16, u8); 8] {
            core::array::from_fn(|i| ((cw + 1) as u16, (i + 1) as u8))
        }
    }

    pub fn log(s: super::SymbolSize) -> Vec<(u16, u8)> {
        let mut m = super::MatrixMap::<(u16, u8)>::new(s);
        m.traverse(&mut LogVisitor);
        m.entries
    }

    /// Sets all bits.
    pub struct Ones;

    impl super::Visitor<bool> for Ones {
        fn visit(&mut self, _cw: usize) -> [bool; 8] {
            [true; 8]
        }
    }
}

#[test]
fn test_12x12() {
    let log = tests::log(SymbolSize::Square12);
    #[rustfmt::skip]
    let should = [
        (2,1), (2,2), (3,6), (3,7), (3,8), (4,3), (4,4), (4,5), (1,1), (1,2),
        (2,3), (2,4), (2,5), (5,1), (5,2), (4,6), (4,7), (4,8), (1,3), (1,4),
        (2,6), (2,7), (2,8), (5,3), (5,4), (5,5), (10,1), (10,2), (1,6), (1,7),
        (1,5), (6,1), (6,2), (5,6), (5,7), (5,8), (10,3), (10,4), (10,5), (7,1),
        (1,8), (6,3), (6,4), (6,5), (9,1), (9,2), (10,6), (10,7), (10,8), (7,3),
        (7,2), (6,6), (6,7), (6,8), (9,3), (9,4), (9,5), (11,1), (11,2), (7,6),
        (7,4), (7,5), (8,1), (8,2), (9,6), (9,7), (9,8), (11,3), (11,4), (11,5),
        (7,7), (7,8), (8,3), (8,4), (8,5), (12,1), (12,2), (11,6), (11,7), (11,8),
        (3,1), (3,2), (8,6), (8,7), (8,8), (12,3), (12,4), (12,5), (0,1), (0,0),
        (3,3), (3,4), (3,5), (4,1), (4,2), (12,6), (12,7), (12,8), (0,0), (0,1)
    ];
    assert_eq!(&log, &should);
}

#[test]
fn test_10x10() {
    let log = tests::log(SymbolSize::Square10);
    #[rustfmt::skip]
    let should = [
        (2,1), (2,2), (3,6), (3,7), (3,8), (4,3), (4,4), (4,5),
        (2,3), (2,4), (2,5), (5,1), (5,2), (4,6), (4,7), (4,8),
        (2,6), (2,7), (2,8), (5,3), (5,4), (5,5), (1,1), (1,2),
        (1,5), (6,1), (6,2), (5,6), (5,7), (5,8), (1,3), (1,4),
        (1,8), (6,3), (6,4), (6,5), (8,1), (8,2), (1,6), (1,7),
        (7,2), (6,6), (6,7), (6,8), (8,3), (8,4), (8,5), (7,1),
        (7,4), (7,5), (3,1), (3,2), (8,6), (8,7), (8,8), (7,3),
        (7,7), (7,8), (3,3), (3,4), (3,5), (4,1), (4,2), (7,6),
    ];
    assert_eq!(&log, &should);
}

#[test]
fn test_8x32() {
    let log = tests::log(SymbolSize::Rect8x32);
    #[rustfmt::skip]
    let should = [
        (2,1), (2,2), (3,6), (3,7), (3,8), (4,3), (4,4), (4,5), (8,1), (8,2), (9,6), (9,7), (9,8), (10,3), (10,4), (10,5), (14,1), (14,2), (15,6), (15,7), (15,8), (16,3), (16,4), (16,5), (20,1), (20,2), (1,4), (1,5),
        (2,3), (2,4), (2,5), (5,1), (5,2), (4,6), (4,7), (4,8), (8,3), (8,4), (8,5), (11,1), (11,2), (10,6), (10,7), (10,8), (14,3), (14,4), (14,5), (17,1), (17,2), (16,6), (16,7), (16,8), (20,3), (20,4), (20,5), (1,6),
        (2,6), (2,7), (2,8), (5,3), (5,4), (5,5), (7,1), (7,2), (8,6), (8,7), (8,8), (11,3), (11,4), (11,5), (13,1), (13,2), (14,6), (14,7), (14,8), (17,3), (17,4), (17,5), (19,1), (19,2), (20,6), (20,7), (20,8), (1,7),
        (1,1), (6,1), (6,2), (5,6), (5,7), (5,8), (7,3), (7,4), (7,5), (12,1), (12,2), (11,6), (11,7), (11,8), (13,3), (13,4), (13,5), (18,1), (18,2), (17,6), (17,7), (17,8), (19,3), (19,4), (19,5), (21,1), (21,2), (1,8),
        (1,2), (6,3), (6,4), (6,5), (3,1), (3,2), (7,6), (7,7), (7,8), (12,3), (12,4), (12,5), (9,1), (9,2), (13,6), (13,7), (13,8), (18,3), (18,4), (18,5), (15,1), (15,2), (19,6), (19,7), (19,8), (21,3), (21,4), (21,5),
        (1,3), (6,6), (6,7), (6,8), (3,3), (3,4), (3,5), (4,1), (4,2), (12,6), (12,7), (12,8), (9,3), (9,4), (9,5), (10,1), (10,2), (18,6), (18,7), (18,8), (15,3), (15,4), (15,5), (16,1), (16,2), (21,6), (21,7), (21,8),
    ];
    assert_eq!(&log, &should);
}

#[test]
fn test_corner_selection() {
    // 10x10 without finder patterns is 8x8
    assert_eq!(Corner::at(8, 0, 8, 8), Some(Corner::A));
    assert_eq!(Corner::at(6, 0, 8, 8), None);
    assert_eq!(Corner::at(12, 2, 8, 8), Some(Corner::D));
    // 12x12: 10 columns
    assert_eq!(Corner::at(8, 0, 10, 10), Some(Corner::B));
    // 14x14: 12 columns
    assert_eq!(Corner::at(10, 0, 12, 12), Some(Corner::C));
    assert_eq!(Corner::at(4, 0, 12, 12), None);
}

#[test]
fn test_every_position_written_once() {
    use enum_iterator::all;

    for size in all::<SymbolSize>() {
        let log = tests::log(size);
        let num_codewords = size.num_codewords();
        let mut seen = vec![0u8; num_codewords * 8];
        let mut unused = 0;
        for (cw, bit) in log {
            if cw == 0 {
                unused += 1;
            } else {
                seen[(cw as usize - 1) * 8 + (bit as usize - 1)] += 1;
            }
        }
        assert!(seen.iter().all(|n| *n == 1), "{:?}", size);
        let expected = if size.has_padding_modules() { 4 } else { 0 };
        assert_eq!(unused, expected, "{:?}", size);
    }
}

#[test]
fn test_finder_patterns_32x32() {
    let mut map = MatrixMap::<bool>::new(SymbolSize::Square32);
    map.traverse(&mut tests::Ones);
    let bitmap = map.bitmap();
    assert_eq!(bitmap.width(), 32);
    assert_eq!(bitmap.height(), 32);
    let rows = bitmap.rows();
    // top border of both rows of regions
    assert_eq!(rows[0], "10".repeat(16));
    assert_eq!(rows[16], "10".repeat(16));
    // bottom border of both rows of regions
    assert_eq!(rows[15], "1".repeat(32));
    assert_eq!(rows[31], "1".repeat(32));
    // a data row crossing the vertical borders
    let mut inner = String::new();
    for _ in 0..2 {
        inner.push('1');
        inner.push_str(&"1".repeat(14));
        inner.push('0');
    }
    assert_eq!(rows[2], inner);
    assert_eq!(&rows[1][14..18], "1111");
}

#[test]
fn test_bitmap_get() {
    let map = MatrixMap::<bool>::new(SymbolSize::Rect8x18);
    let bitmap = map.bitmap();
    assert_eq!(bitmap.get(0, 0), Some(&true));
    assert_eq!(bitmap.get(1, 0), Some(&false));
    assert_eq!(bitmap.get(17, 7), Some(&true));
    assert_eq!(bitmap.get(18, 0), None);
    assert_eq!(bitmap.get(0, 8), None);
    assert_eq!(bitmap.pixels().next(), Some((0, 0)));
}
