//! Reed-Solomon error correction codes.
//!
//! The error correction in a Data Matrix is done using Reed-Solomon codes
//! over GF(256). The data codewords, read as the coefficients of a
//! polynomial, are divided by a generator polynomial and the remainder
//! is appended to them. A reader can then detect and fix damaged codewords.
//!
//! Bigger symbols split the data into several interleaved blocks, each
//! with its own error code.
mod galois;

use super::symbol_size::SymbolSize;
use galois::GF;

#[cfg(test)]
use pretty_assertions::assert_eq;

/// Compute the Reed-Solomon code used by Data Matrix for error correction.
///
/// Depending on the symbol size, the data is first split up into
/// interleaved blocks. For each block an error code is computed.
/// The resulting blocks of error codes are returned interleaved.
pub fn encode_error(data: &[u8], size: SymbolSize) -> Vec<u8> {
    let setup = size.block_setup();
    debug_assert_eq!(data.len(), size.num_data_codewords());
    let gen = galois::generator_polynomial(setup.num_ecc_per_block);
    // Codeword i belongs to block i % stride, both for the data and
    // the error codes.
    let stride = setup.num_ecc_blocks;
    let mut ecc = vec![0; setup.num_ecc_per_block + 1];
    let mut full_ecc = vec![0; setup.num_error_codes()];
    for block in 0..stride {
        ecc.fill(0);
        let strided_data_input = data.iter().skip(block).step_by(stride).cloned();
        ecc_block(strided_data_input, &gen, &mut ecc);

        // copy block interleaved to result vector
        for (result, ecc_i) in full_ecc
            .iter_mut()
            .skip(block)
            .step_by(stride)
            .zip(&ecc[..setup.num_ecc_per_block])
        {
            *result = *ecc_i;
        }
    }
    tracing::trace!(blocks = stride, per_block = setup.num_ecc_per_block, "error code computed");
    full_ecc
}

fn ecc_block<T: Iterator<Item = u8>>(data: T, g: &[u8], ecc: &mut [u8]) {
    // Let d be the data polynomial (n coefficients) and g the generator
    // with k + 1 coefficients. Long division of d(x) * x^k by g gives
    //
    //     d(x) * x^k = q(x) g(x) + r(x),
    //
    // and the error code is -r(x) = r(x). Only the remainder is tracked,
    // in the first k entries of ecc. The last entry stays zero.
    let ecc_len = g.len() - 1;
    for a in data {
        let k = GF(ecc[0]) + GF(a);
        for j in 0..ecc_len {
            ecc[j] = (GF(ecc[j + 1]) + k * GF(g[j + 1])).into();
        }
    }
}

#[test]
fn ecc_block_1() {
    let data = [23, 40, 11];
    let g = galois::generator_polynomial(5);
    let mut ecc = vec![0; 5 + 1];
    ecc_block(data.iter().cloned(), &g, &mut ecc);
    assert_eq!(ecc[..5], vec![255, 207, 37, 244, 81]);
}

#[test]
fn test_ecc_square12() {
    // "TEST" with padding
    let ecc = encode_error(&[85, 70, 84, 85, 129], SymbolSize::Square12);
    assert_eq!(ecc, vec![125, 231, 139, 243, 125, 208, 115]);
}

#[test]
fn test_ecc_rect8x18() {
    let ecc = encode_error(b"Ifmmp", SymbolSize::Rect8x18);
    assert_eq!(ecc, vec![243, 55, 99, 199, 231, 27, 37]);
}

#[test]
fn test_blocks_are_codewords() {
    // every block followed by its error code must vanish at the
    // roots of the generator polynomial
    for size in [SymbolSize::Square52, SymbolSize::Square144] {
        let setup = size.block_setup();
        let data: Vec<u8> = (0..size.num_data_codewords())
            .map(|i| (i * 7 + 3) as u8)
            .collect();
        let ecc = encode_error(&data, size);
        assert_eq!(ecc.len(), setup.num_error_codes());
        for block in 0..setup.num_ecc_blocks {
            let codeword: Vec<u8> = data
                .iter()
                .skip(block)
                .step_by(setup.num_ecc_blocks)
                .chain(ecc.iter().skip(block).step_by(setup.num_ecc_blocks))
                .cloned()
                .collect();
            for i in 1..=setup.num_ecc_per_block {
                let x = GF::primitive_power(i);
                assert_eq!(galois::eval_polynomial(&codeword, x), GF(0));
            }
        }
    }
}
