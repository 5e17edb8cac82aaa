//! This module contains the implementation of the GF(256) arithmetic used by
//! the Reed-Solomon codes in Data Matrix.
//!
//! An element of GF(256) is stored as an u8. Its bits are the coefficients
//! of a polynomial of degree at most 7, the least significant bit being the
//! coefficient for 1. Addition is the XOR of the bits, multiplication is
//! done modulo the polynomial 301 (0x12D) chosen by Data Matrix.
//!
//! With this choice x generates all nonzero elements, so every a != 0 is
//! x^i for some i. Multiplication then reduces to adding exponents, using
//! the lookup tables LOG and ANTI_LOG.
use core::ops::{Add, AddAssign, Mul, MulAssign};

/// Compute two lookup tables for GF(256).
const fn compute_alog_log() -> ([u8; 255], [u8; 256]) {
    let mut alog = [0u8; 255];
    let mut log = [0u8; 256];
    let mut p: u16 = 1; // polynomial representation
    let mut i: u8 = 0; // power
    while i < 255 {
        alog[i as usize] = p as u8;
        log[p as usize] = i;

        // x is primitive for 0x12D, doubling walks through all powers
        p *= 2;
        if p >= 256 {
            p ^= 0x12D;
        }

        i += 1;
    }
    (alog, log)
}

/// Lookup table to convert element from GF(256) represented as power i of
/// a generator a to a polynomial of degree 7.
const ANTI_LOG: [u8; 255] = compute_alog_log().0;

/// Lookup table to convert an element from GF(256) represented as a degree 7 polynomial
/// to a power i for a generator a.
const LOG: [u8; 256] = compute_alog_log().1;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GF(pub u8);

impl GF {
    pub fn primitive_power(i: usize) -> Self {
        GF(ANTI_LOG[i % 255])
    }
}

impl core::fmt::Debug for GF {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!("{}₂₅₆", self.0))
    }
}

impl Add<GF> for GF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        GF(self.0 ^ rhs.0)
    }
}

impl AddAssign<GF> for GF {
    fn add_assign(&mut self, rhs: GF) {
        *self = *self + rhs;
    }
}

impl Mul<GF> for GF {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.0 == 0 || rhs.0 == 0 {
            return GF(0);
        }
        let ia = LOG[self.0 as usize];
        let ib = LOG[rhs.0 as usize];
        let i = (ia as u16 + ib as u16) % 255;
        GF(ANTI_LOG[i as usize])
    }
}

impl MulAssign<GF> for GF {
    fn mul_assign(&mut self, rhs: GF) {
        *self = *self * rhs;
    }
}

impl From<GF> for u8 {
    fn from(a: GF) -> u8 {
        a.0
    }
}

impl From<u8> for GF {
    fn from(i: u8) -> Self {
        GF(i)
    }
}

/// Compute the generator polynomial (x + a)(x + a^2)...(x + a^degree).
///
/// The coefficients are returned highest power first, so the first
/// entry is always 1.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut g = vec![GF(0); degree + 1];
    g[0] = GF(1);
    for root in 1..=degree {
        let a = GF::primitive_power(root);
        // multiply by (x + a), g has degree root - 1 at this point
        for j in (1..=root).rev() {
            let prev = g[j - 1];
            g[j] += prev * a;
        }
    }
    g.into_iter().map(u8::from).collect()
}

/// Evaluate a polynomial (highest power first) with Horner's method.
#[cfg(test)]
pub fn eval_polynomial(coefficients: &[u8], x: GF) -> GF {
    coefficients
        .iter()
        .fold(GF(0), |acc, c| acc * x + GF(*c))
}

#[test]
fn sanity_check_tables() {
    use std::collections::HashSet;

    let anti_log: HashSet<u8> = ANTI_LOG.iter().cloned().collect();
    assert_eq!(anti_log.len(), ANTI_LOG.len());

    let log: HashSet<u8> = LOG[1..].iter().cloned().collect();
    assert_eq!(log.len(), LOG.len() - 1);

    for i in 0..255 {
        assert_eq!(i, LOG[ANTI_LOG[i] as usize] as usize);
        assert_eq!(i + 1, ANTI_LOG[LOG[i + 1] as usize] as usize);
    }
}

#[test]
fn gf256_mul() {
    assert_eq!(GF(123) * GF(1), GF(123));
    assert_eq!(GF(234) * GF(0), GF(0));
    assert_eq!(GF(0) * GF(23), GF(0));
    assert_eq!(GF(2) * GF(4) * GF(8) * GF(16) * GF(32), GF(228));
}

#[test]
fn test_primitive_power() {
    let mut a = GF(1);
    for i in 0..500 {
        assert_eq!(GF::primitive_power(i), a);
        a *= GF(2);
    }
}

#[test]
fn test_generator_polynomials() {
    assert_eq!(generator_polynomial(5), vec![1, 62, 111, 15, 48, 228]);
    assert_eq!(generator_polynomial(7), vec![1, 254, 92, 240, 134, 144, 68, 23]);
    assert_eq!(
        generator_polynomial(10),
        vec![1, 61, 110, 255, 116, 248, 223, 166, 185, 24, 28]
    );
    assert_eq!(
        generator_polynomial(18),
        vec![1, 188, 90, 48, 225, 254, 94, 129, 109, 213, 241, 61, 66, 75, 188, 39, 100, 195, 83]
    );
}

#[test]
fn test_generator_roots() {
    for degree in [5, 28, 62, 68] {
        let g = generator_polynomial(degree);
        for i in 1..=degree {
            assert_eq!(eval_polynomial(&g, GF::primitive_power(i)), GF(0));
        }
        assert_ne!(eval_polynomial(&g, GF::primitive_power(degree + 1)), GF(0));
    }
}
