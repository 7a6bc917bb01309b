//! Bit-interleaved visitation order over a `2^N x 2^N` tile
//!
//! Index `i` is bit-reversed over `2N` bits, the odd bits of the result give
//! `x`, and the even bits XOR `x` give `y`. Consecutive indices land far apart
//! in the tile, so early growth attempts are spread evenly instead of sweeping
//! row by row.

use crate::io::configuration::MAX_EXPONENT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::coordinate::Coordinate;

/// Restartable source of the dither order for a fixed tile exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherSequencer {
    exponent: u32,
}

impl DitherSequencer {
    /// Sequencer for a tile of side `2^exponent`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the exponent exceeds `MAX_EXPONENT`
    pub fn new(exponent: u32) -> Result<Self> {
        if exponent > MAX_EXPONENT {
            return Err(invalid_parameter(
                "exponent",
                &exponent,
                &format!("must be at most {MAX_EXPONENT}"),
            ));
        }
        Ok(Self { exponent })
    }

    /// Tile exponent
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Side length of the tile
    pub const fn size(&self) -> usize {
        1 << self.exponent
    }

    /// Start a fresh pass over every coordinate
    pub const fn iter(&self) -> DitherIter {
        DitherIter {
            bit_length: 2 * self.exponent,
            next: 0,
            total: 1 << (2 * self.exponent),
        }
    }

    /// Coordinate visited at position `index` of the sequence
    pub const fn coordinate_at(&self, index: usize) -> Coordinate {
        dither_coordinate(index, 2 * self.exponent)
    }
}

impl IntoIterator for &DitherSequencer {
    type Item = Coordinate;
    type IntoIter = DitherIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass of the dither order
#[derive(Debug, Clone)]
pub struct DitherIter {
    bit_length: u32,
    next: usize,
    total: usize,
}

impl Iterator for DitherIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }

        let coordinate = dither_coordinate(self.next, self.bit_length);
        self.next += 1;
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DitherIter {}

const fn dither_coordinate(index: usize, bit_length: u32) -> Coordinate {
    let reversed = reverse_bits(index, bit_length);
    let x = odd_bits(reversed);
    let y = x ^ even_bits(reversed);
    Coordinate::new(x, y)
}

/// Reverse the low `length` bits of `value`
const fn reverse_bits(value: usize, length: u32) -> usize {
    let mut reversed = 0;
    let mut i = 0;
    while i < length {
        if value & (1 << i) != 0 {
            reversed |= 1 << (length - i - 1);
        }
        i += 1;
    }
    reversed
}

/// Collect bits 0, 2, 4, ... of `value` into a dense integer
const fn even_bits(value: usize) -> usize {
    deinterleave(value)
}

/// Collect bits 1, 3, 5, ... of `value` into a dense integer
const fn odd_bits(value: usize) -> usize {
    deinterleave(value >> 1)
}

const fn deinterleave(value: usize) -> usize {
    let mut result = 0;
    let mut i = 0;
    while 2 * i < usize::BITS {
        if value & (1 << (2 * i)) != 0 {
            result |= 1 << i;
        }
        i += 1;
    }
    result
}
