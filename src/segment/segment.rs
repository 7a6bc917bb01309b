//! Immutable pixel groups with memoized band statistics
//!
//! A segment is either a leaf wrapping one pixel or the concatenation of two
//! existing segments (first, then second). Membership never changes after
//! construction, so the standard deviations are computed at most once.
//!
//! Equality is structural: same length and the same coordinates in the same
//! order. A fingerprint of the coordinate sequence is combined in constant
//! time at merge and checked first, so comparing two different segments does
//! not walk their pixels.

use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use crate::io::error::Result;
use crate::math::statistics::BandMoments;
use crate::segment::pixel::{Pixel, transpose_bands};
use crate::spatial::coordinate::Coordinate;

const FINGERPRINT_BASE: u64 = 0x0000_0100_0000_01b3;

/// Order-sensitive polynomial hash of a coordinate sequence
///
/// `hash(a ++ b) = hash(a) * base^len(b) + hash(b)`, so `power` carries
/// `base^len` alongside the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    hash: u64,
    power: u64,
}

impl Fingerprint {
    const fn leaf(coordinate: Coordinate) -> Self {
        let key = ((coordinate.y as u64) << 32) | coordinate.x as u64;
        Self {
            hash: mix(key),
            power: FINGERPRINT_BASE,
        }
    }

    const fn concat(self, other: Self) -> Self {
        Self {
            hash: self.hash.wrapping_mul(other.power).wrapping_add(other.hash),
            power: self.power.wrapping_mul(other.power),
        }
    }
}

// splitmix64 finalizer
const fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Group of pixels treated as one unit for merge-cost purposes
#[derive(Debug, Clone)]
pub struct Segment {
    pixels: Vec<Coordinate>,
    moments: BandMoments,
    fingerprint: Fingerprint,
    std_devs: OnceCell<Vec<f64>>,
}

impl Segment {
    /// Leaf segment holding a single pixel
    ///
    /// # Errors
    ///
    /// Returns a construction error if the pixel has no band data
    pub fn from_pixel(pixel: &Pixel) -> Result<Self> {
        let columns = transpose_bands(std::slice::from_ref(pixel))?;
        let moments = BandMoments::from_band_columns(&columns)?;

        Ok(Self {
            pixels: vec![pixel.coordinate()],
            moments,
            fingerprint: Fingerprint::leaf(pixel.coordinate()),
            std_devs: OnceCell::new(),
        })
    }

    /// Segment holding the pixels of `first` followed by those of `second`
    ///
    /// # Errors
    ///
    /// Returns a construction error if the two segments have different band
    /// counts
    pub fn merged(first: &Self, second: &Self) -> Result<Self> {
        let moments = first.moments.combine(&second.moments)?;

        let mut pixels = Vec::with_capacity(first.len() + second.len());
        pixels.extend_from_slice(&first.pixels);
        pixels.extend_from_slice(&second.pixels);

        Ok(Self {
            pixels,
            moments,
            fingerprint: first.fingerprint.concat(second.fingerprint),
            std_devs: OnceCell::new(),
        })
    }

    /// Member coordinates in stored order
    pub fn pixels(&self) -> &[Coordinate] {
        &self.pixels
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed segment
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Number of colour bands
    pub const fn band_count(&self) -> usize {
        self.moments.band_count()
    }

    /// Accumulated band moments of all member pixels
    pub const fn moments(&self) -> &BandMoments {
        &self.moments
    }

    /// Check whether the pixel at `coordinate` belongs to this segment
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.pixels.contains(&coordinate)
    }

    /// Population standard deviation of each band, computed once and cached
    pub fn standard_deviations(&self) -> &[f64] {
        self.std_devs
            .get_or_init(|| self.moments.population_std_devs())
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.pixels.len() == other.pixels.len()
            && self.fingerprint == other.fingerprint
            && self.pixels == other.pixels
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash.hash(state);
        self.pixels.len().hash(state);
    }
}
