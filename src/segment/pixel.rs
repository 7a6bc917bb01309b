//! Pixels: a tile coordinate plus its colour-band samples

use std::hash::{Hash, Hasher};

use crate::io::error::{Result, construction_error};
use crate::spatial::coordinate::Coordinate;

/// Colour samples of one tile position
///
/// Two pixels are equal when they sit at the same coordinate; the band values
/// do not take part in equality.
#[derive(Debug, Clone)]
pub struct Pixel {
    coordinate: Coordinate,
    bands: Vec<u8>,
}

impl Pixel {
    /// Create a pixel from its coordinate and band samples
    ///
    /// # Errors
    ///
    /// Returns a construction error if `bands` is empty
    pub fn new(coordinate: Coordinate, bands: Vec<u8>) -> Result<Self> {
        if bands.is_empty() {
            return Err(construction_error(&format!(
                "pixel at {coordinate} has no band data"
            )));
        }
        Ok(Self { coordinate, bands })
    }

    /// Position in the tile
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Band samples in source order (e.g. red, green, blue)
    pub fn bands(&self) -> &[u8] {
        &self.bands
    }

    /// Number of colour bands
    pub const fn band_count(&self) -> usize {
        self.bands.len()
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate.x == other.coordinate.x && self.coordinate.y == other.coordinate.y
    }
}

impl Eq for Pixel {}

impl Hash for Pixel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

/// Regroup pixel samples band-major: `result[band][pixel]`
///
/// # Errors
///
/// Returns a construction error if `pixels` is empty or the pixels disagree on
/// their band count
pub fn transpose_bands(pixels: &[Pixel]) -> Result<Vec<Vec<u8>>> {
    let Some(first) = pixels.first() else {
        return Err(construction_error(&"cannot transpose an empty pixel sequence"));
    };
    let band_count = first.band_count();

    if let Some(odd) = pixels.iter().find(|p| p.band_count() != band_count) {
        return Err(construction_error(&format!(
            "pixel at {} has {} bands, expected {band_count}",
            odd.coordinate(),
            odd.band_count()
        )));
    }

    Ok((0..band_count)
        .map(|band| {
            pixels
                .iter()
                .filter_map(|pixel| pixel.bands().get(band).copied())
                .collect()
        })
        .collect())
}
