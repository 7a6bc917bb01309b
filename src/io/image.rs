//! Colour sources: per-pixel band samples for the tile being segmented

use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

use crate::io::configuration::RGB_BAND_COUNT;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::coordinate::Coordinate;

/// Supplier of per-pixel colour bands
///
/// Must answer every coordinate of the tile the engine segments, with the same
/// number of bands for every pixel.
pub trait ColorSource {
    /// Number of bands returned for each pixel
    fn band_count(&self) -> usize;

    /// Image dimensions as `(width, height)`
    fn dimensions(&self) -> (usize, usize);

    /// Band samples of the pixel at `coordinate`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the image
    fn color_bands(&self, coordinate: Coordinate) -> Result<Vec<u8>>;
}

/// In-memory raster of band samples indexed by `(y, x, band)`
#[derive(Debug, Clone)]
pub struct BandRaster {
    samples: Array3<u8>,
}

impl BandRaster {
    /// Wrap a `(height, width, band)` sample array
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the array has no bands
    pub fn from_samples(samples: Array3<u8>) -> Result<Self> {
        if samples.dim().2 == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "raster has no colour bands".to_string(),
            });
        }
        Ok(Self { samples })
    }

    /// Build a raster from row-major, band-interleaved samples
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the sample count does not match the
    /// dimensions or there are no bands
    pub fn from_vec(width: usize, height: usize, bands: usize, data: Vec<u8>) -> Result<Self> {
        let count = data.len();
        let samples = Array3::from_shape_vec((height, width, bands), data).map_err(|e| {
            AlgorithmError::InvalidSourceData {
                reason: format!("{count} samples do not fit {width}x{height}x{bands}: {e}"),
            }
        })?;
        Self::from_samples(samples)
    }

    /// Copy the red, green and blue bands of a decoded image
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let samples = Array3::from_shape_fn((height, width, RGB_BAND_COUNT), |(y, x, band)| {
            image
                .get_pixel_checked(x as u32, y as u32)
                .and_then(|pixel| pixel.0.get(band).copied())
                .unwrap_or(0)
        });
        Self { samples }
    }

    /// Decode an image file and keep its RGB bands
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if the file cannot be opened or decoded
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let decoded = image::open(&path_buf).map_err(|e| AlgorithmError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Ok(Self::from_rgb_image(&decoded.to_rgb8()))
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.samples.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.samples.dim().0
    }

    /// Underlying `(y, x, band)` samples
    pub const fn samples(&self) -> &Array3<u8> {
        &self.samples
    }

    /// Display colour of a pixel; single-band rasters are shown as grey
    pub fn rgb_at(&self, coordinate: Coordinate) -> Option<[u8; 3]> {
        let band = |b: usize| self.samples.get([coordinate.y, coordinate.x, b]).copied();
        let first = band(0)?;
        if self.band_count() >= RGB_BAND_COUNT {
            Some([first, band(1)?, band(2)?])
        } else {
            Some([first, first, first])
        }
    }
}

impl ColorSource for BandRaster {
    fn band_count(&self) -> usize {
        self.samples.dim().2
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn color_bands(&self, coordinate: Coordinate) -> Result<Vec<u8>> {
        (0..self.band_count())
            .map(|band| self.samples.get([coordinate.y, coordinate.x, band]).copied())
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| AlgorithmError::InvalidSourceData {
                reason: format!(
                    "pixel {coordinate} is outside the {}x{} raster",
                    self.width(),
                    self.height()
                ),
            })
    }
}
