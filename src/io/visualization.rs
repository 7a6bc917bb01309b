//! Boundary overlays and segment-size tables for a finished segmentation

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::algorithm::segmentation::Segmentation;
use crate::io::configuration::BOUNDARY_COLOR;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::BandRaster;
use crate::spatial::coordinate::Coordinate;

/// Check whether a pixel is drawn as part of a boundary
///
/// The tile border always is. Inside the tile a pixel is a boundary pixel when
/// its segment differs from the segment to its left or above it.
///
/// # Errors
///
/// Returns `CoordinateOutOfBounds` if the coordinate is outside the tile
pub fn is_boundary(segmentation: &Segmentation, coordinate: Coordinate) -> Result<bool> {
    let size = segmentation.size();
    let Coordinate { x, y } = coordinate;

    if !coordinate.is_within(size) {
        return Err(AlgorithmError::CoordinateOutOfBounds { x, y, size });
    }
    if x == 0 || y == 0 || x + 1 == size || y + 1 == size {
        return Ok(true);
    }

    let left = Coordinate::new(x - 1, y);
    let above = Coordinate::new(x, y - 1);
    Ok(!segmentation.same_segment(coordinate, left)?
        || !segmentation.same_segment(coordinate, above)?)
}

/// Redraw the tile with segment boundaries painted in `BOUNDARY_COLOR`
///
/// # Errors
///
/// Returns an error if the raster is smaller than the segmented tile
pub fn overlay_segmentation(raster: &BandRaster, segmentation: &Segmentation) -> Result<RgbImage> {
    let size = segmentation.size();
    let side = u32::try_from(size)
        .map_err(|e| invalid_parameter("size", &size, &e))?;

    let mut overlay = RgbImage::new(side, side);
    for y in 0..size {
        for x in 0..size {
            let coordinate = Coordinate::new(x, y);
            let color = if is_boundary(segmentation, coordinate)? {
                BOUNDARY_COLOR
            } else {
                raster
                    .rgb_at(coordinate)
                    .ok_or_else(|| AlgorithmError::InvalidSourceData {
                        reason: format!("raster does not cover tile pixel {coordinate}"),
                    })?
            };
            overlay.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    Ok(overlay)
}

/// Write the boundary overlay to `output_path`, format chosen by extension
///
/// # Errors
///
/// Returns an error if:
/// - The overlay cannot be built
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn export_overlay(
    raster: &BandRaster,
    segmentation: &Segmentation,
    output_path: &Path,
) -> Result<()> {
    let overlay = overlay_segmentation(raster, segmentation)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    overlay
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Text table with the pixel count of the owning segment at every coordinate
///
/// The header row lists x indices; each following row starts with its y index.
///
/// # Errors
///
/// Returns an error if the segmentation grid is inconsistent
pub fn render_size_table(segmentation: &Segmentation) -> Result<String> {
    let size = segmentation.size();
    let width = (size * size).to_string().len().max(size.to_string().len());
    let header: Vec<String> = (0..size).map(|x| format!("{x:>width$}")).collect();
    let mut lines = vec![
        format!("{:>width$} | {}", "", header.join(" ")),
        "-".repeat((width + 1) * (size + 1) + 1),
    ];

    for y in 0..size {
        let cells = (0..size)
            .map(|x| {
                let pixels = segmentation.segment_at(Coordinate::new(x, y))?.len();
                Ok(format!("{pixels:>width$}"))
            })
            .collect::<Result<Vec<String>>>()?;
        lines.push(format!("{y:>width$} | {}", cells.join(" ")));
    }

    let mut table = lines.join("\n");
    table.push('\n');
    Ok(table)
}
