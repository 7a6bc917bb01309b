//! Growth engine: initial pixel segments, dither-ordered passes, merges

use crate::{
    algorithm::{segmentation::Segmentation, selection::best_neighbors},
    io::configuration::{DEFAULT_EXPONENT, DEFAULT_THRESHOLD, MAX_EXPONENT},
    io::error::{AlgorithmError, Result, construction_error, invalid_parameter},
    io::image::ColorSource,
    segment::{
        arena::{SegmentArena, SegmentId},
        pixel::Pixel,
        segment::Segment,
    },
    spatial::{coordinate::Coordinate, dither::DitherSequencer, grid::SegmentationGrid},
};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Parameters of a segmentation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentorConfig {
    /// Tile exponent; the tile is the top-left `2^exponent` square of the source
    pub exponent: u32,
    /// Largest merge cost a neighbour may have and still be merged
    pub threshold: f64,
    /// Upper bound on growth passes (defaults to the tile's pixel count)
    pub max_passes: Option<usize>,
}

impl Default for SegmentorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXPONENT, DEFAULT_THRESHOLD)
    }
}

impl SegmentorConfig {
    /// Configuration with the default pass bound
    pub const fn new(exponent: u32, threshold: f64) -> Self {
        Self {
            exponent,
            threshold,
            max_passes: None,
        }
    }

    /// Override the pass bound
    #[must_use]
    pub const fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Side length of the tile
    pub const fn size(&self) -> usize {
        1 << self.exponent
    }

    /// Number of passes after which a still-merging run is reported as
    /// non-convergent
    ///
    /// Every pass that changes anything merges at least once, and a tile of
    /// `n` pixels allows at most `n - 1` merges, so `n` passes always suffice.
    pub const fn pass_limit(&self) -> usize {
        match self.max_passes {
            Some(limit) => limit,
            None => self.size() * self.size(),
        }
    }

    /// Check the parameters before any work is done
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the exponent exceeds `MAX_EXPONENT`, the
    /// threshold is negative or not finite, or the pass bound is zero
    pub fn validate(&self) -> Result<()> {
        if self.exponent > MAX_EXPONENT {
            return Err(invalid_parameter(
                "exponent",
                &self.exponent,
                &format!("must be at most {MAX_EXPONENT}"),
            ));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must be a finite, non-negative number",
            ));
        }
        if self.max_passes == Some(0) {
            return Err(invalid_parameter(
                "max_passes",
                &0,
                &"at least one pass is required",
            ));
        }
        Ok(())
    }
}

/// Greedy region-growing engine for one tile
///
/// Starts with one segment per pixel. Each pass visits the tile in dither
/// order and tries to grow the segment owning each coordinate by merging it
/// with a mutually optimal neighbour. Passes repeat until one merges nothing.
pub struct Segmentor {
    config: SegmentorConfig,
    grid: SegmentationGrid,
    arena: SegmentArena,
    dither: DitherSequencer,
    passes: usize,
    merges: usize,
    walk_steps: usize,
    converged: bool,
}

impl Segmentor {
    /// Build the initial one-pixel-per-segment grid from a colour source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The source is smaller than the tile or has no bands
    /// - A pixel's band data is missing or inconsistent with the source
    pub fn new<S: ColorSource + ?Sized>(source: &S, config: SegmentorConfig) -> Result<Self> {
        config.validate()?;

        let size = config.size();
        let (width, height) = source.dimensions();
        if width < size || height < size {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("{width}x{height} image is smaller than the {size}x{size} tile"),
            });
        }

        let band_count = source.band_count();
        if band_count == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "source has no colour bands".to_string(),
            });
        }

        let mut arena = SegmentArena::with_capacity(2 * size * size);
        let mut owners = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let coordinate = Coordinate::new(x, y);
                let pixel = Pixel::new(coordinate, source.color_bands(coordinate)?)?;
                if pixel.band_count() != band_count {
                    return Err(construction_error(&format!(
                        "pixel {coordinate} has {} bands, source reports {band_count}",
                        pixel.band_count()
                    )));
                }
                owners.push(arena.insert(Segment::from_pixel(&pixel)?));
            }
        }

        Ok(Self {
            config,
            grid: SegmentationGrid::from_row_major(size, owners)?,
            arena,
            dither: DitherSequencer::new(config.exponent)?,
            passes: 0,
            merges: 0,
            walk_steps: 0,
            converged: false,
        })
    }

    /// Run configuration
    pub const fn config(&self) -> &SegmentorConfig {
        &self.config
    }

    /// Current ownership grid
    pub const fn grid(&self) -> &SegmentationGrid {
        &self.grid
    }

    /// Current segments
    pub const fn arena(&self) -> &SegmentArena {
        &self.arena
    }

    /// Passes executed so far
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Merges performed so far
    pub const fn merges(&self) -> usize {
        self.merges
    }

    /// Subject changes made by growth walks so far
    pub const fn walk_steps(&self) -> usize {
        self.walk_steps
    }

    /// Number of live segments
    pub fn segment_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Whether a pass has completed without merging anything
    pub const fn is_converged(&self) -> bool {
        self.converged
    }

    /// Attempt to grow the segment owning every coordinate, in dither order
    ///
    /// Returns whether any merge happened. Once a pass merges nothing the
    /// segmentation has reached its fixpoint and further calls return `false`
    /// without doing work.
    ///
    /// # Errors
    ///
    /// Returns `NonConvergence` if a pass still merged after the configured
    /// pass limit, or propagates internal consistency errors
    pub fn execute_pass(&mut self) -> Result<bool> {
        if self.converged {
            return Ok(false);
        }

        let merges_before = self.merges;
        let steps_before = self.walk_steps;
        let mut changed = false;
        for coordinate in self.dither.iter() {
            let owner = self.grid.owner(coordinate)?;
            changed |= self.try_grow(owner)?;
        }
        self.passes += 1;

        debug!(
            "pass {}: {} merges, {} walk steps, {} segments left",
            self.passes,
            self.merges - merges_before,
            self.walk_steps - steps_before,
            self.segment_count()
        );

        if !changed {
            self.converged = true;
            info!(
                "converged after {} passes: {} segments from {} pixels",
                self.passes,
                self.segment_count(),
                self.config.size() * self.config.size()
            );
        } else if self.passes >= self.config.pass_limit() {
            return Err(AlgorithmError::NonConvergence {
                passes: self.passes,
                segments: self.segment_count(),
            });
        }

        Ok(changed)
    }

    /// Run passes until the fixpoint
    ///
    /// # Errors
    ///
    /// Propagates errors from `execute_pass`
    pub fn run(&mut self) -> Result<()> {
        while self.execute_pass()? {}
        Ok(())
    }

    /// Hand the converged state to collaborators
    pub fn into_segmentation(self) -> Segmentation {
        Segmentation::new(self.grid, self.arena, self.passes, self.merges)
    }

    /// One growth attempt starting at `start`
    ///
    /// Walks towards better-connected segments until the subject has a
    /// mutually optimal neighbour, then merges the pair. Among tied mutual
    /// neighbours the walk takes at most one step before merging, and subjects
    /// visited in this attempt are remembered so the walk always terminates.
    fn try_grow(&mut self, start: SegmentId) -> Result<bool> {
        let threshold = self.config.threshold;
        let mut subject = start;
        let mut visited = HashSet::new();
        let mut crossed_tie = false;

        loop {
            visited.insert(subject);

            let best = best_neighbors(&self.grid, &self.arena, subject, threshold)?;
            let Some(&first_best) = best.first() else {
                return Ok(false);
            };

            let mut mutual = Vec::new();
            for &candidate in &best {
                let reciprocal = best_neighbors(&self.grid, &self.arena, candidate, threshold)?;
                if reciprocal.contains(&subject)
                    && !self.arena.structurally_equal(subject, candidate)?
                {
                    mutual.push(candidate);
                }
            }

            match mutual.as_slice() {
                [] => {
                    // The best cost strictly drops along this step
                    if visited.contains(&first_best) {
                        warn!("growth walk from {start} returned to {first_best}");
                        return Ok(false);
                    }
                    subject = first_best;
                    self.walk_steps += 1;
                }
                [partner] => {
                    self.merge(subject, *partner)?;
                    return Ok(true);
                }
                [first, ..] => {
                    if let Some(&seen) = mutual.iter().find(|id| visited.contains(*id)) {
                        self.merge(subject, seen)?;
                        return Ok(true);
                    }
                    if crossed_tie {
                        self.merge(subject, *first)?;
                        return Ok(true);
                    }
                    crossed_tie = true;
                    subject = *first;
                    self.walk_steps += 1;
                }
            }
        }
    }

    /// Replace `first` and `second` by their union
    fn merge(&mut self, first: SegmentId, second: SegmentId) -> Result<SegmentId> {
        let combined = Segment::merged(self.arena.get(first)?, self.arena.get(second)?)?;
        let id = self.arena.insert(combined);

        for &pixel in self.arena.get(id)?.pixels() {
            self.grid.assign(pixel, id)?;
        }
        self.arena.retire(first)?;
        self.arena.retire(second)?;
        self.merges += 1;

        Ok(id)
    }
}

/// Segment the top-left `2^exponent` tile of `source`
///
/// # Errors
///
/// Returns an error if the configuration or source is invalid, or the run
/// fails to converge within the pass limit
pub fn segment_image<S: ColorSource + ?Sized>(
    source: &S,
    config: SegmentorConfig,
) -> Result<Segmentation> {
    let mut segmentor = Segmentor::new(source, config)?;
    segmentor.run()?;
    Ok(segmentor.into_segmentation())
}
