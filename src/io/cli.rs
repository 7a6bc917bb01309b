//! Command-line interface for segmenting single images or whole directories

use crate::algorithm::executor::{Segmentor, SegmentorConfig};
use crate::io::configuration::{
    DEFAULT_EXPONENT, DEFAULT_THRESHOLD, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::Result;
use crate::io::image::BandRaster;
use crate::io::progress::ProgressManager;
use crate::io::visualization::{export_overlay, render_size_table};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "regiongrow")]
#[command(
    author,
    version,
    about = "Segment the top-left 2^N x 2^N tile of an image by greedy region growing"
)]
/// Command-line arguments for the segmentation tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile exponent: the tile is 2^N pixels on each side
    #[arg(short = 'n', long, default_value_t = DEFAULT_EXPONENT)]
    pub exponent: u32,

    /// Merge-cost ceiling; higher values give fewer, larger segments
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Output path for the boundary overlay (single-file targets only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abort if the segmentation has not converged after this many passes
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Print a table of segment sizes for each processed tile
    #[arg(short, long)]
    pub sizes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Segmentation parameters selected on the command line
    pub const fn segmentor_config(&self) -> SegmentorConfig {
        SegmentorConfig {
            exponent: self.exponent,
            threshold: self.threshold,
            max_passes: self.max_passes,
        }
    }
}

/// Orchestrates batch segmentation of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, segmentation or export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.segmentor_config().validate()?;

        if self.cli.output.is_some() && !self.cli.target.is_file() {
            return Err(crate::io::error::io_error(
                "--output requires a single image file as target",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG, TIFF or BMP image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for the optional segment size table
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);
        let config = self.cli.segmentor_config();
        let pixel_count = config.size() * config.size();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, pixel_count.saturating_sub(1));
        }

        let raster = BandRaster::from_path(input_path)?;
        let mut segmentor = Segmentor::new(&raster, config)?;

        while segmentor.execute_pass()? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_pass(index, segmentor.passes(), segmentor.merges());
            }
        }

        let segmentation = segmentor.into_segmentation();
        export_overlay(&raster, &segmentation, &output_path)?;

        if self.cli.sizes {
            println!("{}", input_path.display());
            println!("{}", render_size_table(&segmentation)?);
        }

        info!(
            "{}: {} segments after {} passes in {:.2?}, overlay written to {}",
            input_path.display(),
            segmentation.segment_count(),
            segmentation.passes(),
            start_time.elapsed(),
            output_path.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path))
    }

    /// Default overlay path: `<stem>_segmented.<ext>` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
