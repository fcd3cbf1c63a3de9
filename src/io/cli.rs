//! Command-line interface for rendering a tile set to a directory

use crate::analysis::regions::TileSummary;
use crate::combinatorics::necklace::parse_alphabet;
use crate::io::configuration::{
    DEFAULT_ALPHABET, DEFAULT_ROTATION_DEGREES, DEFAULT_SUPERSAMPLE, DEFAULT_TILE_SIZE,
    TILE_NAME_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::{ensure_directory, export_tile_as_png};
use crate::io::progress::ProgressManager;
use crate::render::palette::Palette;
use crate::tileset::builder::{RenderConfig, TileJob, TileSetBuilder};
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gamutile")]
#[command(
    author,
    version,
    about = "Render every rotation-distinct gamutile face plus the shared back"
)]
/// Command-line arguments for the tile renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory the PNG tiles are written to
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output: PathBuf,

    /// Edge labels to combine; each must have a palette entry
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Finished tile width in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: u32,

    /// Oversampling factor used while drawing
    #[arg(short = 'S', long, default_value_t = DEFAULT_SUPERSAMPLE)]
    pub supersample: u32,

    /// Counter-clockwise rotation of finished tiles, in quarter turns of 90
    #[arg(short, long, default_value_t = DEFAULT_ROTATION_DEGREES, allow_negative_numbers = true)]
    pub rotate: i32,

    /// Prefix of every tile file name
    #[arg(long, default_value = TILE_NAME_PREFIX)]
    pub prefix: String,

    /// Render tiles on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite tiles that already exist
    #[arg(short, long)]
    pub no_skip: bool,

    /// Print the colour coverage of every written tile
    #[arg(long)]
    pub analysis: bool,
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

    /// Render settings taken from the arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            tile_size: self.size,
            supersample: self.supersample,
            rotation_degrees: self.rotate,
            prefix: self.prefix.clone(),
        }
    }
}

/// Renders and writes a tile set according to CLI arguments
pub struct TileSetProcessor {
    cli: Cli,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl TileSetProcessor {
    /// Create a processor drawing with the full game palette
    pub fn new(cli: Cli) -> Self {
        Self::with_palette(cli, Palette::gamut())
    }

    /// Create a processor drawing with a custom palette
    pub fn with_palette(cli: Cli, palette: Palette) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            palette,
            progress_manager,
        }
    }

    /// Render and write every tile, returning the paths written
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the output directory
    /// cannot be created, or any tile fails to render or save
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let builder = TileSetBuilder::new(self.palette.clone(), self.cli.render_config())?;
        let alphabet = parse_alphabet(&self.cli.alphabet);
        let jobs = builder.jobs(&alphabet)?;
        ensure_directory(&self.cli.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut pending = Vec::with_capacity(jobs.len());
        for job in jobs {
            if self.should_render(&job) {
                pending.push(job);
            } else if let Some(ref pm) = self.progress_manager {
                pm.skip_tile(&job.name(&self.cli.prefix));
            }
        }

        // Each tile is exported and reported as soon as it renders
        let written = if self.cli.parallel {
            pending
                .par_iter()
                .map(|job| self.render_and_write(&builder, job))
                .collect::<Result<Vec<_>>>()?
        } else {
            pending
                .iter()
                .map(|job| self.render_and_write(&builder, job))
                .collect::<Result<Vec<_>>>()?
        };

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Progress of the last run, if progress is shown
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    // Allow print for the per-tile analysis report
    #[allow(clippy::print_stderr)]
    fn render_and_write(&self, builder: &TileSetBuilder, job: &TileJob) -> Result<PathBuf> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_tile(&job.name(&self.cli.prefix));
        }

        let tile = builder.render(job)?;
        let path = export_tile_as_png(&tile, &self.cli.output)?;

        if self.cli.analysis {
            eprintln!("{}", TileSummary::of(&tile, &self.palette.fill_colors()));
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_tile(&tile.name, start_time.elapsed());
        }

        Ok(path)
    }

    fn should_render(&self, job: &TileJob) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(&self.cli.output, job, &self.cli.prefix);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn output_path(directory: &Path, job: &TileJob, prefix: &str) -> PathBuf {
        directory.join(job.file_name(prefix))
    }
}
