//! Progress display for tile set rendering
//!
//! Updates take `&self` so rayon workers can report tiles as they finish.

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over all tiles of a set
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    rendered: AtomicUsize,
    skipped: AtomicUsize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            rendered: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
        }
    }

    /// Show a bar sized for `tile_count` tiles
    pub fn initialize(&mut self, tile_count: usize) {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        self.bar = Some(bar);
        self.rendered = AtomicUsize::new(0);
        self.skipped = AtomicUsize::new(0);
    }

    /// Announce the tile about to be rendered
    pub fn start_tile(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Mark a tile as written
    pub fn complete_tile(&self, name: &str, elapsed: Duration) {
        self.rendered.fetch_add(1, Ordering::Relaxed);
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("✓ {name} ({}ms)", elapsed.as_millis()));
            bar.inc(1);
        }
    }

    /// Mark a tile as left untouched
    pub fn skip_tile(&self, name: &str) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("skipped {name}"));
            bar.inc(1);
        }
    }

    /// Tiles completed since the last initialisation
    pub fn rendered(&self) -> usize {
        self.rendered.load(Ordering::Relaxed)
    }

    /// Tiles skipped since the last initialisation
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Bar position, if a bar is shown
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Close the bar with a final tally
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "{} rendered, {} skipped",
                self.rendered(),
                self.skipped()
            ));
        }
    }
}
