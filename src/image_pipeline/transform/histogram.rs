use tracing::debug;

use crate::image_pipeline::grid::{PixelGrid, Rgb};

const BUCKETS: usize = 256;

/// 256-bucket intensity histogram of a pixel grid.
///
/// Intensity is the standard luma weighting
/// `floor(0.299*r + 0.587*g + 0.114*b)`, so bucket assignment is
/// bit-compatible with any implementation using the same weights.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [u64; BUCKETS],
}

impl Histogram {
    /// Buckets every pixel of `grid` by intensity.
    pub fn of(grid: &PixelGrid) -> Self {
        let mut counts = [0u64; BUCKETS];
        for px in grid.pixels() {
            counts[intensity(px) as usize] += 1;
        }
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Total number of bucketed pixels, equal to `width * height` of
    /// the source grid.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The intensity at which the cumulative count first reaches half
    /// of all pixels, floored at 1.
    ///
    /// Walks buckets from 0 upward and stops at the first index whose
    /// running sum is `>= total/2`, which biases ties toward the lower
    /// intensity. The floor keeps the pivot usable as a logarithm
    /// base downstream.
    pub fn optimal_pivot(&self) -> u32 {
        let total = self.total();
        let mut cumulative = 0u64;
        let mut pivot = 0u32;
        for (i, &count) in self.counts.iter().enumerate() {
            cumulative += count;
            if cumulative * 2 >= total {
                pivot = i as u32;
                break;
            }
        }
        debug!("Optimal pivot from histogram: {}", pivot.max(1));
        pivot.max(1)
    }
}

/// Luma intensity of one pixel, clamped to `0..=255`.
fn intensity(px: Rgb) -> u8 {
    let luma = 0.299 * px.r as f64 + 0.587 * px.g as f64 + 0.114 * px.b as f64;
    (luma as usize).min(255) as u8
}
