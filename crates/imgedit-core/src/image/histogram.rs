//! Histogram generation for images
//!
//! Counts the distribution of channel values over the whole image. The
//! four channels are counted independently.

use super::Image;
use crate::color::CHANNELS;

/// Number of levels per 8-bit channel
pub const LEVELS: usize = 256;

/// Per-channel histograms and their cumulative distributions
///
/// Indexed as `counts[channel][level]` with channel indices from
/// [`crate::color`]. Built fresh per call; nothing is cached on the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Occurrences of each level, per channel
    pub counts: [[u64; LEVELS]; CHANNELS],
    /// Running sum of `counts` up to and including each level, per channel
    pub cumulative: [[u64; LEVELS]; CHANNELS],
}

impl Histogram {
    /// Total number of samples counted per channel.
    pub fn pixel_count(&self) -> u64 {
        self.cumulative[0][LEVELS - 1]
    }

    fn from_counts(counts: [[u64; LEVELS]; CHANNELS]) -> Self {
        let mut cumulative = [[0u64; LEVELS]; CHANNELS];
        for (cum, count) in cumulative.iter_mut().zip(counts.iter()) {
            let mut running = 0u64;
            for (c, &n) in cum.iter_mut().zip(count.iter()) {
                running += n;
                *c = running;
            }
        }
        Histogram { counts, cumulative }
    }
}

impl Image {
    /// Compute the per-channel histogram of the image.
    ///
    /// # Example
    ///
    /// ```
    /// use imgedit_core::Image;
    ///
    /// let image = Image::filled(4, 4, [255, 10, 20, 30]).unwrap();
    /// let hist = image.histogram();
    /// assert_eq!(hist.counts[1][10], 16);
    /// assert_eq!(hist.pixel_count(), 16);
    /// ```
    pub fn histogram(&self) -> Histogram {
        let mut counts = [[0u64; LEVELS]; CHANNELS];
        for pixel in self.data().chunks_exact(CHANNELS) {
            for (channel, &value) in pixel.iter().enumerate() {
                counts[channel][value as usize] += 1;
            }
        }
        Histogram::from_counts(counts)
    }
}
