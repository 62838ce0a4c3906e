//! Frame file naming
//!
//! Frame `i` of a run is written as `{prefix}_{i}.png` with `i` zero-padded
//! to `max(3, digits(count - 1))`. Every name in a run has the same width,
//! so sorting names lexicographically sorts frames temporally whatever the
//! frame count.

use pillowmap_core::constants::output::MIN_FRAME_INDEX_DIGITS;

/// Extension of frame files
pub const FRAME_EXTENSION: &str = "png";

/// Naming scheme for the frames of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    prefix: String,
    digits: usize,
}

impl FrameNaming {
    /// Scheme for a run producing `count` frames
    pub fn for_count(prefix: impl Into<String>, count: usize) -> Self {
        let digits = decimal_digits(count.saturating_sub(1)).max(MIN_FRAME_INDEX_DIGITS);
        Self {
            prefix: prefix.into(),
            digits,
        }
    }

    /// Width of the zero-padded index
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Zero-padded index, e.g. `007`
    pub fn label(&self, index: usize) -> String {
        format!("{:0width$}", index, width = self.digits)
    }

    /// File name of frame `index`, e.g. `heatmap_007.png`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}_{}.{}", self.prefix, self.label(index), FRAME_EXTENSION)
    }
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_runs_use_three_digits() {
        let naming = FrameNaming::for_count("heatmap", 12);
        assert_eq!(naming.file_name(0), "heatmap_000.png");
        assert_eq!(naming.file_name(11), "heatmap_011.png");
        assert_eq!(naming.label(7), "007");
    }

    #[test]
    fn width_grows_past_one_thousand_frames() {
        assert_eq!(FrameNaming::for_count("h", 1000).digits(), 3);
        assert_eq!(FrameNaming::for_count("h", 1001).digits(), 4);
        assert_eq!(FrameNaming::for_count("h", 100_001).digits(), 6);

        let naming = FrameNaming::for_count("heatmap", 1001);
        assert_eq!(naming.file_name(7), "heatmap_0007.png");
        assert_eq!(naming.file_name(1000), "heatmap_1000.png");
    }

    #[test]
    fn empty_run_still_has_minimum_width() {
        assert_eq!(FrameNaming::for_count("h", 0).digits(), 3);
    }

    #[test]
    fn lexicographic_order_is_temporal() {
        let naming = FrameNaming::for_count("heatmap", 2500);
        let names: Vec<String> = (0..2500).map(|i| naming.file_name(i)).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    proptest::proptest! {
        #[test]
        fn names_sort_like_indices(count in 2usize..2_000_000, a in 0usize..2_000_000, b in 0usize..2_000_000) {
            let (a, b) = (a % count, b % count);
            let naming = FrameNaming::for_count("heatmap", count);
            proptest::prop_assert_eq!(naming.file_name(a).cmp(&naming.file_name(b)), a.cmp(&b));
        }
    }
}
