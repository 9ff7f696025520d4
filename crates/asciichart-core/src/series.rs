// File: crates/asciichart-core/src/series.rs
// Summary: Series model: an ordered run of (x, y) samples drawn as one connected line.

use crate::scale::Extent;
use crate::types::Sample;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// Samples in drawing order; consecutive samples are connected.
    pub data: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_data(data: Vec<Sample>) -> Self {
        Self { data }
    }

    /// Largest x and y in this series; `(1, 1)` when empty.
    pub fn extent(&self) -> Extent { Extent::of(&self.data) }
}

impl From<Vec<Sample>> for Series {
    fn from(data: Vec<Sample>) -> Self {
        Self::with_data(data)
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::with_data(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_series() {
        let s = Series::with_data(vec![(1.0, 5.0), (4.0, -2.0), (3.0, 9.0)]);
        assert_eq!(s.extent(), Extent::new(4.0, 9.0));
        assert_eq!(Series::new().extent(), Extent::new(1.0, 1.0));
    }

    #[test]
    fn collects_from_samples() {
        let s: Series = (0..3).map(|i| (i as f64, 1.0)).collect();
        assert_eq!(s.data, vec![(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
    }
}
