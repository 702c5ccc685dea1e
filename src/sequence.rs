//! Unreddened reference sequence.
//!
//! An ordered track of intrinsic colours (ordered by temperature, either
//! direction). Consecutive points define the piecewise-linear segments the
//! reddening line is intersected with. The x coordinate is not required to
//! be monotonic: real dwarf sequences turn over in U-B, which is exactly why
//! a reddening line may cross the track more than once.

use crate::error::{UnredError, UnredResult};
use crate::types::ColorPoint;
use serde::Serialize;

/// Validated reference sequence: at least two points, all finite, and no
/// zero-width segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferenceSequence {
    points: Vec<ColorPoint>,
}

impl ReferenceSequence {
    pub fn new(points: Vec<ColorPoint>) -> UnredResult<Self> {
        if points.len() < 2 {
            return Err(UnredError::MalformedInput(format!(
                "reference sequence needs at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(UnredError::MalformedInput(format!(
                "reference point {idx} is not finite"
            )));
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].x == pair[1].x {
                return Err(UnredError::DegenerateGeometry {
                    index,
                    x: pair[0].x,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated sequence; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of segments (`len - 1`).
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Endpoints of segment `index`, if it exists.
    pub fn segment(&self, index: usize) -> Option<(ColorPoint, ColorPoint)> {
        let start = *self.points.get(index)?;
        let end = *self.points.get(index + 1)?;
        Some((start, end))
    }

    /// Iterator over `(index, start, end)` for every segment.
    pub fn segments(&self) -> impl Iterator<Item = (usize, ColorPoint, ColorPoint)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i, w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<ColorPoint> {
        raw.iter().copied().map(ColorPoint::from).collect()
    }

    #[test]
    fn accepts_two_points() {
        let seq = ReferenceSequence::new(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.segment_count(), 1);
        assert!(!seq.is_empty());
    }

    #[test]
    fn rejects_short_sequence() {
        let err = ReferenceSequence::new(pts(&[(0.0, 0.0)])).unwrap_err();
        assert!(matches!(err, UnredError::MalformedInput(_)));
        let err = ReferenceSequence::new(Vec::new()).unwrap_err();
        assert!(matches!(err, UnredError::MalformedInput(_)));
    }

    #[test]
    fn rejects_zero_width_segment() {
        let err = ReferenceSequence::new(pts(&[(0.0, 0.0), (0.5, 0.2), (0.5, 0.7)])).unwrap_err();
        match err {
            UnredError::DegenerateGeometry { index, x } => {
                assert_eq!(index, 1);
                assert_eq!(x, 0.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn allows_repeated_x_on_non_adjacent_points() {
        // Turnover: x goes back to an earlier value further down the track.
        let seq = ReferenceSequence::new(pts(&[(0.0, 0.0), (0.5, 0.3), (0.0, 0.6)]));
        assert!(seq.is_ok());
    }

    #[test]
    fn rejects_non_finite_points() {
        let err = ReferenceSequence::new(pts(&[(0.0, 0.0), (f64::NAN, 1.0)])).unwrap_err();
        assert!(matches!(err, UnredError::MalformedInput(_)));
    }

    #[test]
    fn segments_iterate_in_order() {
        let seq = ReferenceSequence::new(pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)])).unwrap();
        let idx: Vec<usize> = seq.segments().map(|(i, _, _)| i).collect();
        assert_eq!(idx, vec![0, 1]);
        assert_eq!(
            seq.segment(1),
            Some((ColorPoint::new(1.0, 1.0), ColorPoint::new(2.0, 0.5)))
        );
        assert_eq!(seq.segment(2), None);
    }
}
