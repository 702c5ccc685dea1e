//! Node search: which reference segments does a reddening line cross?
//!
//! For a point `p` and reddening slope `k`, segment `i` (nodes `s[i]`,
//! `s[i+1]`) is crossed when the slopes from `p` to the two nodes straddle
//! `k`, i.e. `(slope(p, s[i]) - k) * (slope(p, s[i+1]) - k) < 0`.
//!
//! Only nodes blue-ward of the point are considered (`p.x > s[i].x`):
//! reddening moves a star towards larger x, so a node at or red-ward of the
//! point cannot be its unreddened position. Ties are excluded. A NaN
//! differential (point coincides with a node) never straddles.

use crate::geometry::{slope, LineCoefficients};
use crate::sequence::ReferenceSequence;
use crate::types::ColorPoint;

/// Indices of the segments crossed by the reddening line through `point`,
/// in ascending order. Empty when there is no crossing.
pub fn locate_nodes(
    point: ColorPoint,
    sequence: &ReferenceSequence,
    reddening_slope: f64,
) -> Vec<usize> {
    sequence
        .segments()
        .filter(|&(_, start, end)| {
            if point.x <= start.x {
                return false;
            }
            let d1 = slope(point, start) - reddening_slope;
            let d2 = slope(point, end) - reddening_slope;
            d1 * d2 < 0.0
        })
        .map(|(i, _, _)| i)
        .collect()
}

/// Line coefficients of the given segments, one per index and in the same
/// order. Each line runs from `s[i+1]` to `s[i]`.
pub fn segment_coefficients(
    sequence: &ReferenceSequence,
    indices: &[usize],
) -> Vec<LineCoefficients> {
    indices
        .iter()
        .filter_map(|&i| sequence.segment(i))
        .map(|(start, end)| LineCoefficients::through(end, start))
        .collect()
}
