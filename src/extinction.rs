//! Extinction evaluator.
//!
//! For a point on the colour-colour plane the evaluator
//! 1. finds the reference segments crossed by the reddening line
//!    (`nodes::locate_nodes`),
//! 2. builds the segment lines (`nodes::segment_coefficients`) and the
//!    reddening line `y = k*x + (p.y - k*p.x)`,
//! 3. intersects them to get the unreddened position `(x0, y0)`,
//! 4. reports `E(x) = x - x0`, `E(y) = y - y0` and `A = R * E(x)`.
//!
//! A star is evaluated at its nine uncertainty corners (see [`corners`]),
//! so it contributes between zero and `9 * crossings` records. Stars are
//! independent and evaluated in parallel; the sequence is only read.

use crate::geometry::{intersection_point, LineCoefficients};
use crate::nodes::{locate_nodes, segment_coefficients};
use crate::select::{select, SelectionMode};
use crate::sequence::ReferenceSequence;
use crate::types::{ColorPoint, ExtinctionRecord, Star, StarExtinction};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Extinction estimate for a single point and a single crossed segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointExtinction {
    pub observed: ColorPoint,
    pub intrinsic: ColorPoint,
    pub excess_x: f64,
    pub excess_y: f64,
    pub extinction: f64,
}

impl PointExtinction {
    pub fn into_record(self, star_id: i64) -> ExtinctionRecord {
        ExtinctionRecord {
            star_id,
            observed: self.observed,
            intrinsic: self.intrinsic,
            excess_x: self.excess_x,
            excess_y: self.excess_y,
            extinction: self.extinction,
        }
    }
}

/// The nine corner positions of a star: x in `{x, x-σx, x+σx}` (outer)
/// crossed with y in `{y, y-σy, y+σy}` (inner). The first corner is the
/// nominal position.
pub fn corners(star: &Star) -> [ColorPoint; 9] {
    let xs = [star.x, star.x - star.x_err, star.x + star.x_err];
    let ys = [star.y, star.y - star.y_err, star.y + star.y_err];
    std::array::from_fn(|i| ColorPoint::new(xs[i / 3], ys[i % 3]))
}

/// Extinction estimates for one point, one per crossed segment, in segment
/// order. Parallel segment/reddening pairs are skipped.
pub fn extinction_for_point(
    point: ColorPoint,
    sequence: &ReferenceSequence,
    reddening_slope: f64,
    r_param: f64,
) -> Vec<PointExtinction> {
    let nodes = locate_nodes(point, sequence, reddening_slope);
    if nodes.is_empty() {
        return Vec::new();
    }
    let reddening = LineCoefficients::with_slope_through(reddening_slope, point);
    segment_coefficients(sequence, &nodes)
        .iter()
        .filter_map(|segment| {
            // y0 is taken on the reddening line.
            let intrinsic = intersection_point(&reddening, segment)?;
            let excess_x = point.x - intrinsic.x;
            let excess_y = point.y - intrinsic.y;
            Some(PointExtinction {
                observed: point,
                intrinsic,
                excess_x,
                excess_y,
                extinction: r_param * excess_x,
            })
        })
        .collect()
}

/// Reddening parameters shared by every star of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluator {
    /// Slope of the reddening line, E(y)/E(x); 0.72 for E(U-B)/E(B-V).
    pub reddening_slope: f64,
    /// Total-to-selective extinction ratio A/E(x); 3.1 for Av/E(B-V).
    pub r_param: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            reddening_slope: 0.72,
            r_param: 3.1,
        }
    }
}

impl Evaluator {
    pub fn new(reddening_slope: f64, r_param: f64) -> Self {
        Self {
            reddening_slope,
            r_param,
        }
    }

    pub fn evaluate_point(
        &self,
        point: ColorPoint,
        sequence: &ReferenceSequence,
    ) -> Vec<PointExtinction> {
        extinction_for_point(point, sequence, self.reddening_slope, self.r_param)
    }

    /// All records of one star in generation order (corner, then segment).
    pub fn evaluate_star(&self, star: &Star, sequence: &ReferenceSequence) -> StarExtinction {
        let records: Vec<ExtinctionRecord> = corners(star)
            .into_iter()
            .flat_map(|corner| self.evaluate_point(corner, sequence))
            .map(|estimate| estimate.into_record(star.id))
            .collect();
        if records.is_empty() {
            debug!(
                "star {}: reddening line misses the sequence at every corner",
                star.id
            );
        }
        StarExtinction {
            star_id: star.id,
            records,
        }
    }

    /// Evaluates every star in parallel. The output keeps the input order.
    pub fn evaluate_stars(
        &self,
        stars: &[Star],
        sequence: &ReferenceSequence,
    ) -> Vec<StarExtinction> {
        let groups: Vec<StarExtinction> = stars
            .par_iter()
            .map(|star| self.evaluate_star(star, sequence))
            .collect();
        let records: usize = groups.iter().map(|g| g.records.len()).sum();
        let matched = groups.iter().filter(|g| !g.is_empty()).count();
        debug!(
            "evaluated {} stars against {} reference points: {} with crossings, {} records",
            stars.len(),
            sequence.len(),
            matched,
            records
        );
        groups
    }

    /// Evaluate and reduce in one go.
    pub fn run(
        &self,
        stars: &[Star],
        sequence: &ReferenceSequence,
        mode: SelectionMode,
    ) -> Vec<ExtinctionRecord> {
        let groups = self.evaluate_stars(stars, sequence);
        select(&groups, mode)
    }
}
