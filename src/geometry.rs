//! Line primitives on the colour-colour plane.
//!
//! Lines are kept in slope/intercept form `y = slope * x + intercept`, which
//! is all the reddening geometry needs: the reddening line never runs
//! vertically and the reference segments are validated to have distinct x.
//! Intersections go through the homogeneous form `slope*x - y + intercept = 0`
//! so the parallel case shows up as a vanishing third component instead of a
//! division by zero.

use crate::types::ColorPoint;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-12;

/// Coefficients of `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineCoefficients {
    pub slope: f64,
    pub intercept: f64,
}

impl LineCoefficients {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line with the given slope passing through `point`.
    pub fn with_slope_through(slope: f64, point: ColorPoint) -> Self {
        Self {
            slope,
            intercept: y_intercept(slope, point),
        }
    }

    /// Line through two points; the slope is taken from `from` to `to` and
    /// the intercept is evaluated at `to`.
    pub fn through(from: ColorPoint, to: ColorPoint) -> Self {
        Self::with_slope_through(slope(from, to), to)
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(self, x)
    }

    /// Homogeneous line vector `[a, b, c]` with `a*x + b*y + c = 0`.
    fn homogeneous(&self) -> Vector3<f64> {
        Vector3::new(self.slope, -1.0, self.intercept)
    }
}

/// Slope of the line from `p1` to `p2`. Equal x coordinates give an infinite
/// or NaN slope, never a panic.
#[inline]
pub fn slope(p1: ColorPoint, p2: ColorPoint) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

#[inline]
pub fn y_intercept(slope: f64, point: ColorPoint) -> f64 {
    point.y - slope * point.x
}

#[inline]
pub fn evaluate(coeffs: &LineCoefficients, x: f64) -> f64 {
    coeffs.slope * x + coeffs.intercept
}

/// x coordinate where two lines cross, i.e. the root of
/// `evaluate(a, x) - evaluate(b, x)`, which is
/// `(b.intercept - a.intercept) / (a.slope - b.slope)`.
///
/// Returns `None` for parallel lines and for non-finite input.
pub fn intersect(a: &LineCoefficients, b: &LineCoefficients) -> Option<f64> {
    let p = a.homogeneous().cross(&b.homogeneous());
    let w = p[2];
    if !w.is_finite() || w.abs() <= EPS {
        return None;
    }
    let x = p[0] / w;
    x.is_finite().then_some(x)
}

/// Intersection point of two lines, evaluated on `a`.
pub fn intersection_point(a: &LineCoefficients, b: &LineCoefficients) -> Option<ColorPoint> {
    intersect(a, b).map(|x| ColorPoint::new(x, a.evaluate(x)))
}
