use serde::{Deserialize, Serialize};

/// Position on the colour-colour plane (x colour index, y colour index).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPoint {
    pub x: f64,
    pub y: f64,
}

impl ColorPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for ColorPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Observed (reddened) star with its colour uncertainties.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Star {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub x_err: f64,
    pub y_err: f64,
}

impl Star {
    pub fn position(&self) -> ColorPoint {
        ColorPoint::new(self.x, self.y)
    }
}

/// One extinction estimate: a star (or one of its uncertainty corners)
/// projected along the reddening line onto one segment of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExtinctionRecord {
    pub star_id: i64,
    /// Observed colours used for this estimate.
    pub observed: ColorPoint,
    /// Intersection with the unreddened sequence.
    pub intrinsic: ColorPoint,
    /// E(x) = observed.x - intrinsic.x
    pub excess_x: f64,
    /// E(y) = observed.y - intrinsic.y
    pub excess_y: f64,
    /// A = R * E(x)
    pub extinction: f64,
}

/// All records generated for a single star, in generation order
/// (corner, then matched segment).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StarExtinction {
    pub star_id: i64,
    pub records: Vec<ExtinctionRecord>,
}

impl StarExtinction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
