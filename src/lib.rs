#![doc = include_str!("../README.md")]

// Engine
pub mod extinction;
pub mod geometry;
pub mod nodes;
pub mod select;
pub mod sequence;
pub mod types;

// Loading, reporting, configuration
pub mod config;
pub mod error;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{UnredError, UnredResult};
pub use crate::extinction::{corners, extinction_for_point, Evaluator, PointExtinction};
pub use crate::geometry::{evaluate, intersect, slope, y_intercept, LineCoefficients};
pub use crate::nodes::{locate_nodes, segment_coefficients};
pub use crate::select::{select, SelectionMode};
pub use crate::sequence::ReferenceSequence;
pub use crate::types::{ColorPoint, ExtinctionRecord, Star, StarExtinction};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for scripts and tests.
pub mod prelude {
    pub use crate::{
        ColorPoint, Evaluator, ExtinctionRecord, ReferenceSequence, SelectionMode, Star,
        StarExtinction,
    };
}
