//! Reduction of per-star candidates into the reported set.
//!
//! `Minimum`/`Maximum` pick one record per star with a strict comparison
//! fold, so the first record in generation order wins ties. Stars without
//! records are dropped in every mode.

use crate::types::{ExtinctionRecord, StarExtinction};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every record of every star.
    #[default]
    All,
    /// Smallest extinction per star.
    #[serde(alias = "min")]
    #[value(alias = "min")]
    Minimum,
    /// Largest extinction per star.
    #[serde(alias = "max")]
    #[value(alias = "max")]
    Maximum,
}

impl SelectionMode {
    pub fn from_flags(min: bool, max: bool) -> Option<Self> {
        match (min, max) {
            (true, true) => None,
            (true, false) => Some(Self::Minimum),
            (false, true) => Some(Self::Maximum),
            (false, false) => Some(Self::All),
        }
    }
}

/// Reduce grouped records. Output follows the star order of `groups`.
pub fn select(groups: &[StarExtinction], mode: SelectionMode) -> Vec<ExtinctionRecord> {
    match mode {
        SelectionMode::All => groups
            .iter()
            .flat_map(|g| g.records.iter().copied())
            .collect(),
        SelectionMode::Minimum => groups
            .iter()
            .filter_map(|g| pick(&g.records, |candidate, best| candidate < best))
            .collect(),
        SelectionMode::Maximum => groups
            .iter()
            .filter_map(|g| pick(&g.records, |candidate, best| candidate > best))
            .collect(),
    }
}

fn pick(
    records: &[ExtinctionRecord],
    better: impl Fn(f64, f64) -> bool,
) -> Option<ExtinctionRecord> {
    records.iter().copied().reduce(|best, candidate| {
        if better(candidate.extinction, best.extinction) {
            candidate
        } else {
            best
        }
    })
}
