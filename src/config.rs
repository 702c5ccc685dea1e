//! JSON run configuration for the `unred_batch` tool.
//!
//! ```json
//! {
//!   "stars": "data/stars.dat",
//!   "sequence": "data/ub_bv_dwarfs.dat",
//!   "evaluator": { "reddening_slope": 0.72, "r_param": 3.1 },
//!   "mode": "min",
//!   "output": { "report": "out/extinction.txt", "json": "out/extinction.json" }
//! }
//! ```
use crate::extinction::Evaluator;
use crate::select::SelectionMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Text report path; stdout when absent.
    pub report: Option<PathBuf>,
    /// JSON dump of the selected records.
    pub json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BatchConfig {
    pub stars: PathBuf,
    pub sequence: PathBuf,
    #[serde(default)]
    pub evaluator: Evaluator,
    #[serde(default)]
    pub mode: SelectionMode,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BatchConfig {
    /// Resolve relative input/output paths against `base` (usually the
    /// directory holding the config file).
    pub fn rebase(mut self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.stars = join(self.stars);
        self.sequence = join(self.sequence);
        self.output.report = self.output.report.map(join);
        self.output.json = self.output.json.map(join);
        self
    }
}

pub fn load_config(path: &Path) -> Result<BatchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: BatchConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.rebase(base))
}
