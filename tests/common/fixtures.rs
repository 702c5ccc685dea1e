use std::fs;
use std::path::{Path, PathBuf};

/// Reference track with a hump in y, ordered by increasing temperature
/// (decreasing x). A reddening line of slope 0.5 from the red side can cross
/// it up to three times.
pub const HUMPED_SEQUENCE: &str = "\
# x_color y_color
1.0  1.0
0.6  0.0
0.3  0.6
0.0 -0.3
";

/// Star 1 crosses all three segments, star 2 sits blue-ward of every node,
/// star 3 carries uncertainties, star 4 crosses the two blue segments.
pub const STARS: &str = "\
# id x y x_err y_err
1  1.20  0.50  0.000 0.000
2 -0.50  0.00  0.010 0.010
3  1.10  0.45  0.020 0.030
4  0.65  0.10  0.000 0.000
";

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
