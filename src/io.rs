//! Text and JSON I/O.
//!
//! - `read_reference_sequence` / `parse_reference_sequence`: two columns
//!   `x y` into a validated [`ReferenceSequence`].
//! - `read_stars` / `parse_stars`: five columns `id x y x_err y_err`.
//! - `write_report` / `format_record`: fixed-width text report.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Columns are separated by whitespace or commas; `#` starts a comment and
//! blank lines are skipped.
use crate::error::{UnredError, UnredResult};
use crate::sequence::ReferenceSequence;
use crate::types::{ColorPoint, ExtinctionRecord, Star};
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const REPORT_HEADER: &str = "# ID x_ci y_ci x_ci0 y_ci0 E(x_ci) E(y_ci) A";

fn read_text(path: &Path) -> UnredResult<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            UnredError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            UnredError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Data rows as `(1-based line number, fields)`.
fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
    text.lines().enumerate().filter_map(|(i, line)| {
        let content = line.split('#').next().unwrap_or("");
        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        (!fields.is_empty()).then_some((i + 1, fields))
    })
}

fn expect_columns(
    source_name: &str,
    line: usize,
    fields: &[&str],
    expected: usize,
) -> UnredResult<()> {
    if fields.len() != expected {
        return Err(UnredError::parse(
            source_name,
            line,
            format!("expected {expected} columns, found {}", fields.len()),
        ));
    }
    Ok(())
}

fn parse_real(source_name: &str, line: usize, field: &str) -> UnredResult<f64> {
    field.parse::<f64>().map_err(|e| {
        UnredError::parse(source_name, line, format!("invalid number '{field}': {e}"))
    })
}

/// Parse a reference sequence from text; `source_name` only labels errors.
pub fn parse_reference_sequence(text: &str, source_name: &str) -> UnredResult<ReferenceSequence> {
    let mut points = Vec::new();
    for (line, fields) in data_rows(text) {
        expect_columns(source_name, line, &fields, 2)?;
        let x = parse_real(source_name, line, fields[0])?;
        let y = parse_real(source_name, line, fields[1])?;
        points.push(ColorPoint::new(x, y));
    }
    ReferenceSequence::new(points)
}

/// Parse observed stars from text; `source_name` only labels errors.
pub fn parse_stars(text: &str, source_name: &str) -> UnredResult<Vec<Star>> {
    let mut stars = Vec::new();
    for (line, fields) in data_rows(text) {
        expect_columns(source_name, line, &fields, 5)?;
        let id = fields[0].parse::<i64>().map_err(|e| {
            UnredError::parse(source_name, line, format!("invalid star id '{}': {e}", fields[0]))
        })?;
        let star = Star {
            id,
            x: parse_real(source_name, line, fields[1])?,
            y: parse_real(source_name, line, fields[2])?,
            x_err: parse_real(source_name, line, fields[3])?,
            y_err: parse_real(source_name, line, fields[4])?,
        };
        validate_star(&star)?;
        stars.push(star);
    }
    Ok(stars)
}

/// Only negative uncertainties are rejected. `nan` colours are accepted and
/// simply never cross the sequence.
fn validate_star(star: &Star) -> UnredResult<()> {
    if star.x_err < 0.0 || star.y_err < 0.0 {
        return Err(UnredError::MalformedInput(format!(
            "star {} has negative uncertainty ({}, {})",
            star.id, star.x_err, star.y_err
        )));
    }
    Ok(())
}

pub fn read_reference_sequence(path: &Path) -> UnredResult<ReferenceSequence> {
    let text = read_text(path)?;
    let sequence = parse_reference_sequence(&text, &path.display().to_string())?;
    debug!("loaded {} reference points from {}", sequence.len(), path.display());
    Ok(sequence)
}

pub fn read_stars(path: &Path) -> UnredResult<Vec<Star>> {
    let text = read_text(path)?;
    let stars = parse_stars(&text, &path.display().to_string())?;
    debug!("loaded {} stars from {}", stars.len(), path.display());
    Ok(stars)
}

/// One report line: `id x y x0 y0 Ex Ey A`.
pub fn format_record(record: &ExtinctionRecord) -> String {
    format!(
        "{:4} {:7.4} {:7.4} {:7.4} {:7.4} {:8.4} {:7.4} {:8.4}",
        record.star_id,
        record.observed.x,
        record.observed.y,
        record.intrinsic.x,
        record.intrinsic.y,
        record.excess_x,
        record.excess_y,
        record.extinction
    )
}

/// Write the header and one line per record.
pub fn write_report<W: Write>(mut out: W, records: &[ExtinctionRecord]) -> io::Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    for record in records {
        writeln!(out, "{}", format_record(record))?;
    }
    out.flush()
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Write the text report to `path`, creating parent directories.
pub fn write_report_file(path: &Path, records: &[ExtinctionRecord]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    write_report(io::BufWriter::new(file), records)
        .map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_skips_comments_and_blank_lines() {
        let text = "# B-V U-B\n\n 1.40 1.2187\n1.19 1.1216 # K0\n0.94,0.6881\n";
        let seq = parse_reference_sequence(text, "seq").unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.points()[1], ColorPoint::new(1.19, 1.1216));
        assert_eq!(seq.points()[2], ColorPoint::new(0.94, 0.6881));
    }

    #[test]
    fn sequence_wrong_column_count_names_line() {
        let err = parse_reference_sequence("1.0 2.0\n0.5\n", "seq.dat").unwrap_err();
        match err {
            UnredError::Parse { source_name, line, .. } => {
                assert_eq!(source_name, "seq.dat");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sequence_needs_two_points() {
        let err = parse_reference_sequence("# only one\n1.0 2.0\n", "seq").unwrap_err();
        assert!(matches!(err, UnredError::MalformedInput(_)));
    }

    #[test]
    fn stars_parse_five_columns() {
        let text = "2 0.985 0.332 0.017 0.033\n4 0.141 0.034 0.012 0.020\n";
        let stars = parse_stars(text, "stars").unwrap();
        assert_eq!(stars.len(), 2);
        assert_eq!(
            stars[1],
            Star {
                id: 4,
                x: 0.141,
                y: 0.034,
                x_err: 0.012,
                y_err: 0.020
            }
        );
    }

    #[test]
    fn stars_reject_fractional_id() {
        let err = parse_stars("2.5 0.1 0.1 0.0 0.0\n", "stars").unwrap_err();
        assert!(matches!(err, UnredError::Parse { line: 1, .. }));
    }

    #[test]
    fn stars_reject_negative_uncertainty() {
        let err = parse_stars("1 0.1 0.1 -0.01 0.0\n", "stars").unwrap_err();
        assert!(matches!(err, UnredError::MalformedInput(_)));
    }

    #[test]
    fn empty_star_file_is_valid() {
        let stars = parse_stars("# id x y x_err y_err\n", "stars").unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn stars_accept_nan_colours() {
        let stars = parse_stars("3 nan 0.2 0.01 0.01\n", "stars").unwrap();
        assert_eq!(stars.len(), 1);
        assert!(stars[0].x.is_nan());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_stars(Path::new("/definitely/not/here/stars.dat")).unwrap_err();
        assert!(matches!(err, UnredError::MissingFile { .. }));
    }

    #[test]
    fn record_line_is_fixed_width() {
        let record = ExtinctionRecord {
            star_id: 4,
            observed: ColorPoint::new(0.153, 0.054),
            intrinsic: ColorPoint::new(-0.007227513227513221, -0.06136380952380951),
            excess_x: 0.16022751322751322,
            excess_y: 0.11536380952380951,
            extinction: 0.496705291005291,
        };
        assert_eq!(
            format_record(&record),
            "   4  0.1530  0.0540 -0.0072 -0.0614   0.1602  0.1154   0.4967"
        );
    }

    #[test]
    fn report_starts_with_header() {
        let mut buf = Vec::new();
        write_report(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{REPORT_HEADER}\n"));
    }
}
