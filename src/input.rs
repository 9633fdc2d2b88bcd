//! Loader for `x,y,z` point lists.

use std::path::Path;

use crate::error::CircuitError;
use crate::types::{coord_in_range, Point3};

/// Parse one `x,y,z` record per line.
///
/// Surrounding whitespace is trimmed on lines and fields; blank lines are skipped.
/// A coordinate outside `[-COORD_LIMIT, COORD_LIMIT]` is an `InvalidCoordinate`.
/// Line numbers in errors are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point3>, CircuitError> {
    let mut points = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_record(line, idx + 1)?);
    }
    if points.len() > u32::MAX as usize {
        return Err(CircuitError::TooManyPoints(points.len()));
    }
    Ok(points)
}

fn parse_record(line: &str, line_no: usize) -> Result<Point3, CircuitError> {
    let mut coords = [0i64; 3];
    let mut fields = line.split(',');
    for slot in coords.iter_mut() {
        let field = fields.next().ok_or_else(|| CircuitError::MalformedRecord {
            line: line_no,
            content: line.to_string(),
        })?;
        let field = field.trim();
        *slot = field
            .parse::<i64>()
            .ok()
            .filter(|&v| coord_in_range(v))
            .ok_or_else(|| CircuitError::InvalidCoordinate {
                line: line_no,
                value: field.to_string(),
            })?;
    }
    if fields.next().is_some() {
        return Err(CircuitError::MalformedRecord {
            line: line_no,
            content: line.to_string(),
        });
    }
    Ok(Point3::from(coords))
}

/// Read and parse a point file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point3>, CircuitError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CircuitError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let points = parse_points(&text)?;
    log::debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
