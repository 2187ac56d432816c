use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::RecastError;

/// Read the first `k` lines of a file. Every detection heuristic works off
/// this bounded prefix, so detection cost is independent of file size.
/// Short files yield fewer lines — that is not an error, the heuristics
/// just see less.
pub fn head_lines(path: &Path, k: usize) -> Result<Vec<String>, RecastError> {
    let file = fs::File::open(path).map_err(|e| RecastError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::with_capacity(k.min(256));
    for line in reader.lines().take(k) {
        lines.push(line.map_err(|e| RecastError::from_io(path, e))?);
    }
    Ok(lines)
}
