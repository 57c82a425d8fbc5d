//! Flat-file high-score table.
//!
//! One record per line, fields comma-separated, no header. In practice a
//! record is `[name, score]` but readers get the fields back verbatim.

use std::fs;
use std::io;
use std::path::Path;

/// Read all score records from `path`. A missing file means no scores
/// yet and returns an empty table, never an error.
pub fn read_high_scores(path: &Path) -> io::Result<Vec<Vec<String>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect())
}

/// Write the full score table to `path`, replacing whatever was there.
pub fn write_high_scores(scores: &[Vec<String>], path: &Path) -> io::Result<()> {
    let mut contents = String::new();
    for record in scores {
        contents.push_str(&record.join(","));
        contents.push('\n');
    }
    fs::write(path, contents)
}

/// Best scores first: parse `[name, score]` records, skip malformed ones,
/// sort descending and keep the top `limit`.
pub fn top_scores(scores: &[Vec<String>], limit: usize) -> Vec<(String, u32)> {
    let mut parsed: Vec<(String, u32)> = scores
        .iter()
        .filter_map(|record| match record.as_slice() {
            [name, score] => score.parse().ok().map(|s| (name.clone(), s)),
            _ => None,
        })
        .collect();

    parsed.sort_by(|a, b| b.1.cmp(&a.1));
    parsed.truncate(limit);
    parsed
}
