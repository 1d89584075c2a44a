//! Life 1.05 pattern files.
//!
//! ```text
//! #Life 1.05
//! #D Blinker
//! #P -1 0
//! ***
//! ```
//!
//! A `#P dx dy` line moves the block origin to `(dx, dy)` relative to the
//! board centre. In a row, `.` advances the cursor and `*` advances it and
//! then marks the cell under it, so the first column of a block sits one
//! cell right of its origin. Any other character is skipped.

use std::io::{self, BufRead};
use thiserror::Error;

/// Required prefix of the first line
pub const HEADER: &str = "#Life";

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("failed to read pattern {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name} is not a Life pattern (first line must start with #Life)")]
    MissingHeader { name: String },

    #[error("{name}, line {line}: invalid #P offsets {text:?}")]
    BadOffset {
        name: String,
        line: usize,
        text: String,
    },

    #[error("{name}: cell ({x}, {y}) lies outside the {size}x{size} board")]
    OutOfBounds {
        name: String,
        x: i64,
        y: i64,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, PatternError>;

/// A parsed pattern: live cells as offsets from the board centre.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    /// `#D` lines, in file order
    pub description: Vec<String>,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(i64, i64)>) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
            cells,
        }
    }

    /// Parse a Life 1.05 stream. Stops at the first line if the header is
    /// missing.
    pub fn parse<R: BufRead>(name: &str, reader: R) -> Result<Self> {
        let io_error = |source| PatternError::Io {
            name: name.to_owned(),
            source,
        };

        let mut lines = reader.lines();
        match lines.next().transpose().map_err(io_error)? {
            Some(first) if first.starts_with(HEADER) => {}
            _ => {
                return Err(PatternError::MissingHeader {
                    name: name.to_owned(),
                });
            }
        }

        let mut pattern = Pattern::new(name, Vec::new());
        let (mut origin_x, mut x, mut y) = (0i64, 0i64, 0i64);

        for (idx, line) in lines.enumerate() {
            let line = line.map_err(io_error)?;

            if let Some(args) = line.strip_prefix("#P") {
                let (dx, dy) = parse_offsets(args).ok_or_else(|| PatternError::BadOffset {
                    name: name.to_owned(),
                    line: idx + 2,
                    text: args.trim().to_owned(),
                })?;
                origin_x = i64::from(dx);
                x = origin_x;
                y = i64::from(dy);
            } else if let Some(text) = line.strip_prefix("#D") {
                pattern.description.push(text.trim().to_owned());
            } else if line.starts_with('#') {
                // #N, #R and friends are not supported
            } else {
                for c in line.chars() {
                    match c {
                        '.' => x += 1,
                        '*' => {
                            x += 1;
                            pattern.cells.push((x, y));
                        }
                        _ => {}
                    }
                }
                y += 1;
                x = origin_x;
            }
        }

        Ok(pattern)
    }

    #[cfg(test)]
    pub(crate) fn parse_str(name: &str, text: &str) -> Result<Self> {
        Self::parse(name, text.as_bytes())
    }

    /// Resolve every cell to a logical coordinate on a `size` board,
    /// failing on the first one that falls off it.
    pub fn placements(&self, size: usize) -> Result<Vec<(usize, usize)>> {
        let mid = (size / 2) as i64;
        let bound = size as i64;

        self.cells
            .iter()
            .map(|&(dx, dy)| {
                // saturated values always land off the board
                let (x, y) = (mid.saturating_add(dx), mid.saturating_add(dy));
                if (0..bound).contains(&x) && (0..bound).contains(&y) {
                    Ok((x as usize, y as usize))
                } else {
                    Err(PatternError::OutOfBounds {
                        name: self.name.clone(),
                        x,
                        y,
                        size,
                    })
                }
            })
            .collect()
    }
}

/// Exactly two whitespace separated signed 32-bit integers. The cursor
/// runs in `i64`, so it cannot overflow from an accepted offset.
fn parse_offsets(args: &str) -> Option<(i32, i32)> {
    let mut parts = args.split_whitespace();
    let dx = parts.next()?.parse().ok()?;
    let dy = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((dx, dy))
}
