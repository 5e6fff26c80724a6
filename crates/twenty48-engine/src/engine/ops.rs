use log::trace;

use super::grid::{Exponent, Score};

/// Merge equal tiles toward index 0 of `line` without sliding.
///
/// Starting cells are visited left to right. From each non-empty start the
/// scan walks right, skipping empty cells: an equal tile is absorbed (start
/// exponent +1, partner zeroed) and the scan keeps going with the new value,
/// a different tile stops it. A tile at `Exponent::MAX` cannot grow, so an
/// equal partner blocks it instead. Returns the number of merges performed.
pub(crate) fn merge_line_left(line: &mut [Exponent]) -> usize {
    let mut merges = 0;
    for origin in 0..line.len() {
        if line[origin] == 0 {
            continue;
        }
        for probe in origin + 1..line.len() {
            let val = line[probe];
            if val == line[origin] && val < Exponent::MAX {
                line[origin] += 1;
                line[probe] = 0;
                merges += 1;
                trace!("merged cell {probe} into {origin} -> exponent {}", line[origin]);
            } else if val != 0 {
                break;
            }
            // empty: keep scanning
        }
    }
    merges
}

/// Slide every tile in `line` as far toward index 0 as the gaps allow.
///
/// Runs to a fixed point: each tile is walked left by adjacent swaps until it
/// hits the edge or another tile. Returns whether anything moved.
pub(crate) fn compact_line_left(line: &mut [Exponent]) -> bool {
    let mut moved = false;
    for start in 1..line.len() {
        let mut pos = start;
        while pos > 0 && line[pos] != 0 && line[pos - 1] == 0 {
            line.swap(pos - 1, pos);
            pos -= 1;
            moved = true;
        }
    }
    moved
}

/// `2^exponent`, saturating at `u64::MAX` for exponents of 64 and up.
///
/// Empty cells are not special-cased: exponent 0 contributes 1.
#[inline]
pub(crate) fn cell_score(exponent: Exponent) -> Score {
    1u64.checked_shl(u32::from(exponent)).unwrap_or(Score::MAX)
}

pub(crate) fn line_score(line: &[Exponent]) -> Score {
    line.iter()
        .fold(0, |acc: Score, &e| acc.saturating_add(cell_score(e)))
}
