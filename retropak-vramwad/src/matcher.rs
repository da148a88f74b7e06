//! Greedy longest-match search over the history window.

use crate::MAX_MATCH;
use retropak_core::window::{HistoryWindow, WINDOW_SIZE};

/// Find the longest run of window bytes matching the start of `lookahead`.
///
/// Scans every distance from 1 (most recent) to the full window size and
/// returns `(length, distance)` of the best candidate. Only a strictly
/// longer run replaces the current best, so among equal-length candidates
/// the smallest distance wins. The scan stops early once [`MAX_MATCH`] is
/// reached.
///
/// A candidate run is capped at its own distance: slots at or past the
/// write cursor hold bytes the decoder will have overwritten by the time
/// it reads them, so the comparison stops at the cursor. Callers treat a
/// returned length below the minimum match length as "no usable match".
pub fn find_longest_match(window: &HistoryWindow, lookahead: &[u8]) -> (usize, u16) {
    let limit = lookahead.len().min(MAX_MATCH);
    let mut best_len = 0usize;
    let mut best_dist = 0u16;

    for dist in 1..=WINDOW_SIZE as u16 {
        let base = window.cursor().wrapping_sub(dist);
        let cap = limit.min(dist as usize);
        let mut len = 0usize;
        while len < cap && window.at(base.wrapping_add(len as u16)) == lookahead[len] {
            len += 1;
        }

        if len > best_len {
            best_len = len;
            best_dist = dist;
            if best_len == MAX_MATCH {
                break;
            }
        }
    }

    (best_len, best_dist)
}
