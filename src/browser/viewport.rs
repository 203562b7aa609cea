//! Viewport Calculator for a display that shows up to four rows at once.
//!
//! The window scrolls down one row per step but snaps upward immediately.

/// Rows visible at once.
pub const VISIBLE_ROWS: usize = 4;

/// Compute the scroll offset for `selected` in a list of `len` entries,
/// given the offset used for the previous frame.
///
/// The result always lies in `[0, max(0, len - bound)]`, where `bound` is 2
/// for lists longer than 3 entries and `len` otherwise.
pub fn reposition(selected: usize, len: usize, previous: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let selected = selected as isize;
    let len = len as isize;
    let previous = previous as isize;
    let bound = if len > 3 { 2 } else { len };
    let ceiling = len - bound;

    let offset = if len > 3 && selected >= len - 1 {
        selected - 3
    } else if previous < selected - bound {
        (previous + 1).clamp(0, ceiling)
    } else if previous > selected - bound {
        (selected - 1).clamp(0, ceiling)
    } else {
        previous
    };

    offset.max(0) as usize
}

/// Offset used right after ascending, before the regular `reposition` pass:
/// shows the row the user just came back from near the bottom of the window.
pub fn leave_dir_offset(selected: usize, len: usize) -> usize {
    selected.saturating_sub(len.min(VISIBLE_ROWS - 1))
}
