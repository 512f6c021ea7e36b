//! Solvability analysis for shuffled tile arrangements
//!
//! Legal moves can only ever reach half of all possible arrangements of a
//! sliding puzzle. The reachable half is identified by the parity of
//! inversions among tile origins, with a row correction on boards of even
//! width.

/// Count pairs of values that appear in descending order
pub fn count_inversions(values: &[usize]) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            values
                .iter()
                .skip(index + 1)
                .filter(|&&later| later < value)
                .count()
        })
        .sum()
}

/// Decide whether an arrangement can reach the solved board
///
/// `origin_indices` lists the row-major solved index of every non-empty
/// tile, read from the board in row-major order. `empty_row` is the row
/// currently holding the empty slot, counted from the top.
pub fn is_solvable_arrangement(origin_indices: &[usize], width: usize, empty_row: usize) -> bool {
    let inversions = count_inversions(origin_indices);

    if width % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + empty_row) % 2 == 1
    }
}
