//! Canonical orientation of contingency tables.
//!
//! Row swaps, column swaps and transposition leave the set of achievable
//! table probabilities unchanged, so the walks are free to pick the
//! orientation that keeps them short and their ratios near 1. Both functions
//! here are pure: they return the reoriented table together with a record of
//! the swaps applied.

use std::mem::swap;

use super::tables::{ContingencyTable2x2, ContingencyTable2x3};

/// Swaps applied by [`canonicalize_2x2`], in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation2x2 {
    /// m12 and m21 exchanged (transpose).
    pub off_diagonal_swapped: bool,
    /// m11 and m22 exchanged (transpose across the anti-diagonal).
    pub diagonal_swapped: bool,
    /// Columns exchanged so that m11 sits on the low cross-product side.
    pub columns_swapped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonical2x2 {
    pub table: ContingencyTable2x2,
    pub orientation: Orientation2x2,
}

/// Orient a 2x2 table so that m12 <= m21, m11 <= m22 and
/// m11 * m22 <= m12 * m21.
///
/// The walk then starts on the left of the distribution and moves toward its
/// center by increasing m11.
pub fn canonicalize_2x2(table: ContingencyTable2x2) -> Canonical2x2 {
    let ContingencyTable2x2 {
        mut m11,
        mut m12,
        mut m21,
        mut m22,
    } = table;
    let mut orientation = Orientation2x2::default();

    if m12 > m21 {
        swap(&mut m12, &mut m21);
        orientation.off_diagonal_swapped = true;
    }
    if m11 > m22 {
        swap(&mut m11, &mut m22);
        orientation.diagonal_swapped = true;
    }
    if (m11 as u64) * (m22 as u64) > (m12 as u64) * (m21 as u64) {
        swap(&mut m11, &mut m12);
        swap(&mut m21, &mut m22);
        orientation.columns_swapped = true;
    }

    Canonical2x2 {
        table: ContingencyTable2x2::new(m11, m12, m21, m22),
        orientation,
    }
}

/// Permutation and row swap applied by [`canonicalize_2x3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation2x3 {
    /// `column_order[i]` is the input column placed at canonical column `i`.
    pub column_order: [usize; 3],
    pub rows_swapped: bool,
}

impl Default for Orientation2x3 {
    fn default() -> Self {
        Self {
            column_order: [0, 1, 2],
            rows_swapped: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonical2x3 {
    pub table: ContingencyTable2x3,
    pub orientation: Orientation2x3,
}

/// Orient a 2x3 table so that column sums are non-decreasing and
/// m11 * (m22 + m23) <= m21 * (m12 + m13).
///
/// The second condition places the bulk of the column-1 split ahead of m11,
/// i.e. in the direction of increasing m11.
pub fn canonicalize_2x3(table: ContingencyTable2x3) -> Canonical2x3 {
    let sums = table.col_sums();
    let mut order = [0usize, 1, 2];
    // Same three compare-and-swaps as a sorting network; equal sums keep
    // their input order.
    if sums[order[0]] > sums[order[1]] {
        order.swap(0, 1);
    }
    if sums[order[1]] > sums[order[2]] {
        order.swap(1, 2);
    }
    if sums[order[0]] > sums[order[1]] {
        order.swap(0, 1);
    }

    let mut cells = table.cells.map(|row| order.map(|c| row[c]));

    let [top, bottom] = cells;
    let ahead = top[0] as u128 * (bottom[1] as u128 + bottom[2] as u128);
    let behind = bottom[0] as u128 * (top[1] as u128 + top[2] as u128);
    let rows_swapped = ahead > behind;
    if rows_swapped {
        cells.swap(0, 1);
    }

    Canonical2x3 {
        table: ContingencyTable2x3::from_rows(cells),
        orientation: Orientation2x3 {
            column_order: order,
            rows_swapped,
        },
    }
}
