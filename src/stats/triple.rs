//! Fisher-Freeman-Halton exact test for 2x3 tables.
//!
//! With marginals fixed a 2x3 table has two degrees of freedom: the
//! column-1 split (m11, m21) and, for each such split, the split of the
//! column-2/3 block. The walk moves along the column-1 split one unit at a
//! time ("rows" of the table space), tracking each row's total probability
//! and two pointers into its inner distribution, one on each side of the
//! inner bulk. Per row, [`row_tail_sum`] yields the two inner tails and the
//! remainder of the row is bulk. Once a row no longer contains any table more
//! probable than the observed one, every row further out is pure tail and is
//! summed whole.

use super::canonical::canonicalize_2x3;
use super::constants::{DOUBLE_PREC_LIMIT, EXHAUSTED, SMALLISH_EPSILON};
use super::row_tail::{row_tail_sum, InnerRow, Side, TailSum};
use super::tables::ContingencyTable2x3;

/// Two-sided Fisher-Freeman-Halton p-value for the 2x3 table
/// `[[m11, m12, m13], [m21, m22, m23]]`.
///
/// Returns exactly 1.0 when no table with the same marginals is more probable
/// than the observed one, and 0.0 when the accumulated probability mass
/// overflows `f64`.
pub fn triple_exact_test(m11: u32, m12: u32, m13: u32, m21: u32, m22: u32, m23: u32) -> f64 {
    let canonical = canonicalize_2x3(ContingencyTable2x3::new(m11, m12, m13, m21, m22, m23));
    triple_tail_walk(&canonical.table)
}

/// Direction of the outer walk along the column-1 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outer {
    /// m11 increasing.
    Forward,
    /// m11 decreasing.
    Backward,
}

/// Why an outer direction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Column 1 or the block ran out of units to move.
    Exhausted,
    /// The current row has no bulk left.
    ModeNotPassed,
}

/// Position of the outer walk plus the per-row state carried along it.
#[derive(Debug, Clone, Copy)]
struct OuterWalk {
    m11: f64,
    m21: f64,
    /// Total probability of the current row, relative to the observed table.
    row_prob: f64,
    left: InnerRow,
    right: InnerRow,
}

impl OuterWalk {
    /// Move to the next row; `false` when there is none.
    fn advance(&mut self, dir: Outer) -> bool {
        let top = self.left.top_total();
        let bottom = self.left.bottom_total();
        match dir {
            Outer::Forward => {
                if self.m21 < EXHAUSTED || top < EXHAUSTED {
                    return false;
                }
                self.m11 += 1.0;
                let ratio = self.m21 / self.m11;
                self.row_prob *= ratio * top / (bottom + 1.0);
                self.left.shift_down(ratio);
                self.right.shift_down(ratio);
                self.m21 -= 1.0;
            }
            Outer::Backward => {
                if self.m11 < EXHAUSTED || bottom < EXHAUSTED {
                    return false;
                }
                self.m21 += 1.0;
                let ratio = self.m11 / self.m21;
                self.row_prob *= ratio * bottom / (top + 1.0);
                self.left.shift_up(ratio);
                self.right.shift_up(ratio);
                self.m11 -= 1.0;
            }
        }
        true
    }

    /// Sum whole rows, starting with the current one, while they stay above
    /// `floor`.
    fn sum_rows(mut self, dir: Outer, floor: f64) -> f64 {
        let mut top = self.left.top_total();
        let mut bottom = self.left.bottom_total();
        let mut total = 0.0;
        while self.row_prob > floor {
            total += self.row_prob;
            match dir {
                Outer::Forward => {
                    if self.m21 < EXHAUSTED || top < EXHAUSTED {
                        break;
                    }
                    self.m11 += 1.0;
                    bottom += 1.0;
                    self.row_prob *= (self.m21 * top) / (self.m11 * bottom);
                    self.m21 -= 1.0;
                    top -= 1.0;
                }
                Outer::Backward => {
                    if self.m11 < EXHAUSTED || bottom < EXHAUSTED {
                        break;
                    }
                    self.m21 += 1.0;
                    top += 1.0;
                    self.row_prob *= (self.m11 * bottom) / (self.m21 * top);
                    self.m11 -= 1.0;
                    bottom -= 1.0;
                }
            }
        }
        total
    }
}

/// Running totals of the walk.
#[derive(Debug, Clone, Copy)]
struct Mass {
    tail: f64,
    bulk: f64,
}

impl Mass {
    fn floor(&self) -> f64 {
        self.tail * DOUBLE_PREC_LIMIT
    }
}

/// Sum the distribution of an already canonical table.
fn triple_tail_walk(table: &ContingencyTable2x3) -> f64 {
    let [[m11, m12, m13], [m21, m22, m23]] = table.cells;
    let observed = InnerRow::new(1.0 - SMALLISH_EPSILON, m12, m13, m22, m23);
    let mut mass = Mass {
        tail: observed.prob,
        bulk: 0.0,
    };

    // Observed row: climb toward the inner mode through the row's bulk. The
    // first table back at or below the threshold anchors the far tail.
    let toward_mode = if (m12 as u64) * (m23 as u64) > (m13 as u64) * (m22 as u64) {
        Side::Left
    } else {
        Side::Right
    };
    let mut far = observed;
    let mut moved = false;
    while far.can_step(toward_mode) {
        far.step(toward_mode);
        moved = true;
        if far.prob <= 1.0 {
            break;
        }
        mass.bulk += far.prob;
        if mass.bulk == f64::INFINITY {
            return 0.0;
        }
    }
    if moved && far.prob <= 1.0 {
        mass.tail += far.sum_toward(toward_mode, mass.floor());
    }
    let away = toward_mode.opposite();
    if observed.can_step(away) {
        mass.tail += observed.stepped(away).sum_toward(away, mass.floor());
    }

    let (left, right) = match toward_mode {
        Side::Left => (far, observed),
        Side::Right => (observed, far),
    };
    let start = OuterWalk {
        m11: m11 as f64,
        m21: m21 as f64,
        row_prob: mass.tail + mass.bulk,
        left,
        right,
    };

    for dir in [Outer::Forward, Outer::Backward] {
        let mut walk = start;
        let stop = loop {
            if !walk.advance(dir) {
                break Stop::Exhausted;
            }
            let mut left = walk.left;
            let left_tail = match row_tail_sum(Side::Left, &mut left, mass.floor()) {
                TailSum::Done(t) => t,
                TailSum::ModeNotPassed => break Stop::ModeNotPassed,
            };
            let mut right = walk.right;
            let right_floor = (mass.tail + left_tail) * DOUBLE_PREC_LIMIT;
            let right_tail = match row_tail_sum(Side::Right, &mut right, right_floor) {
                TailSum::Done(t) => t,
                TailSum::ModeNotPassed => break Stop::ModeNotPassed,
            };
            walk.left = left;
            walk.right = right;
            mass.tail += left_tail + right_tail;
            mass.bulk += walk.row_prob - left_tail - right_tail;
            if mass.bulk == f64::INFINITY {
                return 0.0;
            }
        };
        if stop == Stop::ModeNotPassed {
            mass.tail += walk.sum_rows(dir, mass.floor());
        }
    }

    let total = mass.tail + mass.bulk;
    if !total.is_finite() {
        return 0.0;
    }
    // Rounding in `bulk` can leave the ratio a few ulps above 1.
    (mass.tail / total).min(1.0)
}
