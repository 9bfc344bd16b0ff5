//! One-sided tail sums over a single row of a 2x3 table.
//!
//! For a fixed column-1 split, the remaining freedom of a 2x3 table is the
//! split of the column-2/column-3 block, itself a 2x2 hypergeometric. Its
//! tables more probable than the observed 2x3 table form one contiguous run
//! (the row's bulk); everything on either side of that run is tail. An
//! [`InnerRow`] is a pointer into that distribution, kept near the bulk
//! boundary while the outer walk moves from row to row, and
//! [`row_tail_sum`] turns it into the tail mass on one side.

use super::constants::EXHAUSTED;

/// Direction along a row's inner distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Toward smaller m12 (larger m13).
    Left,
    /// Toward larger m12 (smaller m13).
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Column-2/3 block of a 2x3 table at one outer position, with the whole
/// table's probability relative to the observed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerRow {
    pub prob: f64,
    pub m12: f64,
    pub m13: f64,
    pub m22: f64,
    pub m23: f64,
}

impl InnerRow {
    pub fn new(prob: f64, m12: u32, m13: u32, m22: u32, m23: u32) -> Self {
        Self {
            prob,
            m12: m12 as f64,
            m13: m13 as f64,
            m22: m22 as f64,
            m23: m23 as f64,
        }
    }

    /// Row-1 count of the block (m12 + m13), constant along the row.
    pub fn top_total(&self) -> f64 {
        self.m12 + self.m13
    }

    /// Row-2 count of the block (m22 + m23).
    pub fn bottom_total(&self) -> f64 {
        self.m22 + self.m23
    }

    /// Whether a neighbouring table exists toward `side`.
    pub fn can_step(&self, side: Side) -> bool {
        match side {
            Side::Left => self.m12 >= EXHAUSTED && self.m23 >= EXHAUSTED,
            Side::Right => self.m13 >= EXHAUSTED && self.m22 >= EXHAUSTED,
        }
    }

    /// Move one unit toward `side`, updating the probability ratio.
    /// Callers check [`can_step`](Self::can_step) first.
    #[inline]
    pub fn step(&mut self, side: Side) {
        match side {
            Side::Left => {
                self.m13 += 1.0;
                self.m22 += 1.0;
                self.prob *= (self.m12 * self.m23) / (self.m13 * self.m22);
                self.m12 -= 1.0;
                self.m23 -= 1.0;
            }
            Side::Right => {
                self.m12 += 1.0;
                self.m23 += 1.0;
                self.prob *= (self.m13 * self.m22) / (self.m12 * self.m23);
                self.m13 -= 1.0;
                self.m22 -= 1.0;
            }
        }
    }

    pub fn stepped(mut self, side: Side) -> Self {
        self.step(side);
        self
    }

    /// Sum this table and the ones beyond it toward `side`, stopping once a
    /// term is at or below `floor` or the row ends.
    pub fn sum_toward(self, side: Side, floor: f64) -> f64 {
        let mut cur = self;
        let mut total = 0.0;
        while cur.prob > floor {
            total += cur.prob;
            if !cur.can_step(side) {
                break;
            }
            cur.step(side);
        }
        total
    }

    /// Follow an outer step that moved one column-1 unit from row 2 to row 1:
    /// one unit of the block moves from row 1 to row 2, taken from whichever
    /// column row 1 holds more of. `outer_ratio` is the column-1 factor
    /// (old m21 / new m11).
    pub fn shift_down(&mut self, outer_ratio: f64) {
        if self.m13 > self.m12 {
            self.m23 += 1.0;
            self.prob *= outer_ratio * self.m13 / self.m23;
            self.m13 -= 1.0;
        } else {
            self.m22 += 1.0;
            self.prob *= outer_ratio * self.m12 / self.m22;
            self.m12 -= 1.0;
        }
    }

    /// Mirror of [`shift_down`](Self::shift_down) for an outer step moving a
    /// column-1 unit from row 1 to row 2; `outer_ratio` is old m11 / new m21.
    pub fn shift_up(&mut self, outer_ratio: f64) {
        if self.m23 > self.m22 {
            self.m13 += 1.0;
            self.prob *= outer_ratio * self.m23 / self.m13;
            self.m23 -= 1.0;
        } else {
            self.m12 += 1.0;
            self.prob *= outer_ratio * self.m22 / self.m12;
            self.m22 -= 1.0;
        }
    }
}

/// Outcome of [`row_tail_sum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TailSum {
    /// No table in this row is more probable than the observed table, so the
    /// row cannot be split into bulk and tails.
    ModeNotPassed,
    /// Tail mass on the requested side.
    Done(f64),
}

/// Sum the tail of one row's inner distribution on `side` of its bulk.
///
/// `state` may point anywhere in the row. On [`TailSum::Done`] it is moved to
/// the tail table adjacent to the bulk (or to a bulk table next to the
/// boundary), ready to be shifted to the next row; on
/// [`TailSum::ModeNotPassed`] it is left untouched.
pub fn row_tail_sum(side: Side, state: &mut InnerRow, floor: f64) -> TailSum {
    let inward = side.opposite();
    let mut cur = *state;

    if cur.prob <= 1.0 {
        let rising_inward = cur.can_step(inward) && cur.stepped(inward).prob > cur.prob;
        if rising_inward {
            // Already in this side's tail: collect the sub-threshold tables
            // between here and the bulk.
            let start = cur;
            let mut between = 0.0;
            loop {
                let prev = cur.prob;
                if !cur.can_step(inward) {
                    return TailSum::ModeNotPassed;
                }
                cur.step(inward);
                if cur.prob < prev {
                    return TailSum::ModeNotPassed;
                }
                if cur.prob > 1.0 {
                    break;
                }
                between += cur.prob;
            }
            *state = cur;
            return TailSum::Done(between + start.sum_toward(side, floor));
        }

        // On the opposite slope: the bulk, if there is one, lies toward
        // `side`, past the mode.
        loop {
            let prev = cur.prob;
            if !cur.can_step(side) {
                return TailSum::ModeNotPassed;
            }
            cur.step(side);
            if cur.prob > 1.0 {
                break;
            }
            if cur.prob < prev {
                return TailSum::ModeNotPassed;
            }
        }
    }

    // Inside the bulk: walk out to the first tail table.
    while cur.prob > 1.0 {
        if !cur.can_step(side) {
            *state = cur;
            return TailSum::Done(0.0);
        }
        cur.step(side);
    }
    *state = cur;
    TailSum::Done(cur.sum_toward(side, floor))
}
