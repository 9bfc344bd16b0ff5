//! Two-sided Fisher exact test for 2x2 tables.
//!
//! With all marginals fixed, a 2x2 table has one degree of freedom and its
//! probabilities follow a hypergeometric distribution. Rather than evaluating
//! factorials, the walk starts at the observed table with weight ~1 and moves
//! one unit at a time, multiplying by the ratio between neighbouring tables:
//!
//!   P(m11 + 1) / P(m11) = (m12 * m21) / ((m11 + 1) * (m22 + 1))
//!
//! Tables heavier than the observed one are accumulated un-normalized into
//! `bulk`; tables at most as heavy go into `tail`. The p-value is
//! `tail / (tail + bulk)`. Summation stops once terms drop below
//! `tail * DOUBLE_PREC_LIMIT`.

use super::canonical::canonicalize_2x2;
use super::constants::{DOUBLE_PREC_LIMIT, EXHAUSTED, SMALL_EPSILON};
use super::tables::ContingencyTable2x2;

/// Two-sided Fisher exact test p-value for the 2x2 table
/// `[[m11, m12], [m21, m22]]`.
///
/// Returns exactly 1.0 when no table with the same marginals is more probable
/// than the observed one, and 0.0 when the probability ratio overflows `f64`
/// (astronomically significant tables with very large counts).
pub fn pair_exact_test(m11: u32, m12: u32, m21: u32, m22: u32) -> f64 {
    let canonical = canonicalize_2x2(ContingencyTable2x2::new(m11, m12, m21, m22));
    pair_tail_walk(&canonical.table)
}

/// Moving copy of a 2x2 table, with counts carried as `f64` so they stay in
/// step with the probability ratio.
#[derive(Debug, Clone, Copy)]
struct DiagonalWalk {
    m11: f64,
    m12: f64,
    m21: f64,
    m22: f64,
}

impl DiagonalWalk {
    fn new(table: &ContingencyTable2x2) -> Self {
        Self {
            m11: table.m11 as f64,
            m12: table.m12 as f64,
            m21: table.m21 as f64,
            m22: table.m22 as f64,
        }
    }

    /// Move one unit onto the main diagonal; returns the probability ratio
    /// of the new table to the old one.
    #[inline]
    fn toward_center(&mut self) -> f64 {
        let num = self.m12 * self.m21;
        self.m12 -= 1.0;
        self.m21 -= 1.0;
        self.m11 += 1.0;
        self.m22 += 1.0;
        num / (self.m11 * self.m22)
    }

    /// Move one unit off the main diagonal.
    #[inline]
    fn toward_corner(&mut self) -> f64 {
        let num = self.m11 * self.m22;
        self.m11 -= 1.0;
        self.m22 -= 1.0;
        self.m12 += 1.0;
        self.m21 += 1.0;
        num / (self.m12 * self.m21)
    }
}

/// Sum the distribution of an already canonical table.
fn pair_tail_walk(table: &ContingencyTable2x2) -> f64 {
    let mut tail = 1.0 - SMALL_EPSILON;
    let mut bulk = 0.0;
    let mut prob = tail;
    let mut walk = DiagonalWalk::new(table);

    // Bulk phase: climb toward the mode until the first table lighter than
    // the observed one.
    while walk.m12 >= EXHAUSTED {
        prob *= walk.toward_center();
        if prob == f64::INFINITY {
            return 0.0;
        }
        if prob < 1.0 {
            tail += prob;
            break;
        }
        bulk += prob;
    }
    if bulk == 0.0 {
        return 1.0;
    }

    // Near tail: the far side of the mode, down to the precision floor.
    if walk.m12 >= EXHAUSTED {
        let tail_stop = tail * DOUBLE_PREC_LIMIT;
        loop {
            prob *= walk.toward_center();
            if prob < tail_stop {
                break;
            }
            tail += prob;
            if walk.m12 < EXHAUSTED {
                break;
            }
        }
    }

    // Far tail: tables more extreme than the observed one on its own side.
    if table.m11 > 0 {
        let mut walk = DiagonalWalk::new(table);
        let mut prob = 1.0;
        let tail_stop = tail * DOUBLE_PREC_LIMIT;
        loop {
            prob *= walk.toward_corner();
            if prob < tail_stop {
                break;
            }
            tail += prob;
            if walk.m11 < EXHAUSTED {
                break;
            }
        }
    }

    tail / (bulk + tail)
}
