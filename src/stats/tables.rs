use super::pair::pair_exact_test;
use super::triple::triple_exact_test;

/// A 2x2 contingency table of observed counts.
///
/// Layout:
/// ```text
///        col1  col2
/// row1   m11   m12
/// row2   m21   m22
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContingencyTable2x2 {
    pub m11: u32,
    pub m12: u32,
    pub m21: u32,
    pub m22: u32,
}

impl ContingencyTable2x2 {
    pub fn new(m11: u32, m12: u32, m21: u32, m22: u32) -> Self {
        Self { m11, m12, m21, m22 }
    }

    /// Row sums, widened so that `u32::MAX` cells cannot wrap.
    pub fn row_sums(&self) -> [u64; 2] {
        [
            self.m11 as u64 + self.m12 as u64,
            self.m21 as u64 + self.m22 as u64,
        ]
    }

    pub fn col_sums(&self) -> [u64; 2] {
        [
            self.m11 as u64 + self.m21 as u64,
            self.m12 as u64 + self.m22 as u64,
        ]
    }

    pub fn total(&self) -> u64 {
        self.row_sums().iter().sum()
    }

    pub fn cells(&self) -> [u32; 4] {
        [self.m11, self.m12, self.m21, self.m22]
    }

    /// Two-sided Fisher exact test p-value.
    pub fn p_value(&self) -> f64 {
        pair_exact_test(self.m11, self.m12, self.m21, self.m22)
    }
}

/// A 2x3 contingency table, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContingencyTable2x3 {
    pub cells: [[u32; 3]; 2],
}

impl ContingencyTable2x3 {
    pub fn new(m11: u32, m12: u32, m13: u32, m21: u32, m22: u32, m23: u32) -> Self {
        Self {
            cells: [[m11, m12, m13], [m21, m22, m23]],
        }
    }

    pub fn from_rows(cells: [[u32; 3]; 2]) -> Self {
        Self { cells }
    }

    /// Build a table from the command-line argument order, where arguments
    /// 1, 3, 5 form row 1 and arguments 2, 4, 6 form row 2 (a 3x2 table
    /// entered row by row, transposed).
    pub fn from_interleaved(args: [u32; 6]) -> Self {
        Self::new(args[0], args[2], args[4], args[1], args[3], args[5])
    }

    pub fn row_sums(&self) -> [u64; 2] {
        self.cells
            .map(|row| row.iter().map(|&c| c as u64).sum::<u64>())
    }

    pub fn col_sums(&self) -> [u64; 3] {
        let [top, bottom] = self.cells;
        [0usize, 1, 2].map(|c| top[c] as u64 + bottom[c] as u64)
    }

    pub fn total(&self) -> u64 {
        self.row_sums().iter().sum()
    }

    /// Cells in row-major order.
    pub fn cells_flat(&self) -> [u32; 6] {
        let [[m11, m12, m13], [m21, m22, m23]] = self.cells;
        [m11, m12, m13, m21, m22, m23]
    }

    /// Two-sided Fisher-Freeman-Halton exact test p-value.
    pub fn p_value(&self) -> f64 {
        let [m11, m12, m13, m21, m22, m23] = self.cells_flat();
        triple_exact_test(m11, m12, m13, m21, m22, m23)
    }
}

/// Either supported table shape, as read from batch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Pair(ContingencyTable2x2),
    Triple(ContingencyTable2x3),
}

impl Table {
    /// Build a table from row-major counts: 4 values for 2x2, 6 for 2x3.
    pub fn from_row_major(counts: &[u32]) -> Option<Self> {
        match *counts {
            [m11, m12, m21, m22] => Some(Table::Pair(ContingencyTable2x2::new(m11, m12, m21, m22))),
            [m11, m12, m13, m21, m22, m23] => Some(Table::Triple(ContingencyTable2x3::new(
                m11, m12, m13, m21, m22, m23,
            ))),
            _ => None,
        }
    }

    pub fn cells(&self) -> Vec<u32> {
        match self {
            Table::Pair(t) => t.cells().to_vec(),
            Table::Triple(t) => t.cells_flat().to_vec(),
        }
    }

    pub fn p_value(&self) -> f64 {
        match self {
            Table::Pair(t) => t.p_value(),
            Table::Triple(t) => t.p_value(),
        }
    }
}
