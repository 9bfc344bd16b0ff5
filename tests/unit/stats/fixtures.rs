//! Fixture comparisons
//!
//! The fixtures list every 2x2 table whose marginals are all at most 10 and
//! every 2x3 table whose cells are all at most 3, with p-values from exact
//! rational enumeration of all tables sharing the marginals.

use crate::helpers::{assert_p_close, parse_fixture, PAIR_FIXTURE, TRIPLE_FIXTURE};
use fisher_exact::stats::{ContingencyTable2x3, Table};
use fisher_exact::{pair_exact_test, triple_exact_test};

#[test]
fn test_pair_matches_exact_enumeration() {
    let rows = parse_fixture(PAIR_FIXTURE);
    assert_eq!(rows.len(), 2926);
    for row in &rows {
        let [m11, m12, m21, m22] = row.cells[..] else {
            panic!("bad pair fixture row {:?}", row.cells);
        };
        let p = pair_exact_test(m11, m12, m21, m22);
        assert_p_close(p, row.p_value, 1e-9, &format!("pair {:?}", row.cells));
    }
}

#[test]
fn test_triple_matches_exact_enumeration() {
    let rows = parse_fixture(TRIPLE_FIXTURE);
    assert_eq!(rows.len(), 4096);
    for row in &rows {
        let [m11, m12, m13, m21, m22, m23] = row.cells[..] else {
            panic!("bad triple fixture row {:?}", row.cells);
        };
        let p = triple_exact_test(m11, m12, m13, m21, m22, m23);
        assert_p_close(p, row.p_value, 1e-9, &format!("triple {:?}", row.cells));
    }
}

#[test]
fn test_triple_invariant_under_column_and_row_permutations() {
    const PERMS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for row in parse_fixture(TRIPLE_FIXTURE) {
        let top = [row.cells[0], row.cells[1], row.cells[2]];
        let bottom = [row.cells[3], row.cells[4], row.cells[5]];
        for perm in PERMS {
            let t = perm.map(|c| top[c]);
            let b = perm.map(|c| bottom[c]);
            for cells in [[t, b], [b, t]] {
                let p = ContingencyTable2x3::from_rows(cells).p_value();
                assert_p_close(p, row.p_value, 1e-9, &format!("permuted {:?}", cells));
            }
        }
    }
}

#[test]
fn test_table_enum_matches_free_functions() {
    for row in parse_fixture(PAIR_FIXTURE).iter().step_by(7) {
        let table = Table::from_row_major(&row.cells).unwrap();
        let [m11, m12, m21, m22] = row.cells[..] else {
            unreachable!()
        };
        assert_eq!(table.p_value().to_bits(), pair_exact_test(m11, m12, m21, m22).to_bits());
    }
}
