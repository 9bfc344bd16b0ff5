//! 2x3 Fisher-Freeman-Halton test

use crate::helpers::{assert_p_close, parse_fixture, PAIR_FIXTURE};
use fisher_exact::{pair_exact_test, triple_exact_test, ContingencyTable2x3};

#[test]
fn test_reference_tables() {
    // Exact rational enumeration.
    assert_p_close(triple_exact_test(3, 1, 4, 1, 5, 9), 0.2411271144613452, 1e-9, "3 1 4 / 1 5 9");
    assert_p_close(
        triple_exact_test(10, 2, 7, 3, 12, 5),
        0.0033986245138733413,
        1e-9,
        "10 2 7 / 3 12 5",
    );
    assert_eq!(triple_exact_test(1, 2, 3, 4, 5, 6), 1.0);
}

#[test]
fn test_reference_larger_tables() {
    // Log-space enumeration over every table with the same marginals.
    let cases = [
        ([300, 200, 100, 100, 200, 300], 4.334473045039628e-46),
        ([50, 60, 70, 80, 40, 90], 0.0037366573975402867),
        ([200, 10, 5, 150, 30, 40], 4.3189065258068795e-11),
    ];
    for ([a, b, c, d, e, f], expected) in cases {
        let p = triple_exact_test(a, b, c, d, e, f);
        assert_p_close(p, expected, 1e-9, &format!("{:?}", [a, b, c, d, e, f]));
    }
}

#[test]
fn test_zero_column_reduces_to_pair() {
    for row in parse_fixture(PAIR_FIXTURE) {
        let [a, b, c, d] = row.cells[..] else {
            unreachable!()
        };
        let pair = pair_exact_test(a, b, c, d);
        let ctx = format!("{:?}", row.cells);
        assert_p_close(triple_exact_test(a, b, 0, c, d, 0), pair, 1e-9, &ctx);
        assert_p_close(triple_exact_test(0, a, b, 0, c, d), pair, 1e-9, &ctx);
        assert_p_close(triple_exact_test(a, 0, b, c, 0, d), pair, 1e-9, &ctx);
    }
}

#[test]
fn test_degenerate_inner_rows_terminate() {
    // Tables whose observed column-2/3 block admits a single configuration.
    assert_p_close(triple_exact_test(3, 0, 0, 0, 3, 3), 0.03571428571428571, 1e-9, "3 0 0 / 0 3 3");
    assert_p_close(triple_exact_test(0, 3, 3, 3, 0, 0), 0.03571428571428571, 1e-9, "0 3 3 / 3 0 0");
    assert_p_close(triple_exact_test(0, 2, 2, 2, 0, 0), 0.2, 1e-9, "0 2 2 / 2 0 0");
}

#[test]
fn test_large_near_null_table() {
    let p = triple_exact_test(1_000_000, 1_000_200, 1_000_050, 1_000_100, 999_900, 999_800);
    assert_p_close(p, 0.9765508664465424, 1e-7, "near-null 1e6");
}

#[test]
#[ignore = "tens of seconds even in release builds"]
fn test_near_null_billion_scale_is_stable() {
    // Chi-square with 2 df gives 0.78860 here; the exact value agrees closely at this size.
    let p = triple_exact_test(
        1_000_000_000,
        1_000_020_000,
        1_000_005_000,
        1_000_010_000,
        999_990_000,
        999_980_000,
    );
    assert!(p.is_finite() && (0.0..=1.0).contains(&p), "p = {}", p);
    assert_p_close(p, 0.7885968416708539, 1e-3, "near-null 1e9");
}

#[test]
fn test_extreme_counts() {
    let g = 1_000_000_000;
    assert_eq!(triple_exact_test(g, g, g, g, g, g), 1.0);
    assert_eq!(triple_exact_test(g, 0, 0, 0, g, g), 0.0);
    assert_eq!(triple_exact_test(0, 0, 0, 0, 0, 0), 1.0);
}

#[test]
fn test_interleaved_constructor_matches_row_major() {
    let t = ContingencyTable2x3::from_interleaved([3, 1, 1, 5, 4, 9]);
    assert_eq!(t.cells, [[3, 1, 4], [1, 5, 9]]);
    assert_p_close(t.p_value(), 0.2411271144613452, 1e-9, "interleaved");
}
