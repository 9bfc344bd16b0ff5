//! 2x2 Fisher exact test

use crate::helpers::{assert_p_close, parse_fixture, PAIR_FIXTURE};
use fisher_exact::pair_exact_test;
use fisher_exact::stats::ContingencyTable2x2;

/// Reference values below come from log-space enumeration at 40 digits.
#[test]
fn test_reference_small_table() {
    let p = pair_exact_test(1, 9, 11, 3);
    assert_p_close(p, 0.0027594561852200836, 1e-6, "pair(1, 9, 11, 3)");
}

#[test]
fn test_reference_large_tables() {
    let cases = [
        ((5000, 4000, 3000, 7000), 1.6477532430744784e-280),
        ((1000, 2000, 2500, 1500), 1.3392218934400168e-130),
        ((12000, 10000, 11000, 13000), 8.6414232929141e-78),
    ];
    for ((a, b, c, d), expected) in cases {
        let p = pair_exact_test(a, b, c, d);
        assert_p_close(p, expected, 1e-9, &format!("pair({}, {}, {}, {})", a, b, c, d));
    }
}

#[test]
fn test_symmetry_is_bit_identical() {
    for row in parse_fixture(PAIR_FIXTURE) {
        let [a, b, c, d] = row.cells[..] else {
            unreachable!()
        };
        let p = pair_exact_test(a, b, c, d);
        assert_eq!(p.to_bits(), pair_exact_test(b, a, d, c).to_bits(), "{:?}", row.cells);
        assert_eq!(p.to_bits(), pair_exact_test(c, d, a, b).to_bits(), "{:?}", row.cells);
    }
}

/// p-values along one marginal family, indexed by m11.
fn family(r1: u32, r2: u32, c1: u32) -> Vec<f64> {
    let lo = c1.saturating_sub(r2);
    let hi = r1.min(c1);
    (lo..=hi)
        .map(|x| pair_exact_test(x, r1 - x, c1 - x, r2 + x - c1))
        .collect()
}

#[test]
fn test_monotone_away_from_mode() {
    for (r1, r2, c1) in [(30, 25, 28), (100, 40, 70), (7, 90, 20), (500, 500, 500)] {
        let ps = family(r1, r2, c1);
        let mode = ps
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(ps[mode], 1.0);
        for i in 0..mode {
            assert!(ps[i] <= ps[i + 1] * (1.0 + 1e-12), "{:?} at {}", (r1, r2, c1), i);
        }
        for i in mode..ps.len() - 1 {
            assert!(ps[i + 1] <= ps[i] * (1.0 + 1e-12), "{:?} at {}", (r1, r2, c1), i);
        }
    }
}

#[test]
fn test_extreme_counts() {
    let m = u32::MAX;
    assert_eq!(pair_exact_test(m, m, m, m), 1.0);
    assert_eq!(pair_exact_test(0, m, m, 0), 0.0);
    assert_eq!(pair_exact_test(1_000_000_000, 1_000_000_000, 1_000_000_000, 1_000_000_000), 1.0);
    let p = pair_exact_test(1_000_000_000, 999_900_000, 999_950_000, 1_000_050_000);
    assert!(p.is_finite() && (0.0..=1.0).contains(&p), "{}", p);
}

#[test]
fn test_table_type_delegates() {
    let t = ContingencyTable2x2::new(10, 2, 3, 15);
    assert_p_close(t.p_value(), 0.0005367241191434358, 1e-9, "table p_value");
}
