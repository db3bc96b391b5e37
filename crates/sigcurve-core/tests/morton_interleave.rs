// crates/sigcurve-core/tests/morton_interleave.rs

use sigcurve_core::curve::morton;
use sigcurve_core::{encode_morton, CurveError, EncodeConfig};

#[test]
fn two_dims_three_bits_worked_example() {
    // x=5=0b101, y=3=0b011 -> bits (from 0) 1,1,0,1,1,0 -> 0b011011
    let out = encode_morton(&[[5u64, 3]], 3).unwrap();
    assert_eq!(out, vec![27]);
}

#[test]
fn dimension_zero_owns_every_dth_bit() {
    assert_eq!(encode_morton(&[[0xFFu64, 0]], 8).unwrap(), vec![0x5555]);
    assert_eq!(encode_morton(&[[0u64, 0xFF]], 8).unwrap(), vec![0xAAAA]);
    assert_eq!(encode_morton(&[[1u64, 2, 3, 4]], 4).unwrap(), vec![2149]);
}

#[test]
fn single_dimension_is_identity_on_low_bits() {
    let rows: Vec<[u64; 1]> = (0u64..64).map(|v| [v]).collect();
    let out = encode_morton(&rows, 6).unwrap();
    assert_eq!(out, (0u64..64).collect::<Vec<_>>());
}

#[test]
fn full_width_single_dimension() {
    let out = encode_morton(&[[u64::MAX], [0x8000_0000_0000_0001]], 64).unwrap();
    assert_eq!(out, vec![u64::MAX, 0x8000_0000_0000_0001]);
}

#[test]
fn high_bits_are_truncated() {
    let bits = 5u32;
    let wrap = 1u64 << bits;
    for v in [0u64, 1, 7, 19, 31] {
        let a = encode_morton(&[[v, 3, 9]], bits).unwrap();
        let b = encode_morton(&[[v + wrap, 3, 9]], bits).unwrap();
        let c = encode_morton(&[[3, v + 5 * wrap, 9]], bits).unwrap();
        let d = encode_morton(&[[3, v, 9]], bits).unwrap();
        assert_eq!(a, b, "v={v}");
        assert_eq!(c, d, "v={v}");
    }
}

#[test]
fn output_is_index_aligned_with_input() {
    let rows = [[5u64, 3], [0, 0], [7, 7], [1, 0]];
    let out = encode_morton(&rows, 3).unwrap();
    assert_eq!(out.len(), rows.len());
    for (k, row) in rows.iter().enumerate() {
        assert_eq!(out[k], encode_morton(&[*row], 3).unwrap()[0], "row {k}");
    }
}

#[test]
fn encode_one_checks_sample_width() {
    let cfg = EncodeConfig::new(2, 3).unwrap();
    assert_eq!(morton::encode_one(&[5, 3], &cfg).unwrap(), 27);
    assert!(matches!(
        morton::encode_one(&[5, 3, 1], &cfg),
        Err(CurveError::Shape(_))
    ));
}

#[test]
fn over_budget_is_rejected() {
    let err = encode_morton(&[[1u64, 2, 3]], 22).unwrap_err();
    assert_eq!(
        err,
        CurveError::Range {
            dims: 3,
            bits: 22,
            total: 66
        }
    );
}
