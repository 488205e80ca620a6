//! Integration tests for shifts, extraction, concatenation and replication.

use resample_ensemble::{Complex64, ElementKind, Ensemble, EnsembleError};

fn real(nbin: usize, length: usize, data: Vec<f64>) -> Ensemble {
    Ensemble::from_real_bins(nbin, length, data).unwrap()
}

fn sample() -> Ensemble {
    real(2, 4, vec![5.0, 6.0, 7.0, 8.0, 15.0, 16.0, 17.0, 18.0])
}

fn row(e: &Ensemble, bin: usize) -> Vec<f64> {
    e.bin(bin).iter().map(|z| z.re).collect()
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

#[test]
fn positive_shift_zero_fills_tail() {
    let shifted = sample().shift(1).unwrap();
    assert_eq!(row(&shifted, 0), vec![6.0, 7.0, 8.0, 0.0]);
    assert_eq!(row(&shifted, 1), vec![16.0, 17.0, 18.0, 0.0]);
}

#[test]
fn negative_shift_zero_fills_head() {
    let shifted = sample().shift(-2).unwrap();
    assert_eq!(row(&shifted, 0), vec![0.0, 0.0, 5.0, 6.0]);
}

#[test]
fn shift_by_full_length_zeroes_everything() {
    let shifted = sample().shift(4).unwrap();
    assert!(shifted.as_slice().iter().all(|z| z.re == 0.0));
}

#[test]
fn shift_beyond_length_is_range_error() {
    assert!(matches!(sample().shift(5), Err(EnsembleError::Range { op: "shift", .. })));
    assert!(matches!(sample().shift(-5), Err(EnsembleError::Range { .. })));
}

#[test]
fn shift_back_zeroes_boundary() {
    let e = sample();
    let round_trip = e.shift(1).unwrap().shift(-1).unwrap();
    assert_eq!(row(&round_trip, 0), vec![0.0, 6.0, 7.0, 8.0]);
    assert_eq!(row(&round_trip, 1), vec![0.0, 16.0, 17.0, 18.0]);
}

#[test]
fn circular_shift_wraps() {
    let e = sample();
    assert_eq!(row(&e.circular_shift(1), 0), vec![6.0, 7.0, 8.0, 5.0]);
    assert_eq!(row(&e.circular_shift(-1), 0), vec![8.0, 5.0, 6.0, 7.0]);
    assert_eq!(row(&e.circular_shift(9), 1), vec![16.0, 17.0, 18.0, 15.0]);
}

#[test]
fn circular_shift_inverse_is_exact() {
    let e = sample();
    for n in -5..=5 {
        assert_eq!(e.circular_shift(n).circular_shift(-n), e);
    }
}

// ---------------------------------------------------------------------------
// Extract and concatenate
// ---------------------------------------------------------------------------

#[test]
fn extract_inclusive_range() {
    let sub = sample().extract(1, 2).unwrap();
    assert_eq!(sub.length(), 2);
    assert_eq!(row(&sub, 0), vec![6.0, 7.0]);
    assert_eq!(row(&sub, 1), vec![16.0, 17.0]);
}

#[test]
fn extract_rejects_bad_bounds() {
    let e = sample();
    assert!(matches!(e.extract(2, 1), Err(EnsembleError::Range { op: "extract", .. })));
    assert!(matches!(e.extract(0, 4), Err(EnsembleError::Range { .. })));
    assert!(matches!(e.extract(4, 4), Err(EnsembleError::Range { .. })));
}

#[test]
fn concatenate_extracted_halves_restores_ensemble() {
    let e = sample();
    for k in 0..e.length() - 1 {
        let head = e.extract(0, k).unwrap();
        let tail = e.extract(k + 1, e.length() - 1).unwrap();
        assert_eq!(head.concatenate(&tail).unwrap(), e);
    }
}

#[test]
fn concatenate_promotes_kind() {
    let a = real(2, 1, vec![1.0, 2.0]);
    let b = Ensemble::from_scalar(Complex64::new(0.0, 1.0), 2, 2).unwrap();
    let c = a.concatenate(&b).unwrap();
    assert_eq!(c.kind(), ElementKind::Complex);
    assert_eq!(c.length(), 3);
    assert_eq!(c.get(1, 0), Complex64::new(2.0, 0.0));
    assert_eq!(c.get(1, 2), Complex64::new(0.0, 1.0));
}

#[test]
fn concatenate_requires_equal_bins() {
    let a = Ensemble::from_scalar(1.0, 2, 3).unwrap();
    let b = Ensemble::from_scalar(1.0, 3, 3).unwrap();
    assert!(matches!(a.concatenate(&b), Err(EnsembleError::Shape { .. })));
}

// ---------------------------------------------------------------------------
// Replicate, reverse, symmetrize
// ---------------------------------------------------------------------------

#[test]
fn replicate_repeats_bins_contiguously() {
    let e = real(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let r = e.replicate(3).unwrap();
    assert_eq!(r.nbin(), 6);
    assert_eq!(r.length(), 2);
    for bin in 0..3 {
        assert_eq!(row(&r, bin), vec![1.0, 2.0]);
    }
    for bin in 3..6 {
        assert_eq!(row(&r, bin), vec![3.0, 4.0]);
    }
}

#[test]
fn replicate_zero_times_fails() {
    assert!(matches!(sample().replicate(0), Err(EnsembleError::Range { .. })));
}

#[test]
fn replicate_count_overflow_is_range_error() {
    let two_bins = Ensemble::from_scalar(1.0, 2, 1).unwrap();
    assert!(matches!(
        two_bins.replicate(usize::MAX),
        Err(EnsembleError::Range { op: "replicate", .. })
    ));

    // bin count fits, total element count does not
    let long = Ensemble::from_scalar(1.0, 1, 2).unwrap();
    assert!(matches!(
        long.replicate(usize::MAX / 2 + 1),
        Err(EnsembleError::Range { op: "replicate", .. })
    ));
}

#[test]
fn reverse_keeps_origin() {
    let r = sample().reverse();
    assert_eq!(row(&r, 0), vec![5.0, 8.0, 7.0, 6.0]);
    assert_eq!(r.reverse(), sample());
}

#[test]
fn symmetrize_averages_with_reflection() {
    let s = sample().symmetrize();
    assert_eq!(row(&s, 0), vec![5.0, 7.0, 7.0, 7.0]);
    assert_eq!(row(&s, 1), vec![15.0, 17.0, 17.0, 17.0]);
}
