//! Cross-function identities of the dilogarithm family
//!
//! These tests verify the public API against the classical functional
//! equations rather than tabulated values: reflection and inversion for
//! the real dilogarithm, real/complex consistency on the real axis, and
//! the symmetry/periodicity laws of the Clausen functions.

use num_complex::Complex64;
use polylog::{cl2, cl2f, cl3, cl3f, cli2, cli2_parts, li2, neg_eta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    let diff = (a - b).abs();
    assert!(diff < tol, "{}: {} vs {}, diff {}", msg, a, b, diff);
}

#[test]
fn test_li2_reflection_identity() {
    // Li2(x) + Li2(1-x) = π²/6 - ln(x) ln(1-x) on (0, 1)
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(1e-10..1.0);
        let lhs = li2(x) + li2(1.0 - x);
        let rhs = PI * PI / 6.0 - x.ln() * (1.0 - x).ln();
        assert_close(lhs, rhs, 1e-13, &format!("reflection at x = {}", x));
    }
}

#[test]
fn test_li2_inversion_identity() {
    // Li2(x) + Li2(1/x) = π²/3 - ln²(x)/2 for x > 1
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(1.0..1e4);
        let lhs = li2(x) + li2(1.0 / x);
        let rhs = PI * PI / 3.0 - 0.5 * x.ln().powi(2);
        assert_close(lhs, rhs, 1e-12, &format!("inversion at x = {}", x));
    }
}

#[test]
fn test_li2_landen_identity() {
    // Li2(-x/(1-x)) = -Li2(x) - ln²(1-x)/2 on (0, 1)
    let mut rng = StdRng::seed_from_u64(44);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(0.0..0.99);
        let lhs = li2(-x / (1.0 - x));
        let rhs = -li2(x) - 0.5 * (1.0 - x).ln().powi(2);
        assert_close(lhs, rhs, 1e-12, &format!("Landen at x = {}", x));
    }
}

#[test]
fn test_cli2_real_axis_consistency() {
    let mut rng = StdRng::seed_from_u64(45);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(-10.0..1.0);
        let z = cli2(Complex64::new(x, 0.0));
        assert_eq!(z.re, li2(x), "Re cli2({} + 0i)", x);
        assert_eq!(z.im, 0.0, "Im cli2({} + 0i)", x);
    }
    // above the cut: cli2(x) = li2(x) - iπ ln(x)
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(1.0..100.0);
        let z = cli2(Complex64::new(x, 0.0));
        assert_eq!(z.re, li2(x));
        assert_close(z.im, -PI * x.ln(), 1e-13, &format!("cut at x = {}", x));
    }
}

#[test]
fn test_cli2_conjugation_symmetry() {
    // Li2(z̄) = conj(Li2(z)) away from the branch cut
    let mut rng = StdRng::seed_from_u64(46);
    for _ in 0..1000 {
        let z = Complex64::new(rng.gen_range(-3.0..3.0), rng.gen_range(0.01..3.0));
        let a = cli2(z.conj());
        let b = cli2(z).conj();
        assert!(
            (a - b).norm() < 1e-13,
            "conjugation at z = {}: {} vs {}",
            z,
            a,
            b
        );
    }
}

#[test]
fn test_cli2_agrees_with_clausen_on_unit_circle() {
    // Li2(e^{iθ}) = Sl2(θ) + i Cl2(θ); check both parts against cl2/cl3-grade
    // accuracy using the series real part π²/6 - πθ/2 + θ²/4 for θ in [0, 2π)
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..1000 {
        let theta: f64 = rng.gen_range(0.01..2.0 * PI - 0.01);
        let z = cli2(Complex64::new(theta.cos(), theta.sin()));
        let sl2 = PI * PI / 6.0 - PI * theta / 2.0 + theta * theta / 4.0;
        assert_close(z.re, sl2, 1e-12, &format!("Re Li2(e^i{})", theta));
        assert_close(z.im, cl2(theta), 1e-12, &format!("Im Li2(e^i{})", theta));
    }
}

#[test]
fn test_cli2_parts_marshals() {
    let mut re = 0.0;
    let mut im = 0.0;
    cli2_parts(0.3, 0.4, &mut re, &mut im);
    let z = cli2(Complex64::new(0.3, 0.4));
    assert_eq!(re, z.re);
    assert_eq!(im, z.im);
}

#[test]
fn test_clausen_symmetry_and_period() {
    let mut rng = StdRng::seed_from_u64(48);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(-20.0..20.0);
        assert_eq!(cl2(-x), -cl2(x), "Cl2 odd at {}", x);
        assert_eq!(cl3(-x), cl3(x), "Cl3 even at {}", x);
        assert_close(cl2(x + 2.0 * PI), cl2(x), 1e-11, &format!("Cl2 period at {}", x));
        assert_close(cl3(x + 2.0 * PI), cl3(x), 1e-11, &format!("Cl3 period at {}", x));
    }
}

#[test]
fn test_clausen_duplication() {
    // Cl2(2θ) = 2 Cl2(θ) - 2 Cl2(π - θ)
    let mut rng = StdRng::seed_from_u64(49);
    for _ in 0..1000 {
        let theta: f64 = rng.gen_range(0.0..PI);
        let lhs = cl2(2.0 * theta);
        let rhs = 2.0 * cl2(theta) - 2.0 * cl2(PI - theta);
        assert_close(lhs, rhs, 1e-12, &format!("duplication at θ = {}", theta));
    }
}

#[test]
fn test_f32_tier_tracks_f64_tier() {
    let mut rng = StdRng::seed_from_u64(50);
    for _ in 0..1000 {
        let x: f32 = rng.gen_range(-20.0f32..20.0);
        assert!(
            (cl2f(x) as f64 - cl2(x as f64)).abs() < 5e-6,
            "cl2f at {}",
            x
        );
        assert!(
            (cl3f(x) as f64 - cl3(x as f64)).abs() < 5e-6,
            "cl3f at {}",
            x
        );
    }
}

#[test]
fn test_neg_eta_against_li2_family() {
    // Li_2(-1) = -π²/12 ties the eta table to the dilogarithm
    assert_close(neg_eta(2), li2(-1.0), 1e-15, "η(2) vs Li2(-1)");
}
