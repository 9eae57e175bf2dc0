//! Complex dilogarithm Li₂(z)
//!
//! The argument is mapped into the convergence disk of a Bernoulli-number
//! series through the standard inversion and reflection identities, after
//! the SPheno implementation.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::dilog::li2;

/// Even Bernoulli numbers over factorials, B₂ₙ/(2n+1)!.
const BERNOULLI_F: [f64; 10] = [
    -1.0 / 4.0,
    1.0 / 36.0,
    -1.0 / 3600.0,
    1.0 / 211680.0,
    -1.0 / 10886400.0,
    1.0 / 526901760.0,
    -4.064761645144226e-11,
    8.921691020456453e-13,
    -1.993929586072108e-14,
    4.518980029619918e-16,
];

/// Complex dilogarithm Li₂(z).
///
/// ```text
/// Li₂(z) = -∫₀¹ ln(1 - z t)/t dt
/// ```
///
/// # Properties
/// - Li₂(z) agrees with [`li2`] on the real axis for Re(z) ≤ 1
/// - Li₂(x + 0i) = li2(x) - iπ·ln(x) for real x > 1 (branch cut)
/// - Li₂(z) ≈ z for |z|² below machine epsilon
///
/// # Algorithm
/// Arguments on the real axis delegate to the real evaluator. Otherwise
/// z is mapped into the unit disk with Re(z) ≤ 0.5, where a 10-term
/// series in scaled Bernoulli numbers converges, and the partial result
/// is recombined with the logarithmic corrections of the selected map.
pub fn cli2(z: Complex64) -> Complex64 {
    let rz = z.re;
    let iz = z.im;
    let nz = rz * rz + iz * iz;

    // special cases
    if iz == 0.0 {
        if rz <= 1.0 {
            return Complex64::new(li2(rz), 0.0);
        }
        return Complex64::new(li2(rz), -PI * rz.ln());
    }
    if nz < f64::EPSILON {
        return z;
    }

    // transformation to |z| < 1, Re(z) <= 0.5
    let (cy, cz, jsgn, ipi12) = if rz <= 0.5 {
        if nz > 1.0 {
            let lz = (-z).ln();
            (-0.5 * lz * lz, -(1.0 - 1.0 / z).ln(), -1.0, -2.0)
        } else {
            (Complex64::new(0.0, 0.0), -(1.0 - z).ln(), 1.0, 0.0)
        }
    } else if nz <= 2.0 * rz {
        let cz = -z.ln();
        (cz * (1.0 - z).ln(), cz, -1.0, 2.0)
    } else {
        let lz = (-z).ln();
        (-0.5 * lz * lz, -(1.0 - 1.0 / z).ln(), -1.0, -2.0)
    };

    // the dilogarithm
    let cz2 = cz * cz;
    let sum = cz
        + cz2
            * (BERNOULLI_F[0]
                + cz * (BERNOULLI_F[1]
                    + cz2 * (BERNOULLI_F[2]
                        + cz2 * (BERNOULLI_F[3]
                            + cz2 * (BERNOULLI_F[4]
                                + cz2 * (BERNOULLI_F[5]
                                    + cz2 * (BERNOULLI_F[6]
                                        + cz2 * (BERNOULLI_F[7]
                                            + cz2 * (BERNOULLI_F[8]
                                                + cz2 * BERNOULLI_F[9])))))))));

    jsgn * sum + cy + ipi12 * PI * PI / 12.0
}

/// Marshalling entry point for callers without a native complex type.
///
/// Computes [`cli2`] of `re + i·im` and writes the real and imaginary
/// parts of the result through the caller-supplied output locations.
/// Performs no logic beyond marshalling.
#[no_mangle]
pub extern "C" fn cli2_parts(re: f64, im: f64, res_re: &mut f64, res_im: &mut f64) {
    let result = cli2(Complex64::new(re, im));
    *res_re = result.re;
    *res_im = result.im;
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 5e-15;

    fn assert_close(a: Complex64, b: Complex64, tol: f64, msg: &str) {
        let diff = (a - b).norm();
        assert!(diff < tol, "{}: expected {}, got {}, diff {}", msg, b, a, diff);
    }

    #[test]
    fn test_cli2_region_coverage() {
        // one reference value per disk-mapping region, 30-digit evaluations
        // rounded to f64
        let cases = [
            // direct map: Re(z) <= 0.5, |z| <= 1
            (0.3, 0.4, 0.2665968667427404, 0.4613628918191091),
            // inversion map: Re(z) <= 0.5, |z| > 1
            (-2.0, 1.0, -1.4890920430306580, 0.5409310031985790),
            (-0.5, -3.0, -1.1983400447853274, -1.8761242417549910),
            // complementary map: Re(z) > 0.5, |z|^2 <= 2 Re(z)
            (0.6, 0.1, 0.7195889421744275, 0.1518968133202422),
            (0.9, 0.05, 1.2898324980216134, 0.1261249002540364),
            // inversion fallback: Re(z) > 0.5, |z|^2 > 2 Re(z)
            (2.0, 2.0, 0.3449731262617826, 2.7342872186403562),
        ];
        for &(re, im, want_re, want_im) in &cases {
            assert_close(
                cli2(Complex64::new(re, im)),
                Complex64::new(want_re, want_im),
                TOL,
                &format!("cli2({} + {}i)", re, im),
            );
        }
    }

    #[test]
    fn test_cli2_real_axis_delegates() {
        for &x in &[-4.0, -1.0, 0.0, 0.25, 0.5, 1.0] {
            let z = cli2(Complex64::new(x, 0.0));
            assert_eq!(z.im, 0.0, "Im cli2({}) on the cut-free axis", x);
            assert_eq!(z.re, li2(x), "Re cli2({})", x);
        }
    }

    #[test]
    fn test_cli2_branch_cut() {
        // x > 1: cli2(x + 0i) = li2(x) - iπ ln(x)
        for &x in &[1.5, 2.0, 3.0, 10.0] {
            let z = cli2(Complex64::new(x, 0.0));
            assert_eq!(z.re, li2(x));
            assert_close(
                Complex64::new(0.0, z.im),
                Complex64::new(0.0, -PI * x.ln()),
                1e-14,
                &format!("branch cut at x = {}", x),
            );
        }
    }

    #[test]
    fn test_cli2_near_zero_first_order() {
        let z = Complex64::new(1e-9, 1e-9);
        let r = cli2(z);
        assert_eq!(r, z, "cli2(z) = z below machine epsilon");
    }

    #[test]
    fn test_cli2_nan_propagates() {
        let r = cli2(Complex64::new(f64::NAN, 1.0));
        assert!(r.re.is_nan() && r.im.is_nan());
    }
}
