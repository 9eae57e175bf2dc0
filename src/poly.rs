//! Polynomial evaluation helpers shared by the rational approximations.

use num_traits::Float;

/// Evaluate a polynomial with ascending coefficients by Horner's scheme.
///
/// `coeffs[k]` is the coefficient of `x^k`. Generic over the float width so
/// the f32 and f64 precision tiers share one implementation.
pub(crate) fn horner<T: Float>(x: T, coeffs: &[T]) -> T {
    coeffs.iter().rev().fold(T::zero(), |p, &c| p * x + c)
}
