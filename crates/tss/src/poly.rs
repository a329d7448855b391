//! Polynomial operations for threshold secret sharing.
//!
//! One polynomial is sampled per secret byte; its constant term is the byte
//! itself and the remaining coefficients are uniformly random. Recovery
//! evaluates the Lagrange interpolation of the shares at x = 0.

use rand::RngCore;

use super::gf256::GF256;

/// Samples a fresh polynomial into `coefficients`.
///
/// The buffer is filled from `rng` and then `coefficients[0]` is overwritten
/// with `secret_byte`, leaving `coefficients.len() - 1` random coefficients.
/// All 256 byte values are possible for the random coefficients, so the
/// leading coefficient may be zero.
///
/// # Errors
/// Propagates a failure of the random source untouched.
///
/// # Examples
/// ```
/// use tss::poly::random_polynomial;
/// use rand_chacha::rand_core::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::from_seed([0; 32]);
/// let mut coefficients = [0u8; 3];
/// random_polynomial(42, &mut coefficients, &mut rng).unwrap();
/// assert_eq!(coefficients[0], 42);
/// ```
pub fn random_polynomial<R: RngCore + ?Sized>(
    secret_byte: u8,
    coefficients: &mut [u8],
    rng: &mut R,
) -> Result<(), rand::Error> {
    rng.try_fill_bytes(coefficients)?;
    if let Some(constant) = coefficients.first_mut() {
        *constant = secret_byte;
    }
    Ok(())
}

/// Evaluates a polynomial at `x`.
///
/// Coefficients are in ascending order of degree, `coefficients[k]` being the
/// coefficient of x^k. The sum is accumulated with a running power of `x`.
///
/// # Examples
/// ```
/// use tss::gf256::GF256;
/// use tss::poly::evaluate_polynomial;
///
/// // f(x) = 5 + 3x + 2x^2
/// let result = evaluate_polynomial(&[5, 3, 2], GF256(0));
/// assert_eq!(result, GF256(5));
/// ```
pub fn evaluate_polynomial(coefficients: &[u8], x: GF256) -> GF256 {
    let mut result = GF256::ZERO;
    let mut power = GF256::ONE;
    for &coefficient in coefficients {
        result = result + GF256(coefficient) * power;
        power = power * x;
    }
    result
}

/// Computes the Lagrange basis polynomials for `xs`, each evaluated at zero.
///
/// Basis `i` is `Π_{k≠i} x_k / (x_k - x_i)`; subtraction is XOR, so this is
/// `x_k / (x_k + x_i)`. The basis depends only on the public x-coordinates
/// and can be reused for every byte position of a secret.
///
/// Duplicate x-coordinates hit the field's zero-divisor policy and yield a
/// zero factor instead of an error; callers must reject duplicates first if
/// they need a meaningful result.
pub fn lagrange_basis_at_zero(xs: &[GF256]) -> Vec<GF256> {
    (0..xs.len())
        .map(|i| {
            xs.iter()
                .enumerate()
                .filter(|&(k, _)| k != i)
                .map(|(_, &x_k)| x_k / (x_k + xs[i]))
                .product::<GF256>()
        })
        .collect()
}

/// Combines y-values with a precomputed basis: `Σ basis_i * y_i`.
pub fn combine(basis: &[GF256], ys: &[GF256]) -> GF256 {
    basis.iter().zip(ys).map(|(&l, &y)| l * y).sum()
}

/// Interpolates the points `(xs[i], ys[i])` and evaluates the result at x = 0.
///
/// `xs` and `ys` are expected to have the same length; extra entries in the
/// longer slice are ignored.
///
/// # Examples
/// ```
/// use tss::gf256::GF256;
/// use tss::poly::interpolate_at_zero;
///
/// // f(x) = 5 + x, so f(1) = 4 and f(2) = 7
/// let secret = interpolate_at_zero(&[GF256(1), GF256(2)], &[GF256(4), GF256(7)]);
/// assert_eq!(secret, GF256(5));
/// ```
pub fn interpolate_at_zero(xs: &[GF256], ys: &[GF256]) -> GF256 {
    combine(&lagrange_basis_at_zero(xs), ys)
}
