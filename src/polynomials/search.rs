//! Exhaustive primitivity search over GF(2).
//!
//! A degree-d polynomial p with constant term 1 is primitive exactly when the
//! residue class of x has multiplicative order 2^d - 1 modulo p:
//!
//! x^(2^d) ≡ x (mod p), and x^((2^d - 1)/q) ≢ 1 for every prime q | 2^d - 1
//!
//! Candidates are enumerated by their encoded interior coefficients, so the
//! output is ascending in the same encoding the curated tables use.

use rayon::prelude::*;

/// Expands an encoded value into the full polynomial bit pattern.
#[inline]
fn full_polynomial(degree: u32, encoded: u64) -> u64 {
    (1 << degree) | (encoded << 1) | 1
}

/// Multiplies `a` and `b` modulo `modulus`; both operands are already reduced.
#[inline]
fn mul_mod(mut a: u64, mut b: u64, modulus: u64, degree: u32) -> u64 {
    let top = 1u64 << degree;
    let mut acc = 0;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        b >>= 1;
        a <<= 1;
        if a & top != 0 {
            a ^= modulus;
        }
    }
    acc
}

fn pow_mod(mut base: u64, mut exponent: u64, modulus: u64, degree: u32) -> u64 {
    let mut result = 1;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus, degree);
        }
        base = mul_mod(base, base, modulus, degree);
        exponent >>= 1;
    }
    result
}

/// Distinct prime factors by trial division; `n` is at most 2^27 - 1.
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut q = 2;
    while q * q <= n {
        if n % q == 0 {
            factors.push(q);
            while n % q == 0 {
                n /= q;
            }
        }
        q += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn is_primitive_with(degree: u32, encoded: u64, cofactors: &[u64]) -> bool {
    let modulus = full_polynomial(degree, encoded);
    // x reduces to 1 modulo x + 1
    let x = if degree == 1 { 1 } else { 2 };

    // Even weight means x + 1 divides p
    if degree > 1 && modulus.count_ones() % 2 == 0 {
        return false;
    }

    let mut y = x;
    for _ in 0..degree {
        y = mul_mod(y, y, modulus, degree);
    }
    if y != x {
        return false;
    }

    cofactors
        .iter()
        .all(|&e| pow_mod(x, e, modulus, degree) != 1)
}

fn cofactors(degree: u32) -> Vec<u64> {
    let order = (1u64 << degree) - 1;
    prime_factors(order).into_iter().map(|q| order / q).collect()
}

/// Tests whether the encoded polynomial of the given degree is primitive.
///
/// Returns `false` for degree 0, for degrees above 62, and for encodings that
/// do not fit in `degree - 1` bits.
pub fn is_primitive(degree: u32, encoded: u64) -> bool {
    if degree == 0 || degree > 62 || encoded >= 1 << (degree - 1) {
        return false;
    }
    is_primitive_with(degree, encoded, &cofactors(degree))
}

/// Enumerates every primitive polynomial of `degree`, ascending by encoding.
///
/// The candidate range is split across the rayon pool; collection keeps the
/// enumeration order.
pub fn primitive_polynomials(degree: u32) -> Vec<i64> {
    if degree == 0 || degree > 62 {
        return Vec::new();
    }
    let cofactors = cofactors(degree);
    (0..1u64 << (degree - 1))
        .into_par_iter()
        .filter(|&encoded| is_primitive_with(degree, encoded, &cofactors))
        .map(|encoded| encoded as i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        // x^4 + x + 1 and x^4 + x^3 + 1
        assert!(is_primitive(4, 1));
        assert!(is_primitive(4, 4));
        // x^4 + x^2 + 1 = (x^2 + x + 1)^2
        assert!(!is_primitive(4, 2));
        // x^4 + x^3 + x^2 + x + 1 is irreducible but x has order 5
        assert!(!is_primitive(4, 7));
        // x^5 + x^4 + x^3 + x + 1
        assert!(is_primitive(5, 13));
    }

    #[test]
    fn test_base_case() {
        assert!(is_primitive(1, 0));
        assert_eq!(primitive_polynomials(1), vec![0]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(!is_primitive(0, 0));
        assert!(!is_primitive(3, 4));
        assert!(primitive_polynomials(0).is_empty());
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(63), vec![3, 7]);
        assert_eq!(prime_factors(131_071), vec![131_071]);
        assert_eq!(prime_factors(1), Vec::<u64>::new());
    }

    #[test]
    fn test_degree_eight_count() {
        // phi(255) / 8
        assert_eq!(primitive_polynomials(8).len(), 16);
    }
}
