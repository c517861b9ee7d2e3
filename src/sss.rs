use gf256::gf256;
use rand::Rng;
use std::collections::HashMap;

use crate::constants::MAX_SHARES;
use crate::error::{Error, Result};

/// Represents a polynomial over the Galois field GF(2^8).
///
/// Each polynomial is represented by its coefficients, stored in a vector.
/// Coefficients are elements of the GF(2^8) field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// The coefficients of the polynomial, lowest degree first.
    pub coefficients: Vec<gf256>,
}

impl Polynomial {
    /// Constructs a new polynomial of a given degree with random coefficients,
    /// where the constant term is the provided secret.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the polynomial.
    /// * `secret` - The secret (constant term) of the polynomial.
    pub fn new(degree: usize, secret: gf256) -> Self {
        let mut rng = rand::thread_rng();
        let mut coefficients = vec![secret; degree + 1];

        for coeff in coefficients.iter_mut().skip(1) {
            *coeff = gf256::new(rng.gen());
        }

        Polynomial { coefficients }
    }

    /// Evaluates the polynomial at a given point.
    pub fn evaluate(&self, x: gf256) -> gf256 {
        let mut result = gf256::new(0);
        let mut term = gf256::new(1);

        for &coeff in &self.coefficients {
            result += coeff * term;
            term *= x;
        }

        result
    }
}

/// Splits a secret into a specified number of shares using Shamir's Secret Sharing Scheme.
///
/// Every byte of the secret gets its own random polynomial of degree `threshold - 1`. Share `i`
/// holds the evaluations at `x = i` for `i` in `1..=shares`.
///
/// # Errors
/// Returns `Error::SharingMath` if the threshold is zero, the number of shares is less than the
/// threshold, or more shares are requested than there are non-zero field elements.
///
/// # Examples
/// ```rust
/// use wordshare::sss::split_secret;
///
/// let shares = split_secret(b"hello world", 3, 5).unwrap();
/// assert_eq!(shares.len(), 5);
/// ```
pub fn split_secret(
    secret: &[u8],
    threshold: usize,
    shares: usize,
) -> Result<HashMap<u8, Vec<u8>>> {
    if threshold == 0 {
        return Err(Error::SharingMath("Invalid threshold".to_string()));
    }

    if shares < threshold || shares > MAX_SHARES {
        return Err(Error::SharingMath("Invalid count".to_string()));
    }

    let mut shares_map: HashMap<u8, Vec<u8>> = (1..=shares as u8)
        .map(|i| (i, Vec::with_capacity(secret.len())))
        .collect();

    for &byte in secret {
        let poly = Polynomial::new(threshold - 1, gf256::new(byte));

        for (&i, share) in shares_map.iter_mut() {
            share.push(poly.evaluate(gf256::new(i)).into());
        }
    }

    Ok(shares_map)
}

/// Combines shares to reconstruct a secret using Shamir's Secret Sharing Scheme.
///
/// The result is only the secret if at least `threshold` shares of one split are given; with
/// fewer shares it is an unrelated byte string.
///
/// # Errors
/// Returns `Error::InsufficientOrInvalidShares` if the map is empty, an x coordinate is zero or the
/// shares differ in length.
pub fn combine_shares(shares_map: &HashMap<u8, Vec<u8>>) -> Result<Vec<u8>> {
    let secret_length = shares_map
        .values()
        .next()
        .ok_or_else(|| Error::InsufficientOrInvalidShares("no shares".to_string()))?
        .len();

    if shares_map.contains_key(&0) {
        return Err(Error::InsufficientOrInvalidShares(
            "share index 0 is not a valid point".to_string(),
        ));
    }

    if shares_map.values().any(|v| v.len() != secret_length) {
        return Err(Error::InsufficientOrInvalidShares(
            "shares differ in length".to_string(),
        ));
    }

    let mut secret = vec![0; secret_length];
    let mut points = Vec::with_capacity(shares_map.len());

    for (i, byte) in secret.iter_mut().enumerate() {
        points.clear();
        for (&k, v) in shares_map {
            points.push((gf256::new(k), gf256::new(v[i])));
        }
        *byte = interpolate(&points, gf256::new(0)).into();
    }

    Ok(secret)
}

/// Performs Lagrange interpolation on a set of points to find the value of the polynomial at `x`.
///
/// The x coordinates must be distinct, which the keys of a share map guarantee.
fn interpolate(points: &[(gf256, gf256)], x: gf256) -> gf256 {
    let mut value = gf256::new(0);

    for (i, &(a_x, a_y)) in points.iter().enumerate() {
        let mut weight = gf256::new(1);

        for (j, &(b_x, _)) in points.iter().enumerate() {
            if i != j {
                let top = x + b_x; // XOR in GF(2^8) is equivalent to addition
                let bottom = a_x + b_x;
                weight *= top / bottom;
            }
        }

        value += weight * a_y;
    }

    value
}
