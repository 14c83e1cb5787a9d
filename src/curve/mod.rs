//! Affine short Weierstrass curve arithmetic over a prime field, parameterised
//! at runtime by a [`CurveParams`] value rather than by const generics: the
//! two curves this crate needs (SPK, LKP) are instance data, not types.

pub mod params;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{bigint::mod_inverse, error::Result};

/// A point on a short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`,
/// either the distinguished point at infinity or an affine coordinate pair.
///
/// Immutable value type; every operation returns a new `Point` rather than
/// mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The identity element of the curve's group.
    Infinity,
    /// An affine point `(x, y)` with `0 <= x, y < p`.
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Constructs an affine point without checking it lies on any curve.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Returns `(x, y)` for an affine point, or `None` for infinity.
    pub fn xy(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

/// Parameters defining one elliptic curve instance: its equation, its base
/// field, its generator and public key, and the scalar (order, private key)
/// data needed to sign and verify over it.
///
/// `SPK` and `LKP` are independent instances of this struct; nothing in the
/// engine ever mixes values computed under one with the other.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub p: BigUint,
    /// Coefficient `a` of `y^2 = x^3 + a*x + b`.
    pub a: BigUint,
    /// Coefficient `b` of `y^2 = x^3 + a*x + b`.
    pub b: BigUint,
    /// Generator point of the prime-order subgroup.
    pub g: Point,
    /// Public key point, `priv * G`.
    pub k: Point,
    /// Order of the prime-order subgroup.
    pub n: BigUint,
    /// The private scalar such that `k == priv * g`.
    pub priv_key: BigUint,
}

impl CurveParams {
    /// Checks that an affine point satisfies this curve's equation.
    /// The point at infinity trivially satisfies it.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let Some((x, y)) = point.xy() else {
            return true;
        };
        let lhs = (y * y) % &self.p;
        let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
        lhs == rhs
    }

    /// Adds two points on this curve, following the textbook affine
    /// addition law: infinity is the identity, a point plus its negation is
    /// infinity, equal points are doubled via the tangent slope, and
    /// distinct points use the secant slope.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (p1, p2) = match (lhs, rhs) {
            (Point::Infinity, other) => return Ok(other.clone()),
            (other, Point::Infinity) => return Ok(other.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };
        let (x1, y1) = p1;
        let (x2, y2) = p2;
        let p = &self.p;

        let slope = if x1 == x2 {
            if y1 == y2 {
                if y1.is_zero() {
                    return Ok(Point::Infinity);
                }
                // Tangent slope: (3*x1^2 + a) / (2*y1).
                let num = (BigUint::from(3u32) * x1 * x1 + &self.a) % p;
                let den = (BigUint::from(2u32) * y1) % p;
                (num * mod_inverse(&den, p)?) % p
            } else {
                // x1 == x2 but y1 != y2: P and Q are inverses of each other.
                return Ok(Point::Infinity);
            }
        } else {
            // Secant slope: (y2 - y1) / (x2 - x1), computed mod p.
            let num = sub_mod(y2, y1, p);
            let den = sub_mod(x2, x1, p);
            (num * mod_inverse(&den, p)?) % p
        };

        let x3 = sub_mod(&sub_mod(&((&slope * &slope) % p), x1, p), x2, p);
        let y3 = sub_mod(&((&slope * &sub_mod(x1, &x3, p)) % p), y1, p);

        Ok(Point::affine(x3, y3))
    }

    /// Doubles a point; a thin convenience wrapper over `add(p, p)`.
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Scalar multiplication via left-to-right binary double-and-add.
    /// `scalar == 0` yields the point at infinity. `scalar` is a `BigUint`
    /// and therefore never negative, satisfying the "reject negative
    /// scalars" requirement by construction.
    pub fn scalar_mul(&self, point: &Point, scalar: &BigUint) -> Result<Point> {
        let mut result = Point::Infinity;
        for bit in bits_be(scalar) {
            result = self.double(&result)?;
            if bit {
                result = self.add(&result, point)?;
            }
        }
        Ok(result)
    }
}

/// Subtraction mod `p`, wrapping around when `lhs < rhs`.
fn sub_mod(lhs: &BigUint, rhs: &BigUint, p: &BigUint) -> BigUint {
    if lhs >= rhs {
        (lhs - rhs) % p
    } else {
        p - ((rhs - lhs) % p)
    }
}

/// Most-significant-bit-first iterator over a `BigUint`'s bits, with no
/// leading zero bits (the empty iterator for zero).
fn bits_be(n: &BigUint) -> impl Iterator<Item = bool> + '_ {
    let bits = n.bits();
    (0..bits).rev().map(move |i| n.bit(i))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::Zero;

    use super::*;
    use crate::curve::params::{lkp_curve, spk_curve};

    #[test]
    fn generator_is_on_curve() {
        for curve in [spk_curve(), lkp_curve()] {
            assert!(curve.is_on_curve(&curve.g));
            assert!(curve.is_on_curve(&curve.k));
        }
    }

    #[test]
    fn public_key_matches_private_scalar() {
        for curve in [spk_curve(), lkp_curve()] {
            let computed = curve.scalar_mul(&curve.g, &curve.priv_key).unwrap();
            assert_eq!(computed, curve.k);
        }
    }

    #[test]
    fn scalar_zero_is_infinity() {
        let curve = spk_curve();
        let result = curve.scalar_mul(&curve.g, &BigUint::zero()).unwrap();
        assert!(result.is_infinity());
    }

    #[test]
    fn addition_is_homomorphic_in_the_scalar() {
        let curve = spk_curve();
        let a = BigUint::from(12345u32);
        let b = BigUint::from(6789u32);

        let ag = curve.scalar_mul(&curve.g, &a).unwrap();
        let bg = curve.scalar_mul(&curve.g, &b).unwrap();
        let sum_points = curve.add(&ag, &bg).unwrap();

        let sum_scalar = (&a + &b) % &curve.n;
        let expected = curve.scalar_mul(&curve.g, &sum_scalar).unwrap();

        assert_eq!(sum_points, expected);
        assert!(curve.is_on_curve(&sum_points));
    }

    #[test]
    fn point_plus_its_negation_is_infinity() {
        let curve = spk_curve();
        let (x, y) = curve.g.xy().unwrap();
        let neg = Point::affine(x.clone(), &curve.p - y);
        let sum = curve.add(&curve.g, &neg).unwrap();
        assert!(sum.is_infinity());
    }
}
