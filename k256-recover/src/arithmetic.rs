//! Bridge between arbitrary-width integers and the `k256` group arithmetic.
//!
//! Integers wider than a scalar (candidate x-coordinates, digests, values
//! compared against `p`) are carried as [`BigUint`]. Everything that touches
//! the group goes through `k256`.

use crate::{Error, Result, params};
use core::ops::{Add, Mul, Neg, Sub};
use k256::{
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar,
    elliptic_curve::{
        ff::{Field, PrimeField},
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
};
use num_bigint::BigUint;

/// Size of a serialized field element or scalar in bytes.
pub(crate) const FIELD_SIZE: usize = 32;

/// Converts a big-endian byte array to a [`BigUint`].
pub(crate) fn bytes_to_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts a [`BigUint`] to a zero-padded 32-byte big-endian array.
///
/// Fails when `x` does not fit in 256 bits.
pub(crate) fn biguint_to_bytes(x: &BigUint) -> Result<[u8; FIELD_SIZE]> {
    let be = x.to_bytes_be();
    if be.len() > FIELD_SIZE {
        return Err(Error::InternalInvariant("integer wider than 256 bits"));
    }

    let mut bytes = [0u8; FIELD_SIZE];
    bytes[FIELD_SIZE - be.len()..].copy_from_slice(&be);
    Ok(bytes)
}

/// Reduces `x` modulo the group order and lifts it into a [`Scalar`].
pub(crate) fn scalar(x: &BigUint) -> Result<Scalar> {
    let reduced = x % params::secp256k1().order();
    let repr = FieldBytes::from(biguint_to_bytes(&reduced)?);
    Option::from(Scalar::from_repr(repr))
        .ok_or(Error::InternalInvariant("reduced scalar rejected"))
}

/// Inverts a non-zero scalar modulo `n`.
pub(crate) fn invert(s: &Scalar) -> Result<Scalar> {
    Option::from(Field::invert(s)).ok_or(Error::InternalInvariant("inverse of zero scalar"))
}

/// A point on secp256k1, or the point at infinity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Point(ProjectivePoint);

impl Point {
    /// Base point `G`.
    pub const GENERATOR: Self = Self(ProjectivePoint::GENERATOR);

    /// Point at infinity.
    pub const IDENTITY: Self = Self(ProjectivePoint::IDENTITY);

    /// Build a point from affine coordinates.
    ///
    /// Returns `None` unless both coordinates are canonical field elements
    /// and `(x, y)` satisfies the curve equation.
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> Option<Self> {
        let x = FieldBytes::from(biguint_to_bytes(x).ok()?);
        let y = FieldBytes::from(biguint_to_bytes(y).ok()?);
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(|affine| Self(affine.into()))
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(BigUint, BigUint)> {
        let encoded = AffinePoint::from(self.0).to_encoded_point(false);
        let x = encoded.x()?;
        let y = encoded.y()?;
        Some((bytes_to_biguint(x), bytes_to_biguint(y)))
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Does this point satisfy the curve equation?
    ///
    /// The point at infinity has no affine coordinates and is not on the
    /// curve in this sense.
    pub fn is_on_curve(&self) -> bool {
        self.coordinates()
            .and_then(|(x, y)| Self::from_coordinates(&x, &y))
            .is_some()
    }

    /// Compute `n·self`.
    ///
    /// Scalars are reduced modulo `n`, so this is evaluated as
    /// `(n - 1)·self + self`.
    pub fn mul_by_order(&self) -> Result<Self> {
        let n_minus_one = scalar(&(params::secp256k1().order() - 1u32))?;
        Ok(*self * &n_minus_one + *self)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    fn mul(self, k: &Scalar) -> Point {
        Point(self.0 * k)
    }
}
