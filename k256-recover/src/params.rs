//! secp256k1 domain parameters.
//!
//! Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
//! Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>

use crate::arithmetic::Point;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Field modulus `p = 2²⁵⁶ - 2³² - 977`.
const FIELD_MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order `n` of the subgroup generated by `G`.
const ORDER: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

static SECP256K1: Lazy<CurveParams> = Lazy::new(CurveParams::new);

/// Domain parameters of the curve `y² = x³ + ax + b` over `GF(p)`.
///
/// Built once per process and never mutated afterwards; see [`secp256k1`].
#[derive(Clone, Debug)]
pub struct CurveParams {
    p: BigUint,
    n: BigUint,
    h: u32,
    a: BigUint,
    b: BigUint,
    g: Point,
    sqrt_exponent: BigUint,
}

impl CurveParams {
    fn new() -> Self {
        let p = BigUint::from_bytes_be(&FIELD_MODULUS);

        // p ≡ 3 (mod 4), so a square root of v is v^((p + 1) / 4)
        let sqrt_exponent = (&p + 1u32) >> 2;

        Self {
            n: BigUint::from_bytes_be(&ORDER),
            h: 1,
            a: BigUint::from(0u32),
            b: BigUint::from(7u32),
            g: Point::GENERATOR,
            sqrt_exponent,
            p,
        }
    }

    /// Field modulus `p`.
    pub fn field_modulus(&self) -> &BigUint {
        &self.p
    }

    /// Subgroup order `n`.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.h
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub(crate) fn generator(&self) -> &Point {
        &self.g
    }

    pub(crate) fn sqrt_exponent(&self) -> &BigUint {
        &self.sqrt_exponent
    }
}

/// Get the process-wide secp256k1 parameters.
pub fn secp256k1() -> &'static CurveParams {
    &SECP256K1
}
