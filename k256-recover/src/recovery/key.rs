//! Candidate public key derivation: `Q = r⁻¹(sR − eG)`.

use crate::{
    Error, Result,
    arithmetic::{self, Point},
    params::CurveParams,
};
use num_bigint::BigUint;

/// Derive the candidate key `Q` from the recovered point `R`.
#[allow(non_snake_case)]
pub(crate) fn derive_key(
    params: &CurveParams,
    R: &Point,
    e: &BigUint,
    r: &BigUint,
    s: &BigUint,
) -> Result<Point> {
    let G = *params.generator();
    let e = arithmetic::scalar(e)?;
    let s = arithmetic::scalar(s)?;
    let r_inv = arithmetic::invert(&arithmetic::scalar(r)?)?;

    let D = *R * &s - G * &e;
    let Q = D * &r_inv;

    if Q.is_identity() || !Q.mul_by_order()?.is_identity() || !Q.is_on_curve() {
        return Err(Error::InvalidSignature("recovered key fails basic criteria"));
    }

    Ok(Q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::secp256k1;

    #[test]
    #[allow(non_snake_case)]
    fn inverts_signing_equation() {
        // With k = 1: R = G, r = G.x, s = e + r·d (mod n); Q must be d·G
        let params = secp256k1();
        let n = params.order();
        let (r, _) = Point::GENERATOR.coordinates().unwrap();
        let d = BigUint::from(0xC0FFEEu32);
        let e = BigUint::from(42u32);
        let s = (&e + &r * &d) % n;

        let Q = derive_key(params, &Point::GENERATOR, &e, &r, &s).unwrap();
        assert_eq!(Q, Point::GENERATOR * &arithmetic::scalar(&d).unwrap());
    }

    #[test]
    fn rejects_identity() {
        // s·G − e·G with s = e collapses to the point at infinity
        let params = secp256k1();
        let (r, _) = Point::GENERATOR.coordinates().unwrap();
        let e = BigUint::from(9u32);

        assert_eq!(
            derive_key(params, &Point::GENERATOR, &e, &r, &e),
            Err(Error::InvalidSignature("recovered key fails basic criteria"))
        );
    }
}
