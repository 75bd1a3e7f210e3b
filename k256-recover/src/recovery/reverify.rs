//! Independent check that a recovered key verifies the signature.

use crate::{
    Error, Result,
    arithmetic::{self, Point},
    params::CurveParams,
};
use num_bigint::BigUint;

/// Evaluate the ECDSA verification equation for `Q`.
///
/// `X1 = (e·s⁻¹)·G + (r·s⁻¹)·Q` must be an affine point with
/// `X1.x mod n == r`.
#[allow(non_snake_case)]
pub(crate) fn reverify(
    params: &CurveParams,
    Q: &Point,
    e: &BigUint,
    r: &BigUint,
    s: &BigUint,
) -> Result<()> {
    let w = arithmetic::invert(&arithmetic::scalar(s)?)?;
    let u1 = arithmetic::scalar(e)? * w;
    let u2 = arithmetic::scalar(r)? * w;

    let X1 = *params.generator() * &u1 + *Q * &u2;
    let (x1, _) = X1
        .coordinates()
        .filter(|_| X1.is_on_curve())
        .ok_or(Error::InvalidSignature("reverification point invalid"))?;

    if &(x1 % params.order()) != r {
        return Err(Error::InvalidSignature("recovered key does not verify signature"));
    }

    Ok(())
}
