//! Reconstruction of the ephemeral point `R` from the signature's `r`.

use super::validate::RecoveryId;
use crate::{Error, Result, arithmetic::Point, params::CurveParams};
use num_bigint::BigUint;
use tracing::trace;

/// Find the point `R` whose x-coordinate reduces to `r` and whose y parity
/// matches `recovery_id`.
///
/// `r` is `R.x mod n`, so the true x-coordinate is `r + i·n` for some
/// `i` in `0..=h`. Candidates are tried in increasing `i` and the first one
/// on the curve wins.
pub(crate) fn recover_r(params: &CurveParams, r: &BigUint, recovery_id: RecoveryId) -> Result<Point> {
    let p = params.field_modulus();

    for i in 0..=params.cofactor() {
        let x = r + params.order() * i;
        if &x > p {
            return Err(Error::InvalidSignature("x exceeds field modulus"));
        }

        let y = lift_y(params, &x, recovery_id.is_y_odd());
        trace!(i, y_odd = recovery_id.is_y_odd(), "trying candidate R");

        if let Some(point) = Point::from_coordinates(&x, &y) {
            return Ok(point);
        }
    }

    Err(Error::InvalidSignature("no recoverable point"))
}

/// Compute `y = ±sqrt(x³ + ax + b)` with the requested parity.
///
/// When `x³ + ax + b` is not a quadratic residue the result is not a square
/// root at all; the caller's on-curve check rejects it.
fn lift_y(params: &CurveParams, x: &BigUint, y_odd: bool) -> BigUint {
    let p = params.field_modulus();
    let y2 = (x * x * x + params.a() * x + params.b()) % p;
    let y = y2.modpow(params.sqrt_exponent(), p);

    if y.bit(0) == y_odd {
        y
    } else {
        (p - y) % p
    }
}
