//! Range checks performed before any curve arithmetic.

use crate::{Error, Result, params};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Maximum bit length of a message digest (SHA-256 output).
pub const DIGEST_BITS: u64 = 256;

/// Identifier used to select the point `R` recovered from `r`.
///
/// The low bit selects the parity of `R.y`. Values `2` and `3` are accepted
/// and behave like `0` and `1`: the candidate x-coordinate is found by
/// searching `r + i·n` for `i` in `0..=h` rather than from the high bit.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Largest valid recovery id.
    pub const MAX: u8 = 3;

    /// Create a new [`RecoveryId`] from the given byte value.
    pub fn new(byte: u8) -> Result<Self> {
        if byte <= Self::MAX {
            Ok(Self(byte))
        } else {
            Err(Error::InvalidArgument("recovery id out of range"))
        }
    }

    /// Is `R.y` odd?
    pub fn is_y_odd(self) -> bool {
        self.0 & 1 == 1
    }

    /// Convert this [`RecoveryId`] into a `u8`.
    pub fn to_byte(self) -> u8 {
        self.0
    }

    /// All valid recovery ids in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl TryFrom<i32> for RecoveryId {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidArgument("recovery id out of range"))
            .and_then(Self::new)
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::new(byte)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> u8 {
        id.0
    }
}

/// Inputs which passed every range check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Validated {
    /// Message digest `e`; may exceed `n`.
    pub(crate) e: BigUint,
    /// Signature component `r`, in `[1, n)`.
    pub(crate) r: BigUint,
    /// Signature component `s`, in `[1, n)`.
    pub(crate) s: BigUint,
    pub(crate) recovery_id: RecoveryId,
}

/// Check `r`, `s`, `e` and the recovery id, in that order.
pub(crate) fn validate(e: &BigInt, r: &BigInt, s: &BigInt, recovery_id: i32) -> Result<Validated> {
    let n = params::secp256k1().order();

    let r = signature_component(r, n).ok_or(Error::InvalidSignature("r out of range"))?;
    let s = signature_component(s, n).ok_or(Error::InvalidSignature("s out of range"))?;

    let e = match e.to_biguint() {
        Some(e) if e.bits() <= DIGEST_BITS => e,
        _ => return Err(Error::InvalidSignature("digest out of range")),
    };

    let recovery_id = RecoveryId::try_from(recovery_id)?;

    Ok(Validated {
        e,
        r,
        s,
        recovery_id,
    })
}

/// `Some(x)` when `0 < x < n`.
fn signature_component(x: &BigInt, n: &BigUint) -> Option<BigUint> {
    if x.sign() != Sign::Plus {
        return None;
    }

    x.to_biguint().filter(|x| !x.is_zero() && x < n)
}
