//! Public key recovery pipeline.
//!
//! `validate → recover R → derive Q → reverify → encode`. The first failing
//! stage aborts the whole call; nothing is returned for partial progress.

mod key;
mod point;
mod reverify;
mod validate;

pub use validate::{DIGEST_BITS, RecoveryId};

use crate::{Error, PublicKey, Result, encoding, params};
use num_bigint::BigInt;
use tracing::debug;

#[cfg(feature = "base32")]
use {crate::encoding::Component, num_bigint::Sign};

/// Recover the public key which produced signature `(r, s)` over `digest`.
///
/// `digest`, `r` and `s` are textual integers as accepted by
/// [`encoding::parse_integer`]: decimal, `0x`-prefixed hex, or a trailing
/// `h`, `o` or `b` radix suffix. The recovery id is checked before any text
/// is parsed.
///
/// A recovery id with the wrong y parity recovers a different key that
/// also verifies the signature; pick the id recorded by the signer.
pub fn recover(digest: &str, r: &str, s: &str, recovery_id: i32) -> Result<PublicKey> {
    stage("validate", RecoveryId::try_from(recovery_id))?;

    let e = encoding::parse_integer(digest)?;
    let r = encoding::parse_integer(r)?;
    let s = encoding::parse_integer(s)?;
    recover_from_integers(&e, &r, &s, recovery_id)
}

/// Recover a public key from Base32-encoded 32-byte `digest`, `r` and `s`.
///
/// All three fields are decoded and length-checked before any curve
/// arithmetic runs.
#[cfg(feature = "base32")]
pub fn recover_base32(digest: &str, r: &str, s: &str, recovery_id: i32) -> Result<PublicKey> {
    let e = encoding::decode_base32(digest, Component::Digest)?;
    let r = encoding::decode_base32(r, Component::R)?;
    let s = encoding::decode_base32(s, Component::S)?;

    recover_from_integers(
        &BigInt::from_bytes_be(Sign::Plus, &e),
        &BigInt::from_bytes_be(Sign::Plus, &r),
        &BigInt::from_bytes_be(Sign::Plus, &s),
        recovery_id,
    )
}

/// Recover a public key from already parsed integers.
#[allow(non_snake_case)]
pub fn recover_from_integers(
    e: &BigInt,
    r: &BigInt,
    s: &BigInt,
    recovery_id: i32,
) -> Result<PublicKey> {
    let params = params::secp256k1();

    let inputs = stage("validate", validate::validate(e, r, s, recovery_id))?;
    let (e, r, s) = (&inputs.e, &inputs.r, &inputs.s);

    let R = stage("recover", point::recover_r(params, r, inputs.recovery_id))?;
    let Q = stage("derive", key::derive_key(params, &R, e, r, s))?;
    stage("reverify", reverify::reverify(params, &Q, e, r, s))?;
    let public_key = stage("encode", PublicKey::from_point(&Q))?;

    debug!(
        recovery_id = inputs.recovery_id.to_byte(),
        "recovered public key"
    );
    Ok(public_key)
}

/// Find the recovery id under which `(r, s)` over `e` recovers `expected`.
///
/// Ids are tried in ascending order and the first match is returned.
pub fn find_recovery_id(
    e: &BigInt,
    r: &BigInt,
    s: &BigInt,
    expected: &PublicKey,
) -> Result<RecoveryId> {
    // Out-of-range inputs fail identically for every id
    validate::validate(e, r, s, 0)?;

    for recovery_id in RecoveryId::all() {
        let recovered = recover_from_integers(e, r, s, recovery_id.to_byte().into());
        if recovered.as_ref() == Ok(expected) {
            return Ok(recovery_id);
        }
    }

    Err(Error::InvalidSignature("no recovery id matches public key"))
}

fn stage<T>(name: &'static str, result: Result<T>) -> Result<T> {
    result.inspect_err(|err| {
        debug!(stage = name, reason = err.reason(), "public key recovery failed");
    })
}
