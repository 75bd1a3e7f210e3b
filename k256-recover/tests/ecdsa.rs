//! Recovery of keys from signatures produced by `k256`.

use k256::ecdsa::{SigningKey, VerifyingKey, signature::hazmat::PrehashVerifier};
use k256_recover::{
    ErrorKind, PublicKey, find_recovery_id,
    num_bigint::{BigInt, Sign},
    recover_from_integers,
};
use proptest::prelude::*;

fn signing_key() -> impl Strategy<Value = SigningKey> {
    any::<[u8; 32]>().prop_filter_map("scalar out of range", |bytes| {
        SigningKey::from_bytes(&bytes.into()).ok()
    })
}

fn integer(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

fn encode(verifying_key: &VerifyingKey) -> [u8; 64] {
    let encoded = verifying_key.to_encoded_point(false);
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&encoded.as_bytes()[1..]);
    bytes
}

proptest! {
    #[test]
    fn recover_from_prehash(sk in signing_key(), digest in any::<[u8; 32]>()) {
        let (signature, recovery_id) = sk.sign_prehash_recoverable(&digest).unwrap();
        let (r, s) = signature.split_bytes();

        let public_key = recover_from_integers(
            &integer(&digest),
            &integer(&r),
            &integer(&s),
            recovery_id.to_byte().into(),
        ).unwrap();

        prop_assert_eq!(public_key.to_bytes(), encode(sk.verifying_key()));
    }

    #[test]
    fn sibling_id_never_yields_unverified_key(sk in signing_key(), digest in any::<[u8; 32]>()) {
        let (signature, recovery_id) = sk.sign_prehash_recoverable(&digest).unwrap();
        let (r, s) = signature.split_bytes();
        let sibling_id = recovery_id.to_byte() ^ 1;

        match recover_from_integers(&integer(&digest), &integer(&r), &integer(&s), sibling_id.into()) {
            Ok(public_key) => {
                prop_assert_ne!(public_key.to_bytes(), encode(sk.verifying_key()));

                let verifying_key =
                    VerifyingKey::from_sec1_bytes(public_key.to_encoded_point(false).as_bytes())
                        .unwrap();
                prop_assert!(verifying_key.verify_prehash(&digest, &signature).is_ok());
            }
            Err(err) => prop_assert_eq!(err.kind(), ErrorKind::InvalidSignature),
        }
    }

    #[test]
    fn trial_recovery_finds_signer_id(sk in signing_key(), digest in any::<[u8; 32]>()) {
        let (signature, recovery_id) = sk.sign_prehash_recoverable(&digest).unwrap();
        let (r, s) = signature.split_bytes();
        let expected = PublicKey::from_bytes(&encode(sk.verifying_key())).unwrap();

        let found = find_recovery_id(&integer(&digest), &integer(&r), &integer(&s), &expected)
            .unwrap();
        prop_assert_eq!(found.is_y_odd(), recovery_id.is_y_odd());
    }

    #[test]
    fn arbitrary_inputs_fail_with_typed_errors(
        digest in any::<[u8; 32]>(),
        r in any::<[u8; 32]>(),
        s in any::<[u8; 32]>(),
        recovery_id in -2i32..6,
    ) {
        let result = recover_from_integers(&integer(&digest), &integer(&r), &integer(&s), recovery_id);

        match result {
            Ok(public_key) => {
                // Whatever was recovered must verify (r, s) over the digest
                let signature = k256::ecdsa::Signature::from_scalars(r, s).unwrap();
                let signature = signature.normalize_s().unwrap_or(signature);
                let verifying_key =
                    VerifyingKey::from_sec1_bytes(public_key.to_encoded_point(false).as_bytes())
                        .unwrap();
                prop_assert!(verifying_key.verify_prehash(&digest, &signature).is_ok());
            }
            Err(err) => prop_assert_ne!(err.kind(), ErrorKind::InternalInvariant),
        }
    }
}
