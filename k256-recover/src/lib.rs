#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! let public_key = k256_recover::recover(
//!     "0xfcde2b2edba56bf408601fb721fe9b5c338d10ee429ea04fae5511b68fbf8fb9",
//!     "73822833206246044331228008262087004113076292229679808334250850393445001014761",
//!     "58995174607243353628346858794753620798088291196940745194581481841927132845752",
//!     1,
//! )?;
//!
//! assert_eq!(
//!     public_key.to_hex(),
//!     "cc9519ba6fb1cb0cca53743dc90c2418440cf637f8b891ce2f0e2dc5c5b3cf01\
//!      38af07d191974089c03e0ca56568f35ee1875e464c6737670025d4512dc8aa17"
//! );
//! # Ok::<(), k256_recover::Error>(())
//! ```

pub mod encoding;
pub mod params;

mod arithmetic;
mod error;
mod recovery;

pub use crate::{
    encoding::{PUBLIC_KEY_SIZE, PublicKey},
    error::{Error, ErrorKind, Result},
    recovery::{DIGEST_BITS, RecoveryId, find_recovery_id, recover, recover_from_integers},
};
pub use k256;
pub use num_bigint;

#[cfg(feature = "base32")]
pub use crate::recovery::recover_base32;
