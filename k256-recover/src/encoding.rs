//! Input parsing and public key serialization.

use crate::{
    Error, Result,
    arithmetic::{self, FIELD_SIZE, Point},
};
use core::fmt;
use k256::{EncodedPoint, FieldBytes};
use num_bigint::{BigInt, BigUint};

#[cfg(feature = "base32")]
use {data_encoding::Encoding, once_cell::sync::Lazy};

/// Size of a serialized [`PublicKey`] in bytes: `x ‖ y`.
pub const PUBLIC_KEY_SIZE: usize = 2 * FIELD_SIZE;

/// Recovered public key as a pair of 32-byte big-endian affine coordinates.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct PublicKey {
    x: [u8; FIELD_SIZE],
    y: [u8; FIELD_SIZE],
}

impl PublicKey {
    pub(crate) fn from_point(point: &Point) -> Result<Self> {
        let (x, y) = point
            .coordinates()
            .ok_or(Error::InternalInvariant("point at infinity has no encoding"))?;

        Ok(Self {
            x: arithmetic::biguint_to_bytes(&x)?,
            y: arithmetic::biguint_to_bytes(&y)?,
        })
    }

    /// Parse `x ‖ y`, rejecting coordinates that are not a curve point.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_SIZE]) -> Result<Self> {
        let (x, y) = bytes.split_at(FIELD_SIZE);
        let point = Point::from_coordinates(
            &arithmetic::bytes_to_biguint(x),
            &arithmetic::bytes_to_biguint(y),
        )
        .ok_or(Error::InvalidArgument("not a curve point"))?;

        Self::from_point(&point)
    }

    /// Big-endian x-coordinate.
    pub fn x(&self) -> &[u8; FIELD_SIZE] {
        &self.x
    }

    /// Big-endian y-coordinate.
    pub fn y(&self) -> &[u8; FIELD_SIZE] {
        &self.y
    }

    /// Serialize as `x ‖ y`.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes[..FIELD_SIZE].copy_from_slice(&self.x);
        bytes[FIELD_SIZE..].copy_from_slice(&self.y);
        bytes
    }

    /// Serialize as 128 lowercase hex digits, `x` first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Serialize `x ‖ y` as unpadded Base32 in the [`BASE32_SYMBOLS`]
    /// alphabet.
    #[cfg(feature = "base32")]
    pub fn to_base32(&self) -> Result<String> {
        Ok(base32()?.encode(&self.to_bytes()))
    }

    /// Serialize as a SEC1 [`EncodedPoint`].
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        EncodedPoint::from_affine_coordinates(
            &FieldBytes::from(self.x),
            &FieldBytes::from(self.y),
            compress,
        )
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a textual big integer.
///
/// Accepts decimal, `0x`-prefixed hexadecimal, or a radix suffix: `h` for
/// hexadecimal, `o` for octal and `b` for binary (either case). An optional
/// leading `-` is allowed and surrounding whitespace is ignored.
pub fn parse_integer(text: &str) -> Result<BigInt> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidArgument("empty input"));
    }

    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (digits, radix) = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        (hex, 16)
    } else {
        match magnitude.char_indices().last() {
            Some((i, 'h' | 'H')) => (&magnitude[..i], 16),
            Some((i, 'o' | 'O')) => (&magnitude[..i], 8),
            Some((i, 'b' | 'B')) => (&magnitude[..i], 2),
            _ => (magnitude, 10),
        }
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidArgument("malformed integer"));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or(Error::InvalidArgument("malformed integer"))?;

    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}

/// Base32 alphabet of the wire format (DUDE ordering, no padding).
#[cfg(feature = "base32")]
pub const BASE32_SYMBOLS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";

#[cfg(feature = "base32")]
static BASE32: Lazy<Option<Encoding>> = Lazy::new(|| {
    let mut spec = data_encoding::Specification::new();
    spec.symbols.push_str(BASE32_SYMBOLS);
    spec.translate.from.push_str("YBNDRFGEJKMCPQXOTUWISZAH");
    spec.translate.to.push_str("ybndrfgejkmcpqxotuwiszah");
    // unused low bits of the final symbol are ignored on input
    spec.check_trailing_bits = false;
    spec.encoding().ok()
});

#[cfg(feature = "base32")]
fn base32() -> Result<&'static Encoding> {
    BASE32
        .as_ref()
        .ok_or(Error::InternalInvariant("base32 alphabet rejected"))
}

/// Signature input carried as a fixed 32-byte field.
#[cfg(feature = "base32")]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Component {
    /// Message digest `e`.
    Digest,
    /// Signature component `r`.
    R,
    /// Signature component `s`.
    S,
}

#[cfg(feature = "base32")]
impl Component {
    fn length_error(self) -> Error {
        Error::InvalidArgument(match self {
            Component::Digest => "digest must decode to 32 bytes",
            Component::R => "r must decode to 32 bytes",
            Component::S => "s must decode to 32 bytes",
        })
    }
}

/// Decode a Base32 field in the [`BASE32_SYMBOLS`] alphabet which must
/// hold exactly 32 bytes.
///
/// Decoding is case-insensitive; surrounding whitespace is ignored.
#[cfg(feature = "base32")]
pub fn decode_base32(text: &str, component: Component) -> Result<[u8; FIELD_SIZE]> {
    let bytes = base32()?
        .decode(text.trim().as_bytes())
        .map_err(|_| Error::InvalidArgument("malformed base32 input"))?;

    <[u8; FIELD_SIZE]>::try_from(bytes.as_slice()).map_err(|_| component.length_error())
}
