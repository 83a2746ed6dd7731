//! BLS12-381 key and signature material.
//!
//! Celadon never verifies BLS signatures; these are carrier types with the
//! wire encodings the rest of the workspace expects. Cryptographic
//! validation belongs to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{BYTES_PER_PUBLIC_KEY, BYTES_PER_SIGNATURE};

/// A compressed BLS public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlsPublicKey(pub [u8; BYTES_PER_PUBLIC_KEY]);

/// A BLS signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlsSignature(pub [u8; BYTES_PER_SIGNATURE]);

macro_rules! impl_fixed_hex {
    ($name:ident, $len:expr, $expecting:expr) => {
        impl $name {
            /// Wraps a raw byte array.
            ///
            /// This does not validate that the bytes are a valid curve point.
            #[inline]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Returns a reference to the underlying bytes.
            #[inline]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Builds the value from a byte slice, checking the length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
                if bytes.len() != $len {
                    return Err(format!(
                        "Invalid length: expected {} bytes, got {}",
                        $len,
                        bytes.len()
                    ));
                }

                let mut array = [0u8; $len];
                array.copy_from_slice(bytes);
                Ok(Self(array))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self([0u8; $len])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct HexVisitor;

                impl<'de> serde::de::Visitor<'de> for HexVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        let stripped = v.strip_prefix("0x").unwrap_or(v);
                        let bytes = hex::decode(stripped).map_err(serde::de::Error::custom)?;
                        $name::from_slice(&bytes).map_err(serde::de::Error::custom)
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

impl_fixed_hex!(BlsPublicKey, BYTES_PER_PUBLIC_KEY, "a 0x-prefixed hex string of 48 bytes");
impl_fixed_hex!(BlsSignature, BYTES_PER_SIGNATURE, "a 0x-prefixed hex string of 96 bytes");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_hex_round_trip() {
        let key = BlsPublicKey::new([0xab; 48]);
        let encoded = serde_json::to_string(&key).unwrap();
        assert_eq!(encoded, format!("\"0x{}\"", "ab".repeat(48)));

        let decoded: BlsPublicKey = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn signature_hex_round_trip() {
        let signature = BlsSignature::new([0x01; 96]);
        let encoded = serde_json::to_string(&signature).unwrap();
        let decoded: BlsSignature = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, signature);
    }

    #[test]
    fn rejects_wrong_length() {
        let short = format!("\"0x{}\"", "ff".repeat(47));
        assert!(serde_json::from_str::<BlsPublicKey>(&short).is_err());

        let long = format!("\"0x{}\"", "ff".repeat(97));
        assert!(serde_json::from_str::<BlsSignature>(&long).is_err());
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(BlsSignature::from_slice(&[0u8; 96]).is_ok());
        assert!(BlsSignature::from_slice(&[0u8; 64]).is_err());
    }
}
