//! EIP-4844 blob types.
//!
//! Blobs are large (~128KB) data chunks committed to via KZG commitments and
//! carried next to the block rather than inside the execution payload. The
//! commitment and proof are compressed BLS12-381 G1 points; the `c-kzg`
//! pairing checks happen outside this crate.

use std::fmt;

// Alloy's versioned hash calculation (SHA-256 per EIP-4844).
// Re-exported so other crates can depend on celadon_types instead of alloy.
pub use alloy_eips::eip4844::kzg_to_versioned_hash;
use serde::{Deserialize, Serialize};
use tree_hash::{PackedEncoding, TreeHash, TreeHashType};

use crate::{
    aliases::{B256, Bytes},
    consts::{BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_PROOF},
};

/// A KZG commitment to a blob.
///
/// Binding but succinct: 48 bytes regardless of the 131KB blob it commits
/// to. The bytes are not validated as a curve point here; that happens when
/// a KZG operation is attempted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KzgCommitment(pub [u8; BYTES_PER_COMMITMENT]);

impl KzgCommitment {
    /// Creates a new KZG commitment from a 48-byte array.
    #[inline]
    pub const fn new(bytes: [u8; BYTES_PER_COMMITMENT]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BYTES_PER_COMMITMENT] {
        &self.0
    }

    /// Creates a commitment from a byte slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() != BYTES_PER_COMMITMENT {
            return Err(format!(
                "Invalid commitment size: expected {} bytes, got {}",
                BYTES_PER_COMMITMENT,
                bytes.len()
            ));
        }

        let mut array = [0u8; BYTES_PER_COMMITMENT];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }

    /// The EIP-4844 versioned hash of this commitment.
    ///
    /// SHA-256 of the commitment with the first byte replaced by the version
    /// tag (`0x01`). This is the value blob transactions reference.
    pub fn versioned_hash(&self) -> B256 {
        kzg_to_versioned_hash(&self.0)
    }
}

impl fmt::Display for KzgCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for KzgCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KzgCommitment(0x{})", hex::encode(self.0))
    }
}

impl TreeHash for KzgCommitment {
    fn tree_hash_type() -> TreeHashType {
        <[u8; BYTES_PER_COMMITMENT] as TreeHash>::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        self.0.tree_hash_packed_encoding()
    }

    fn tree_hash_packing_factor() -> usize {
        <[u8; BYTES_PER_COMMITMENT] as TreeHash>::tree_hash_packing_factor()
    }

    fn tree_hash_root(&self) -> tree_hash::Hash256 {
        TreeHash::tree_hash_root(&self.0)
    }
}

impl Serialize for KzgCommitment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for KzgCommitment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KzgCommitmentVisitor;

        impl<'de> serde::de::Visitor<'de> for KzgCommitmentVisitor {
            type Value = KzgCommitment;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 0x-prefixed hex string of 48 bytes")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let stripped = v.strip_prefix("0x").unwrap_or(v);
                let bytes = hex::decode(stripped).map_err(serde::de::Error::custom)?;
                KzgCommitment::from_slice(&bytes).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(KzgCommitmentVisitor)
    }
}

/// A KZG proof that a blob matches its commitment.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KzgProof(pub [u8; BYTES_PER_PROOF]);

impl KzgProof {
    /// Creates a new KZG proof from a 48-byte array.
    #[inline]
    pub const fn new(bytes: [u8; BYTES_PER_PROOF]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BYTES_PER_PROOF] {
        &self.0
    }

    /// Creates a proof from a byte slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() != BYTES_PER_PROOF {
            return Err(format!(
                "Invalid proof size: expected {} bytes, got {}",
                BYTES_PER_PROOF,
                bytes.len()
            ));
        }

        let mut array = [0u8; BYTES_PER_PROOF];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }
}

impl fmt::Display for KzgProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for KzgProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KzgProof(0x{})", hex::encode(self.0))
    }
}

impl Serialize for KzgProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for KzgProof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KzgProofVisitor;

        impl<'de> serde::de::Visitor<'de> for KzgProofVisitor {
            type Value = KzgProof;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 0x-prefixed hex string of 48 bytes")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let stripped = v.strip_prefix("0x").unwrap_or(v);
                let bytes = hex::decode(stripped).map_err(serde::de::Error::custom)?;
                KzgProof::from_slice(&bytes).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(KzgProofVisitor)
    }
}

/// A single blob of data committed to by a KZG commitment.
///
/// The constructor enforces the fixed EIP-4844 size, so a constructed blob
/// is always exactly [`BYTES_PER_BLOB`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    /// Creates a new blob, validating the byte length.
    pub fn new(data: Bytes) -> Result<Self, String> {
        if data.len() != BYTES_PER_BLOB {
            return Err(format!(
                "Invalid blob size: expected {} bytes, got {} bytes",
                BYTES_PER_BLOB,
                data.len()
            ));
        }

        Ok(Self { data })
    }

    /// Returns a reference to the blob data.
    ///
    /// Zero-copy; `Bytes` is reference counted internally.
    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the size of the blob in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        BYTES_PER_BLOB
    }

    /// Consumes the blob and returns the underlying data.
    #[inline]
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 131KB of hex is useless in logs; show the ends.
        write!(
            f,
            "Blob(0x{}..{})",
            hex::encode(&self.data[..4]),
            hex::encode(&self.data[BYTES_PER_BLOB - 4..])
        )
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = Bytes::deserialize(deserializer)?;
        Blob::new(data).map_err(serde::de::Error::custom)
    }
}
