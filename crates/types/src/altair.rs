//! The sync aggregate introduced in Altair and present in every later
//! block body.

use serde::{Deserialize, Serialize};

use crate::{
    aliases::{FixedBytes, Root},
    bls::BlsSignature,
    merkle::{self, MerkleError},
};

/// The sync committee's aggregated vote for the previous block.
///
/// The bitvector covers the 512 sync committee members; the signature is
/// their aggregated BLS signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAggregate {
    pub sync_committee_bits: FixedBytes<64>,
    pub sync_committee_signature: BlsSignature,
}

impl SyncAggregate {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::byte_vector_root(self.sync_committee_bits.as_slice())?,
            merkle::byte_vector_root(self.sync_committee_signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}
