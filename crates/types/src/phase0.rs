//! Containers introduced in phase 0 and carried unchanged by every later
//! fork: attestations, slashing evidence, deposits, and voluntary exits.

use serde::{Deserialize, Serialize};
use tree_hash_derive::TreeHash;

use crate::{
    aliases::{B256, Bytes, CommitteeIndex, Epoch, Gwei, Root, Slot, ValidatorIndex},
    bls::{BlsPublicKey, BlsSignature},
    consts::{DEPOSIT_PROOF_LENGTH, MAX_VALIDATORS_PER_COMMITTEE},
    merkle::{self, MerkleError},
};

/// A checkpoint: an epoch boundary block reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Root,
}

/// The data every attester in a committee signs over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct AttestationData {
    pub slot: Slot,
    pub index: CommitteeIndex,
    pub beacon_block_root: Root,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

/// An aggregated attestation from a single committee.
///
/// `aggregation_bits` is the raw SSZ bitlist, delimiter bit included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    pub aggregation_bits: Bytes,
    pub data: AttestationData,
    pub signature: BlsSignature,
}

impl Attestation {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        use tree_hash::TreeHash;

        let leaves = [
            merkle::bitlist_root(&self.aggregation_bits, MAX_VALIDATORS_PER_COMMITTEE)?,
            self.data.tree_hash_root(),
            merkle::byte_vector_root(self.signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An attestation with its participants spelled out by validator index,
/// as used in slashing evidence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedAttestation {
    pub attesting_indices: Vec<ValidatorIndex>,
    pub data: AttestationData,
    pub signature: BlsSignature,
}

impl IndexedAttestation {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        self.hash_tree_root_with_limit(MAX_VALIDATORS_PER_COMMITTEE)
    }

    /// Electra raises the index capacity, which changes the tree depth;
    /// the fork-specific wrappers pass their own limit.
    pub(crate) fn hash_tree_root_with_limit(&self, max_indices: usize) -> Result<Root, MerkleError> {
        use tree_hash::TreeHash;

        let leaves = [
            merkle::u64_list_root(&self.attesting_indices, max_indices)?,
            self.data.tree_hash_root(),
            merkle::byte_vector_root(self.signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// Evidence that a pair of attestations violates a slashing condition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

impl AttesterSlashing {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::as_leaf(&self.attestation_1.hash_tree_root()?),
            merkle::as_leaf(&self.attestation_2.hash_tree_root()?),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// Beacon block header: the five-field summary every block reduces to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

impl BeaconBlockHeader {
    /// The SSZ hash tree root of this header; the value the proposer signs.
    pub fn hash_tree_root(&self) -> Root {
        use tree_hash::TreeHash;

        let root = TreeHash::tree_hash_root(self);
        Root::from_slice(root.as_slice())
    }
}

/// A header with the proposer's signature over its hash tree root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: BlsSignature,
}

impl SignedBeaconBlockHeader {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::as_leaf(&self.message.hash_tree_root()),
            merkle::byte_vector_root(self.signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// Evidence that a proposer signed two conflicting headers for one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

impl ProposerSlashing {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::as_leaf(&self.signed_header_1.hash_tree_root()?),
            merkle::as_leaf(&self.signed_header_2.hash_tree_root()?),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A snapshot of the deposit contract on the execution chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct Eth1Data {
    pub deposit_root: Root,
    pub deposit_count: u64,
    pub block_hash: B256,
}

/// The signed content of a validator deposit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositData {
    pub pubkey: BlsPublicKey,
    pub withdrawal_credentials: B256,
    pub amount: Gwei,
    pub signature: BlsSignature,
}

impl DepositData {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::byte_vector_root(self.pubkey.as_bytes())?,
            self.withdrawal_credentials.0.into(),
            merkle::u64_leaf(self.amount).into(),
            merkle::byte_vector_root(self.signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A deposit with its Merkle inclusion proof against the deposit root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub proof: Vec<B256>,
    pub data: DepositData,
}

impl Deposit {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        if self.proof.len() > DEPOSIT_PROOF_LENGTH {
            return Err(MerkleError::ListTooLong {
                len: self.proof.len(),
                limit: DEPOSIT_PROOF_LENGTH,
            });
        }

        let mut proof_leaves: Vec<tree_hash::Hash256> =
            self.proof.iter().map(|node| node.0.into()).collect();
        proof_leaves.resize(DEPOSIT_PROOF_LENGTH, tree_hash::Hash256::ZERO);

        let leaves = [merkle::container_root(&proof_leaves)?, merkle::as_leaf(&self.data.hash_tree_root()?)];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A validator's request to exit the active set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct VoluntaryExit {
    pub epoch: Epoch,
    pub validator_index: ValidatorIndex,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: BlsSignature,
}

impl SignedVoluntaryExit {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        use tree_hash::TreeHash;

        let leaves = [
            TreeHash::tree_hash_root(&self.message),
            merkle::byte_vector_root(self.signature.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}
