//! Electra: attestations move to per-slot committee aggregation and the
//! body carries execution-triggered requests. The execution payload itself
//! is unchanged from Deneb.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    aliases::{Address, B256, Bytes, FixedBytes, Gwei, Root, Slot, ValidatorIndex},
    altair::SyncAggregate,
    bls::{BlsPublicKey, BlsSignature},
    capella::SignedBlsToExecutionChange,
    consts::{
        MAX_ATTESTATIONS_ELECTRA, MAX_ATTESTER_SLASHINGS_ELECTRA, MAX_BLS_TO_EXECUTION_CHANGES,
        MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD, MAX_DEPOSIT_REQUESTS_PER_PAYLOAD, MAX_DEPOSITS,
        MAX_PROPOSER_SLASHINGS, MAX_VALIDATORS_PER_SLOT, MAX_VOLUNTARY_EXITS,
        MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD,
    },
    deneb::blob_commitments_root,
    kzg::KzgCommitment,
    merkle::{self, MerkleError},
    phase0::{
        AttestationData, Deposit, Eth1Data, IndexedAttestation, ProposerSlashing,
        SignedVoluntaryExit,
    },
};

// The payload shape did not change in Electra.
pub use crate::deneb::ExecutionPayload;

/// An Electra on-chain attestation.
///
/// Aggregation spans every committee of the slot; `committee_bits` records
/// which committees participate, and `aggregation_bits` covers their
/// concatenated memberships.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    pub aggregation_bits: Bytes,
    pub data: AttestationData,
    pub signature: BlsSignature,
    pub committee_bits: FixedBytes<8>,
}

impl Attestation {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        use tree_hash::TreeHash;

        let leaves = [
            merkle::bitlist_root(&self.aggregation_bits, MAX_VALIDATORS_PER_SLOT)?,
            self.data.tree_hash_root(),
            merkle::byte_vector_root(self.signature.as_bytes())?,
            merkle::byte_vector_root(self.committee_bits.as_slice())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// Electra attester-slashing evidence.
///
/// Same shape as phase 0, but the indexed attestations may name every
/// validator of a slot, which deepens their index trees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

impl AttesterSlashing {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::as_leaf(&self.attestation_1.hash_tree_root_with_limit(MAX_VALIDATORS_PER_SLOT)?),
            merkle::as_leaf(&self.attestation_2.hash_tree_root_with_limit(MAX_VALIDATORS_PER_SLOT)?),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A validator deposit surfaced by the execution layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub pubkey: BlsPublicKey,
    pub withdrawal_credentials: B256,
    pub amount: Gwei,
    pub signature: BlsSignature,
    pub index: u64,
}

impl DepositRequest {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::byte_vector_root(self.pubkey.as_bytes())?,
            merkle::as_leaf(&self.withdrawal_credentials),
            merkle::u64_leaf(self.amount).into(),
            merkle::byte_vector_root(self.signature.as_bytes())?,
            merkle::u64_leaf(self.index).into(),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An execution-layer request to withdraw a validator's stake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub source_address: Address,
    pub validator_pubkey: BlsPublicKey,
    pub amount: Gwei,
}

impl WithdrawalRequest {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let mut address = [0u8; 32];
        address[..20].copy_from_slice(self.source_address.as_slice());

        let leaves = [
            address.into(),
            merkle::byte_vector_root(self.validator_pubkey.as_bytes())?,
            merkle::u64_leaf(self.amount).into(),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An execution-layer request to consolidate two validators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidationRequest {
    pub source_address: Address,
    pub source_pubkey: BlsPublicKey,
    pub target_pubkey: BlsPublicKey,
}

impl ConsolidationRequest {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let mut address = [0u8; 32];
        address[..20].copy_from_slice(self.source_address.as_slice());

        let leaves = [
            address.into(),
            merkle::byte_vector_root(self.source_pubkey.as_bytes())?,
            merkle::byte_vector_root(self.target_pubkey.as_bytes())?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// The bundle of execution-triggered requests in an Electra body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequests {
    pub deposits: Vec<DepositRequest>,
    pub withdrawals: Vec<WithdrawalRequest>,
    pub consolidations: Vec<ConsolidationRequest>,
}

impl ExecutionRequests {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let leaves = [
            merkle::list_root(
                &merkle::collect_leaves(&self.deposits, DepositRequest::hash_tree_root)?,
                MAX_DEPOSIT_REQUESTS_PER_PAYLOAD,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.withdrawals, WithdrawalRequest::hash_tree_root)?,
                MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.consolidations, ConsolidationRequest::hash_tree_root)?,
                MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD,
            )?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An Electra block body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockBody {
    pub randao_reveal: BlsSignature,
    pub eth1_data: Eth1Data,
    pub graffiti: B256,
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_aggregate: Option<SyncAggregate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_payload: Option<ExecutionPayload>,
    pub bls_to_execution_changes: Vec<SignedBlsToExecutionChange>,
    pub blob_kzg_commitments: Vec<KzgCommitment>,
    pub execution_requests: ExecutionRequests,
}

impl BeaconBlockBody {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        use tree_hash::TreeHash;

        let sync_aggregate =
            self.sync_aggregate.as_ref().ok_or(MerkleError::MissingField("sync_aggregate"))?;
        let execution_payload = self
            .execution_payload
            .as_ref()
            .ok_or(MerkleError::MissingField("execution_payload"))?;

        let leaves = [
            merkle::byte_vector_root(self.randao_reveal.as_bytes())?,
            TreeHash::tree_hash_root(&self.eth1_data),
            merkle::as_leaf(&self.graffiti),
            merkle::list_root(
                &merkle::collect_leaves(&self.proposer_slashings, ProposerSlashing::hash_tree_root)?,
                MAX_PROPOSER_SLASHINGS,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.attester_slashings, AttesterSlashing::hash_tree_root)?,
                MAX_ATTESTER_SLASHINGS_ELECTRA,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.attestations, Attestation::hash_tree_root)?,
                MAX_ATTESTATIONS_ELECTRA,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.deposits, Deposit::hash_tree_root)?,
                MAX_DEPOSITS,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.voluntary_exits, SignedVoluntaryExit::hash_tree_root)?,
                MAX_VOLUNTARY_EXITS,
            )?,
            merkle::as_leaf(&sync_aggregate.hash_tree_root()?),
            merkle::as_leaf(&execution_payload.hash_tree_root()?),
            merkle::list_root(
                &merkle::collect_leaves(
                    &self.bls_to_execution_changes,
                    SignedBlsToExecutionChange::hash_tree_root,
                )?,
                MAX_BLS_TO_EXECUTION_CHANGES,
            )?,
            blob_commitments_root(&self.blob_kzg_commitments)?,
            merkle::as_leaf(&self.execution_requests.hash_tree_root()?),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An Electra beacon block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlock {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BeaconBlockBody>,
}

impl BeaconBlock {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let body = self.body.as_ref().ok_or(MerkleError::MissingField("body"))?;

        let leaves = [
            merkle::u64_leaf(self.slot).into(),
            merkle::u64_leaf(self.proposer_index).into(),
            merkle::as_leaf(&self.parent_root),
            merkle::as_leaf(&self.state_root),
            merkle::as_leaf(&body.hash_tree_root()?),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// An Electra beacon block with the proposer's signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<BeaconBlock>,
    pub signature: BlsSignature,
}

impl fmt::Display for SignedBeaconBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Ok(()),
        }
    }
}
