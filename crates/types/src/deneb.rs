//! Deneb: blobs. The execution payload gains blob gas accounting and the
//! body commits to its blob sidecars through KZG commitments.

use std::fmt;

use serde::{Deserialize, Serialize};
use tree_hash::Hash256;

use crate::{
    aliases::{Address, B256, Bloom, Bytes, Hash32, Root, Slot, U256, ValidatorIndex},
    altair::SyncAggregate,
    bls::BlsSignature,
    capella::{SignedBlsToExecutionChange, Withdrawal, withdrawals_root},
    consts::{
        MAX_ATTESTATIONS, MAX_ATTESTER_SLASHINGS, MAX_BLOB_COMMITMENTS_PER_BLOCK,
        MAX_BLS_TO_EXECUTION_CHANGES, MAX_DEPOSITS, MAX_EXTRA_DATA_BYTES, MAX_PROPOSER_SLASHINGS,
        MAX_VOLUNTARY_EXITS,
    },
    kzg::KzgCommitment,
    merkle::{self, MerkleError},
    phase0::{Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
};

/// The Deneb execution payload: Capella's plus blob gas accounting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayload {
    pub parent_hash: Hash32,
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub prev_randao: B256,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Bytes,
    pub base_fee_per_gas: U256,
    pub block_hash: Hash32,
    pub transactions: Vec<Bytes>,
    pub withdrawals: Vec<Withdrawal>,
    pub blob_gas_used: u64,
    pub excess_blob_gas: u64,
}

impl ExecutionPayload {
    pub fn hash_tree_root(&self) -> Result<Root, MerkleError> {
        let mut fee_recipient = [0u8; 32];
        fee_recipient[..20].copy_from_slice(self.fee_recipient.as_slice());

        let leaves = [
            merkle::as_leaf(&self.parent_hash),
            fee_recipient.into(),
            merkle::as_leaf(&self.state_root),
            merkle::as_leaf(&self.receipts_root),
            merkle::byte_vector_root(self.logs_bloom.as_slice())?,
            merkle::as_leaf(&self.prev_randao),
            merkle::u64_leaf(self.block_number).into(),
            merkle::u64_leaf(self.gas_limit).into(),
            merkle::u64_leaf(self.gas_used).into(),
            merkle::u64_leaf(self.timestamp).into(),
            merkle::byte_list_root(&self.extra_data, MAX_EXTRA_DATA_BYTES)?,
            self.base_fee_per_gas.to_le_bytes::<32>().into(),
            merkle::as_leaf(&self.block_hash),
            crate::bellatrix::transactions_root(&self.transactions)?,
            withdrawals_root(&self.withdrawals)?,
            merkle::u64_leaf(self.blob_gas_used).into(),
            merkle::u64_leaf(self.excess_blob_gas).into(),
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// List root of a body's blob KZG commitments.
pub(crate) fn blob_commitments_root(commitments: &[KzgCommitment]) -> Result<Hash256, MerkleError> {
    use tree_hash::TreeHash;

    let leaves: Vec<Hash256> = commitments.iter().map(TreeHash::tree_hash_root).collect();
    merkle::list_root(&leaves, MAX_BLOB_COMMITMENTS_PER_BLOCK)
}

/// A Deneb block body.
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
                MAX_ATTESTER_SLASHINGS,
            )?,
            merkle::list_root(
                &merkle::collect_leaves(&self.attestations, Attestation::hash_tree_root)?,
                MAX_ATTESTATIONS,
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
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A Deneb beacon block.
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

/// A Deneb beacon block with the proposer's signature.
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
