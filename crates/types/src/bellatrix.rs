//! Bellatrix: the merge fork. The block body gains an embedded execution
//! payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use tree_hash::Hash256;

use crate::{
    aliases::{Address, B256, Bloom, Bytes, Hash32, Root, Slot, U256, ValidatorIndex},
    altair::SyncAggregate,
    bls::BlsSignature,
    consts::{
        MAX_ATTESTATIONS, MAX_ATTESTER_SLASHINGS, MAX_BYTES_PER_TRANSACTION, MAX_DEPOSITS,
        MAX_EXTRA_DATA_BYTES, MAX_PROPOSER_SLASHINGS, MAX_TRANSACTIONS_PER_PAYLOAD,
        MAX_VOLUNTARY_EXITS,
    },
    merkle::{self, MerkleError},
    phase0::{Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit},
};

/// The full execution payload embedded in a Bellatrix block body.
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
            transactions_root(&self.transactions)?,
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// List root of an execution payload's transactions, each an opaque byte
/// list.
pub(crate) fn transactions_root(transactions: &[Bytes]) -> Result<Hash256, MerkleError> {
    let leaves = merkle::collect_leaves(transactions, |tx| {
        merkle::byte_list_root(tx, MAX_BYTES_PER_TRANSACTION).map(merkle::as_root)
    })?;
    merkle::list_root(&leaves, MAX_TRANSACTIONS_PER_PAYLOAD)
}

/// A Bellatrix block body.
///
/// `sync_aggregate` and `execution_payload` stay optional at the type level:
/// a body deserialized from a partial source carries `None` there, and the
/// accessors upstream report that instead of inventing defaults.
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
        ];
        Ok(merkle::as_root(merkle::container_root(&leaves)?))
    }
}

/// A Bellatrix beacon block.
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

/// A Bellatrix beacon block with the proposer's signature.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_payload() -> ExecutionPayload {
        ExecutionPayload {
            parent_hash: B256::repeat_byte(1),
            fee_recipient: Address::repeat_byte(2),
            state_root: B256::repeat_byte(3),
            receipts_root: B256::repeat_byte(4),
            logs_bloom: Bloom::default(),
            prev_randao: B256::repeat_byte(5),
            block_number: 100,
            gas_limit: 30_000_000,
            gas_used: 15_000_000,
            timestamp: 1_234_567_890,
            extra_data: Bytes::from(vec![0xce, 0x1a]),
            base_fee_per_gas: U256::from(7u64),
            block_hash: B256::repeat_byte(6),
            transactions: vec![Bytes::from(vec![0x02, 0xff])],
        }
    }

    fn test_body() -> BeaconBlockBody {
        BeaconBlockBody {
            randao_reveal: BlsSignature::new([9u8; 96]),
            sync_aggregate: Some(SyncAggregate::default()),
            execution_payload: Some(test_payload()),
            ..Default::default()
        }
    }

    #[test]
    fn body_root_requires_execution_payload() {
        let mut body = test_body();
        body.execution_payload = None;
        assert_eq!(
            body.hash_tree_root().unwrap_err(),
            MerkleError::MissingField("execution_payload")
        );
    }

    #[test]
    fn body_root_requires_sync_aggregate() {
        let mut body = test_body();
        body.sync_aggregate = None;
        assert_eq!(body.hash_tree_root().unwrap_err(), MerkleError::MissingField("sync_aggregate"));
    }

    #[test]
    fn block_root_requires_body() {
        let block = BeaconBlock { slot: 1, ..Default::default() };
        assert_eq!(block.hash_tree_root().unwrap_err(), MerkleError::MissingField("body"));
    }

    #[test]
    fn block_root_commits_to_slot() {
        let block_a = BeaconBlock { slot: 1, body: Some(test_body()), ..Default::default() };
        let block_b = BeaconBlock { slot: 2, body: Some(test_body()), ..Default::default() };
        assert_ne!(block_a.hash_tree_root().unwrap(), block_b.hash_tree_root().unwrap());
    }

    #[test]
    fn payload_root_rejects_oversized_extra_data() {
        let mut payload = test_payload();
        payload.extra_data = Bytes::from(vec![0u8; MAX_EXTRA_DATA_BYTES + 1]);
        assert!(matches!(
            payload.hash_tree_root().unwrap_err(),
            MerkleError::ListTooLong { .. }
        ));
    }

    #[test]
    fn signed_block_displays_as_json() {
        let signed = SignedBeaconBlock {
            message: Some(BeaconBlock { slot: 44, body: Some(test_body()), ..Default::default() }),
            signature: BlsSignature::default(),
        };

        let rendered = signed.to_string();
        assert!(rendered.contains("\"slot\":44"));
    }

    #[test]
    fn serde_round_trip() {
        let signed = SignedBeaconBlock {
            message: Some(BeaconBlock { slot: 3, body: Some(test_body()), ..Default::default() }),
            signature: BlsSignature::new([8u8; 96]),
        };

        let encoded = serde_json::to_vec(&signed).unwrap();
        let decoded: SignedBeaconBlock = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, signed);
    }
}
