//! End-to-end coverage of the versioned envelope across every supported
//! fork.

use std::sync::Arc;

use celadon_api::{Error, VersionedSignedBeaconBlock};
use celadon_types::{
    aliases::{B256, Bytes},
    altair::SyncAggregate,
    bellatrix,
    bls::BlsSignature,
    capella, deneb, electra,
    fork::Fork,
    merkle::MerkleError,
    phase0::{
        self, AttestationData, BeaconBlockHeader, IndexedAttestation, SignedBeaconBlockHeader,
    },
};

const SLOT: u64 = 12345;
const PROPOSER: u64 = 42;

fn parent_root() -> B256 {
    B256::repeat_byte(0xaa)
}

fn state_root() -> B256 {
    B256::repeat_byte(0xbb)
}

fn phase0_attestation(tag: u8) -> phase0::Attestation {
    phase0::Attestation {
        aggregation_bits: Bytes::from(vec![0b0000_0101u8]),
        data: AttestationData { slot: tag as u64, ..Default::default() },
        signature: BlsSignature::new([tag; 96]),
    }
}

fn electra_attestation(tag: u8) -> electra::Attestation {
    electra::Attestation {
        aggregation_bits: Bytes::from(vec![0b0000_0101u8]),
        data: AttestationData { slot: tag as u64, ..Default::default() },
        signature: BlsSignature::new([tag; 96]),
        committee_bits: Default::default(),
    }
}

fn phase0_attester_slashing() -> phase0::AttesterSlashing {
    phase0::AttesterSlashing {
        attestation_1: IndexedAttestation { attesting_indices: vec![1, 2], ..Default::default() },
        attestation_2: IndexedAttestation { attesting_indices: vec![2, 3], ..Default::default() },
    }
}

fn proposer_slashing() -> phase0::ProposerSlashing {
    phase0::ProposerSlashing {
        signed_header_1: SignedBeaconBlockHeader {
            message: BeaconBlockHeader { slot: 4, ..Default::default() },
            signature: BlsSignature::new([1u8; 96]),
        },
        signed_header_2: SignedBeaconBlockHeader {
            message: BeaconBlockHeader { slot: 4, state_root: B256::repeat_byte(9), ..Default::default() },
            signature: BlsSignature::new([2u8; 96]),
        },
    }
}

fn bellatrix_block() -> Arc<bellatrix::SignedBeaconBlock> {
    Arc::new(bellatrix::SignedBeaconBlock {
        message: Some(bellatrix::BeaconBlock {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body: Some(bellatrix::BeaconBlockBody {
                attestations: vec![phase0_attestation(1), phase0_attestation(2)],
                attester_slashings: vec![phase0_attester_slashing()],
                proposer_slashings: vec![proposer_slashing()],
                sync_aggregate: Some(SyncAggregate::default()),
                execution_payload: Some(bellatrix::ExecutionPayload {
                    block_hash: B256::repeat_byte(0xe1),
                    block_number: 700,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }),
        signature: BlsSignature::new([0x11; 96]),
    })
}

fn capella_block() -> Arc<capella::SignedBeaconBlock> {
    Arc::new(capella::SignedBeaconBlock {
        message: Some(capella::BeaconBlock {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body: Some(capella::BeaconBlockBody {
                attestations: vec![phase0_attestation(1), phase0_attestation(2)],
                attester_slashings: vec![phase0_attester_slashing()],
                proposer_slashings: vec![proposer_slashing()],
                sync_aggregate: Some(SyncAggregate::default()),
                execution_payload: Some(capella::ExecutionPayload {
                    block_hash: B256::repeat_byte(0xe2),
                    block_number: 701,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }),
        signature: BlsSignature::new([0x22; 96]),
    })
}

fn deneb_block() -> Arc<deneb::SignedBeaconBlock> {
    Arc::new(deneb::SignedBeaconBlock {
        message: Some(deneb::BeaconBlock {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body: Some(deneb::BeaconBlockBody {
                attestations: vec![phase0_attestation(1), phase0_attestation(2)],
                attester_slashings: vec![phase0_attester_slashing()],
                proposer_slashings: vec![proposer_slashing()],
                sync_aggregate: Some(SyncAggregate::default()),
                execution_payload: Some(deneb::ExecutionPayload {
                    block_hash: B256::repeat_byte(0xe3),
                    block_number: 702,
                    ..Default::default()
                }),
                blob_kzg_commitments: vec![celadon_types::kzg::KzgCommitment::new([5u8; 48])],
                ..Default::default()
            }),
        }),
        signature: BlsSignature::new([0x33; 96]),
    })
}

fn electra_block() -> Arc<electra::SignedBeaconBlock> {
    Arc::new(electra::SignedBeaconBlock {
        message: Some(electra::BeaconBlock {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body: Some(electra::BeaconBlockBody {
                attestations: vec![electra_attestation(1), electra_attestation(2)],
                attester_slashings: vec![electra::AttesterSlashing {
                    attestation_1: IndexedAttestation {
                        attesting_indices: vec![1, 2],
                        ..Default::default()
                    },
                    attestation_2: IndexedAttestation {
                        attesting_indices: vec![2, 3],
                        ..Default::default()
                    },
                }],
                proposer_slashings: vec![proposer_slashing()],
                sync_aggregate: Some(SyncAggregate::default()),
                execution_payload: Some(deneb::ExecutionPayload {
                    block_hash: B256::repeat_byte(0xe4),
                    block_number: 703,
                    ..Default::default()
                }),
                blob_kzg_commitments: vec![celadon_types::kzg::KzgCommitment::new([6u8; 48])],
                ..Default::default()
            }),
        }),
        signature: BlsSignature::new([0x44; 96]),
    })
}

fn all_envelopes() -> Vec<VersionedSignedBeaconBlock> {
    vec![
        VersionedSignedBeaconBlock::bellatrix(bellatrix_block()),
        VersionedSignedBeaconBlock::capella(capella_block()),
        VersionedSignedBeaconBlock::deneb(deneb_block()),
        VersionedSignedBeaconBlock::electra(electra_block()),
    ]
}

#[test]
fn every_fork_projects_the_same_message_fields() {
    for envelope in all_envelopes() {
        let fork = envelope.version();
        assert_eq!(envelope.slot().unwrap(), SLOT, "{fork}");
        assert_eq!(envelope.proposer_index().unwrap(), PROPOSER, "{fork}");
        assert_eq!(envelope.parent_root().unwrap(), parent_root(), "{fork}");
        assert_eq!(envelope.state_root().unwrap(), state_root(), "{fork}");
    }
}

#[test]
fn execution_fields_come_from_the_payload() {
    let expectations = [
        (Fork::Bellatrix, 0xe1u8, 700u64),
        (Fork::Capella, 0xe2, 701),
        (Fork::Deneb, 0xe3, 702),
        (Fork::Electra, 0xe4, 703),
    ];

    for (envelope, (fork, hash_byte, number)) in all_envelopes().iter().zip(expectations) {
        assert_eq!(envelope.version(), fork);
        assert_eq!(envelope.execution_block_hash().unwrap(), B256::repeat_byte(hash_byte));
        assert_eq!(envelope.execution_block_number().unwrap(), number);
    }
}

#[test]
fn attestations_preserve_length_order_and_tag() {
    for envelope in all_envelopes() {
        let attestations = envelope.attestations().unwrap();
        assert_eq!(attestations.len(), 2);

        for (i, attestation) in attestations.iter().enumerate() {
            assert_eq!(attestation.version(), envelope.version());
            // The i-th wrapper wraps the i-th source element.
            assert_eq!(attestation.data().slot, i as u64 + 1);
            assert_eq!(attestation.signature().as_bytes()[0], i as u8 + 1);
        }
    }
}

#[test]
fn attester_slashings_carry_the_envelope_tag() {
    for envelope in all_envelopes() {
        let slashings = envelope.attester_slashings().unwrap();
        assert_eq!(slashings.len(), 1);
        assert_eq!(slashings[0].version(), envelope.version());
        assert_eq!(slashings[0].attestation_1().attesting_indices(), &[1, 2]);
        assert_eq!(slashings[0].attestation_2().attesting_indices(), &[2, 3]);
    }
}

#[test]
fn proposer_slashings_and_sync_aggregate_are_borrowed() {
    for envelope in all_envelopes() {
        let slashings = envelope.proposer_slashings().unwrap();
        assert_eq!(slashings.len(), 1);
        assert_eq!(slashings[0].signed_header_1.message.slot, 4);

        assert_eq!(envelope.sync_aggregate().unwrap(), &SyncAggregate::default());
    }
}

#[test]
fn blob_commitments_exist_from_deneb_onwards() {
    let envelopes = all_envelopes();

    assert_eq!(envelopes[0].blob_kzg_commitments().unwrap_err(), Error::DataMissing);
    assert_eq!(envelopes[1].blob_kzg_commitments().unwrap_err(), Error::DataMissing);
    assert_eq!(envelopes[2].blob_kzg_commitments().unwrap().len(), 1);
    assert_eq!(envelopes[3].blob_kzg_commitments().unwrap().len(), 1);
}

#[test]
fn message_root_equals_the_equivalent_header_root() {
    // A block and its header merkleize to the same root once the header's
    // body_root is filled in; this ties the envelope's two root accessors
    // together.
    for envelope in all_envelopes() {
        let header = BeaconBlockHeader {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body_root: envelope.body_root().unwrap(),
        };

        assert_eq!(envelope.root().unwrap(), header.hash_tree_root());
    }
}

#[test]
fn roots_are_deterministic_and_fork_sensitive() {
    let envelopes = all_envelopes();

    for envelope in &envelopes {
        assert_eq!(envelope.root().unwrap(), envelope.root().unwrap());
    }

    // Same logical content, different fork containers: different roots.
    assert_ne!(envelopes[2].body_root().unwrap(), envelopes[3].body_root().unwrap());
}

#[test]
fn bellatrix_with_absent_body_reports_data_missing_not_empty() {
    let block = Arc::new(bellatrix::SignedBeaconBlock {
        message: Some(bellatrix::BeaconBlock {
            slot: SLOT,
            proposer_index: PROPOSER,
            parent_root: parent_root(),
            state_root: state_root(),
            body: None,
        }),
        signature: BlsSignature::default(),
    });
    let envelope = VersionedSignedBeaconBlock::bellatrix(block);

    assert_eq!(envelope.attestations().unwrap_err(), Error::DataMissing);
    assert_eq!(envelope.attester_slashings().unwrap_err(), Error::DataMissing);
    assert_eq!(envelope.body_root().unwrap_err(), Error::DataMissing);
    // The message itself is intact.
    assert_eq!(envelope.slot().unwrap(), SLOT);
}

#[test]
fn hashing_failures_propagate_unchanged() {
    // Body present but structurally incomplete: hashing it is a merkle
    // failure, not a data-missing condition.
    let block = Arc::new(bellatrix::SignedBeaconBlock {
        message: Some(bellatrix::BeaconBlock {
            slot: SLOT,
            body: Some(bellatrix::BeaconBlockBody {
                sync_aggregate: None,
                execution_payload: Some(bellatrix::ExecutionPayload::default()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        signature: BlsSignature::default(),
    });
    let envelope = VersionedSignedBeaconBlock::bellatrix(block);

    assert_eq!(
        envelope.body_root().unwrap_err(),
        Error::Merkle(MerkleError::MissingField("sync_aggregate"))
    );
    // But walking to the (present) sync-aggregate slot is data-missing.
    assert_eq!(envelope.sync_aggregate().unwrap_err(), Error::DataMissing);
}

#[test]
fn every_accessor_rejects_the_unsupported_tag() {
    let envelope = VersionedSignedBeaconBlock::Unsupported;

    assert_eq!(envelope.version(), Fork::Unsupported);
    assert_eq!(envelope.slot().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.proposer_index().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.parent_root().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.state_root().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.root().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.body_root().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.signature().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.execution_block_hash().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.execution_block_number().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.attestations().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.attester_slashings().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.proposer_slashings().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.sync_aggregate().unwrap_err(), Error::UnsupportedVersion);
    assert_eq!(envelope.blob_kzg_commitments().unwrap_err(), Error::UnsupportedVersion);
}

#[test]
fn string_form_edge_cases_stay_distinguishable() {
    // Known fork, no payload: empty string.
    for fork in [Fork::Bellatrix, Fork::Capella, Fork::Deneb, Fork::Electra] {
        assert_eq!(VersionedSignedBeaconBlock::empty(fork).to_string(), "");
    }

    // Unknown fork: the fixed placeholder.
    assert_eq!(VersionedSignedBeaconBlock::Unsupported.to_string(), "unsupported version");

    // Populated: the payload's own rendering.
    let envelope = VersionedSignedBeaconBlock::electra(electra_block());
    assert!(envelope.to_string().contains("\"slot\":12345"));
}
