//! The versioned signed beacon block envelope.

use std::{fmt, sync::Arc};

use celadon_types::{
    aliases::{Hash32, Root, Slot, ValidatorIndex},
    altair::SyncAggregate,
    bellatrix,
    bls::BlsSignature,
    capella, deneb, electra,
    fork::Fork,
    kzg::KzgCommitment,
    phase0::ProposerSlashing,
};

use crate::{
    error::Error,
    versioned::{attestation::VersionedAttestation, slashing::VersionedAttesterSlashing},
};

/// A signed beacon block from any supported fork, behind one accessor
/// surface.
///
/// Each variant holds the payload for exactly one fork, so a populated slot
/// can never disagree with the tag. The payload is `Arc`-shared with the
/// caller and optional: `Bellatrix(None)` is a recognized fork with no data
/// attached, which accessors report as [`Error::DataMissing`], distinct
/// from [`VersionedSignedBeaconBlock::Unsupported`].
///
/// Every accessor validates the full path from the payload down to the
/// requested field and fails on the first absent link; none of them returns
/// a partial or defaulted value. All accessors are read-only, so a
/// constructed envelope can be shared across threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionedSignedBeaconBlock {
    Bellatrix(Option<Arc<bellatrix::SignedBeaconBlock>>),
    Capella(Option<Arc<capella::SignedBeaconBlock>>),
    Deneb(Option<Arc<deneb::SignedBeaconBlock>>),
    Electra(Option<Arc<electra::SignedBeaconBlock>>),
    Unsupported,
}

impl VersionedSignedBeaconBlock {
    pub fn bellatrix(block: Arc<bellatrix::SignedBeaconBlock>) -> Self {
        Self::Bellatrix(Some(block))
    }

    pub fn capella(block: Arc<capella::SignedBeaconBlock>) -> Self {
        Self::Capella(Some(block))
    }

    pub fn deneb(block: Arc<deneb::SignedBeaconBlock>) -> Self {
        Self::Deneb(Some(block))
    }

    pub fn electra(block: Arc<electra::SignedBeaconBlock>) -> Self {
        Self::Electra(Some(block))
    }

    /// An envelope with a known fork tag but no payload attached.
    pub fn empty(fork: Fork) -> Self {
        match fork {
            Fork::Bellatrix => Self::Bellatrix(None),
            Fork::Capella => Self::Capella(None),
            Fork::Deneb => Self::Deneb(None),
            Fork::Electra => Self::Electra(None),
            Fork::Unsupported => Self::Unsupported,
        }
    }

    /// The fork tag of this envelope.
    pub fn version(&self) -> Fork {
        match self {
            Self::Bellatrix(_) => Fork::Bellatrix,
            Self::Capella(_) => Fork::Capella,
            Self::Deneb(_) => Fork::Deneb,
            Self::Electra(_) => Fork::Electra,
            Self::Unsupported => Fork::Unsupported,
        }
    }

    /// The slot of the beacon block.
    pub fn slot(&self) -> Result<Slot, Error> {
        match self {
            Self::Bellatrix(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.slot)
            }
            Self::Capella(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.slot)
            }
            Self::Deneb(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.slot)
            }
            Self::Electra(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.slot)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The proposer index of the beacon block.
    pub fn proposer_index(&self) -> Result<ValidatorIndex, Error> {
        match self {
            Self::Bellatrix(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.proposer_index)
            }
            Self::Capella(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.proposer_index)
            }
            Self::Deneb(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.proposer_index)
            }
            Self::Electra(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.proposer_index)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The parent root of the beacon block.
    pub fn parent_root(&self) -> Result<Root, Error> {
        match self {
            Self::Bellatrix(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.parent_root)
            }
            Self::Capella(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.parent_root)
            }
            Self::Deneb(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.parent_root)
            }
            Self::Electra(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.parent_root)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The state root of the beacon block.
    pub fn state_root(&self) -> Result<Root, Error> {
        match self {
            Self::Bellatrix(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.state_root)
            }
            Self::Capella(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.state_root)
            }
            Self::Deneb(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.state_root)
            }
            Self::Electra(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.state_root)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The hash tree root of the beacon block message.
    pub fn root(&self) -> Result<Root, Error> {
        match self {
            Self::Bellatrix(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.hash_tree_root()?)
            }
            Self::Capella(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.hash_tree_root()?)
            }
            Self::Deneb(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.hash_tree_root()?)
            }
            Self::Electra(block) => {
                let message =
                    block.as_deref().and_then(|b| b.message.as_ref()).ok_or(Error::DataMissing)?;
                Ok(message.hash_tree_root()?)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The hash tree root of the beacon block body.
    pub fn body_root(&self) -> Result<Root, Error> {
        match self {
            Self::Bellatrix(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.hash_tree_root()?)
            }
            Self::Capella(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.hash_tree_root()?)
            }
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.hash_tree_root()?)
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.hash_tree_root()?)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The proposer's signature over the beacon block.
    pub fn signature(&self) -> Result<BlsSignature, Error> {
        match self {
            Self::Bellatrix(block) => {
                let block = block.as_deref().ok_or(Error::DataMissing)?;
                Ok(block.signature)
            }
            Self::Capella(block) => {
                let block = block.as_deref().ok_or(Error::DataMissing)?;
                Ok(block.signature)
            }
            Self::Deneb(block) => {
                let block = block.as_deref().ok_or(Error::DataMissing)?;
                Ok(block.signature)
            }
            Self::Electra(block) => {
                let block = block.as_deref().ok_or(Error::DataMissing)?;
                Ok(block.signature)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The execution-layer block hash of the embedded payload.
    pub fn execution_block_hash(&self) -> Result<Hash32, Error> {
        match self {
            Self::Bellatrix(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_hash)
            }
            Self::Capella(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_hash)
            }
            Self::Deneb(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_hash)
            }
            Self::Electra(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_hash)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The execution-layer block number of the embedded payload.
    pub fn execution_block_number(&self) -> Result<u64, Error> {
        match self {
            Self::Bellatrix(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_number)
            }
            Self::Capella(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_number)
            }
            Self::Deneb(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_number)
            }
            Self::Electra(block) => {
                let payload = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .and_then(|body| body.execution_payload.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(payload.block_number)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The attestations of the beacon block, each wrapped with this
    /// envelope's fork tag. Order and length match the body's list.
    pub fn attestations(&self) -> Result<Vec<VersionedAttestation<'_>>, Error> {
        match self {
            Self::Bellatrix(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attestations.iter().map(VersionedAttestation::Bellatrix).collect())
            }
            Self::Capella(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attestations.iter().map(VersionedAttestation::Capella).collect())
            }
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attestations.iter().map(VersionedAttestation::Deneb).collect())
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attestations.iter().map(VersionedAttestation::Electra).collect())
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The attester slashings of the beacon block, each wrapped with this
    /// envelope's fork tag. Order and length match the body's list.
    pub fn attester_slashings(&self) -> Result<Vec<VersionedAttesterSlashing<'_>>, Error> {
        match self {
            Self::Bellatrix(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body
                    .attester_slashings
                    .iter()
                    .map(VersionedAttesterSlashing::Bellatrix)
                    .collect())
            }
            Self::Capella(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attester_slashings.iter().map(VersionedAttesterSlashing::Capella).collect())
            }
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attester_slashings.iter().map(VersionedAttesterSlashing::Deneb).collect())
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.attester_slashings.iter().map(VersionedAttesterSlashing::Electra).collect())
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The proposer slashings of the beacon block. The type is identical
    /// across forks, so the body's slice is borrowed as-is.
    pub fn proposer_slashings(&self) -> Result<&[ProposerSlashing], Error> {
        match self {
            Self::Bellatrix(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.proposer_slashings.as_slice())
            }
            Self::Capella(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.proposer_slashings.as_slice())
            }
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.proposer_slashings.as_slice())
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.proposer_slashings.as_slice())
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The sync aggregate of the beacon block.
    pub fn sync_aggregate(&self) -> Result<&SyncAggregate, Error> {
        match self {
            Self::Bellatrix(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                body.sync_aggregate.as_ref().ok_or(Error::DataMissing)
            }
            Self::Capella(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                body.sync_aggregate.as_ref().ok_or(Error::DataMissing)
            }
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                body.sync_aggregate.as_ref().ok_or(Error::DataMissing)
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                body.sync_aggregate.as_ref().ok_or(Error::DataMissing)
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }

    /// The blob KZG commitments of the beacon block. The field only exists
    /// from Deneb onwards; earlier forks report missing data.
    pub fn blob_kzg_commitments(&self) -> Result<&[KzgCommitment], Error> {
        match self {
            Self::Bellatrix(_) | Self::Capella(_) => Err(Error::DataMissing),
            Self::Deneb(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.blob_kzg_commitments.as_slice())
            }
            Self::Electra(block) => {
                let body = block
                    .as_deref()
                    .and_then(|b| b.message.as_ref())
                    .and_then(|m| m.body.as_ref())
                    .ok_or(Error::DataMissing)?;
                Ok(body.blob_kzg_commitments.as_slice())
            }
            Self::Unsupported => Err(Error::UnsupportedVersion),
        }
    }
}

impl fmt::Display for VersionedSignedBeaconBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bellatrix(Some(block)) => write!(f, "{block}"),
            Self::Capella(Some(block)) => write!(f, "{block}"),
            Self::Deneb(Some(block)) => write!(f, "{block}"),
            Self::Electra(Some(block)) => write!(f, "{block}"),
            // A known fork with no payload renders as the empty string;
            // only an unrecognized fork renders the placeholder.
            Self::Bellatrix(None)
            | Self::Capella(None)
            | Self::Deneb(None)
            | Self::Electra(None) => Ok(()),
            Self::Unsupported => f.write_str("unsupported version"),
        }
    }
}

#[cfg(test)]
mod tests {
    use celadon_types::{aliases::B256, bellatrix};

    use super::*;

    fn bellatrix_block(slot: Slot) -> Arc<bellatrix::SignedBeaconBlock> {
        Arc::new(bellatrix::SignedBeaconBlock {
            message: Some(bellatrix::BeaconBlock {
                slot,
                proposer_index: 7,
                parent_root: B256::repeat_byte(1),
                state_root: B256::repeat_byte(2),
                body: Some(bellatrix::BeaconBlockBody {
                    sync_aggregate: Some(SyncAggregate::default()),
                    execution_payload: Some(bellatrix::ExecutionPayload {
                        block_hash: B256::repeat_byte(3),
                        block_number: 900,
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            }),
            signature: BlsSignature::new([6u8; 96]),
        })
    }

    #[test]
    fn populated_envelope_projects_message_fields() {
        let envelope = VersionedSignedBeaconBlock::bellatrix(bellatrix_block(1234));

        assert_eq!(envelope.version(), Fork::Bellatrix);
        assert_eq!(envelope.slot().unwrap(), 1234);
        assert_eq!(envelope.proposer_index().unwrap(), 7);
        assert_eq!(envelope.parent_root().unwrap(), B256::repeat_byte(1));
        assert_eq!(envelope.state_root().unwrap(), B256::repeat_byte(2));
        assert_eq!(envelope.execution_block_hash().unwrap(), B256::repeat_byte(3));
        assert_eq!(envelope.execution_block_number().unwrap(), 900);
        assert_eq!(envelope.signature().unwrap(), BlsSignature::new([6u8; 96]));
    }

    #[test]
    fn payload_is_shared_not_moved() {
        let block = bellatrix_block(55);
        let envelope = VersionedSignedBeaconBlock::bellatrix(Arc::clone(&block));

        // The caller's handle still works and agrees with the envelope.
        assert_eq!(block.message.as_ref().unwrap().slot, envelope.slot().unwrap());
    }

    #[test]
    fn empty_slot_reports_data_missing() {
        let envelope = VersionedSignedBeaconBlock::empty(Fork::Deneb);

        assert_eq!(envelope.version(), Fork::Deneb);
        assert_eq!(envelope.slot().unwrap_err(), Error::DataMissing);
        assert_eq!(envelope.signature().unwrap_err(), Error::DataMissing);
        assert_eq!(envelope.body_root().unwrap_err(), Error::DataMissing);
    }

    #[test]
    fn unsupported_tag_wins_over_everything() {
        let envelope = VersionedSignedBeaconBlock::Unsupported;

        assert_eq!(envelope.slot().unwrap_err(), Error::UnsupportedVersion);
        assert_eq!(envelope.root().unwrap_err(), Error::UnsupportedVersion);
        assert_eq!(envelope.attestations().unwrap_err(), Error::UnsupportedVersion);
        assert_eq!(envelope.sync_aggregate().unwrap_err(), Error::UnsupportedVersion);
    }

    #[test]
    fn missing_body_fails_body_level_accessors() {
        let block = Arc::new(bellatrix::SignedBeaconBlock {
            message: Some(bellatrix::BeaconBlock { slot: 2, ..Default::default() }),
            signature: BlsSignature::default(),
        });
        let envelope = VersionedSignedBeaconBlock::bellatrix(block);

        // Message-level fields still work.
        assert_eq!(envelope.slot().unwrap(), 2);
        // Body-level ones do not.
        assert_eq!(envelope.attestations().unwrap_err(), Error::DataMissing);
        assert_eq!(envelope.proposer_slashings().unwrap_err(), Error::DataMissing);
        assert_eq!(envelope.execution_block_hash().unwrap_err(), Error::DataMissing);
    }

    #[test]
    fn string_form_distinguishes_empty_from_unsupported() {
        let empty = VersionedSignedBeaconBlock::empty(Fork::Capella);
        assert_eq!(empty.to_string(), "");

        let unsupported = VersionedSignedBeaconBlock::Unsupported;
        assert_eq!(unsupported.to_string(), "unsupported version");
    }

    #[test]
    fn string_form_of_populated_envelope_is_the_payload_json() {
        let envelope = VersionedSignedBeaconBlock::bellatrix(bellatrix_block(77));
        let rendered = envelope.to_string();
        assert!(rendered.contains("\"slot\":77"));
    }

    #[test]
    fn pre_deneb_forks_have_no_blob_commitments() {
        let envelope = VersionedSignedBeaconBlock::bellatrix(bellatrix_block(1));
        assert_eq!(envelope.blob_kzg_commitments().unwrap_err(), Error::DataMissing);
    }
}
