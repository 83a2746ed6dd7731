//! A fork-tagged view of a single attestation.

use celadon_types::{
    aliases::{Bytes, FixedBytes},
    bls::BlsSignature,
    electra,
    fork::Fork,
    phase0::{self, AttestationData},
};

use crate::error::Error;

/// One attestation out of a versioned block, tagged with the block's fork.
///
/// Borrows from the envelope that produced it; nothing is copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionedAttestation<'a> {
    Bellatrix(&'a phase0::Attestation),
    Capella(&'a phase0::Attestation),
    Deneb(&'a phase0::Attestation),
    Electra(&'a electra::Attestation),
}

impl<'a> VersionedAttestation<'a> {
    /// The fork tag of this attestation.
    pub fn version(&self) -> Fork {
        match self {
            Self::Bellatrix(_) => Fork::Bellatrix,
            Self::Capella(_) => Fork::Capella,
            Self::Deneb(_) => Fork::Deneb,
            Self::Electra(_) => Fork::Electra,
        }
    }

    /// The signed attestation data.
    pub fn data(&self) -> &'a AttestationData {
        match self {
            Self::Bellatrix(attestation) => &attestation.data,
            Self::Capella(attestation) => &attestation.data,
            Self::Deneb(attestation) => &attestation.data,
            Self::Electra(attestation) => &attestation.data,
        }
    }

    /// The raw aggregation bitlist.
    pub fn aggregation_bits(&self) -> &'a Bytes {
        match self {
            Self::Bellatrix(attestation) => &attestation.aggregation_bits,
            Self::Capella(attestation) => &attestation.aggregation_bits,
            Self::Deneb(attestation) => &attestation.aggregation_bits,
            Self::Electra(attestation) => &attestation.aggregation_bits,
        }
    }

    /// The aggregated signature.
    pub fn signature(&self) -> &'a BlsSignature {
        match self {
            Self::Bellatrix(attestation) => &attestation.signature,
            Self::Capella(attestation) => &attestation.signature,
            Self::Deneb(attestation) => &attestation.signature,
            Self::Electra(attestation) => &attestation.signature,
        }
    }

    /// The committee bitvector. Only Electra attestations carry one;
    /// earlier forks report missing data.
    pub fn committee_bits(&self) -> Result<&'a FixedBytes<8>, Error> {
        match self {
            Self::Bellatrix(_) | Self::Capella(_) | Self::Deneb(_) => Err(Error::DataMissing),
            Self::Electra(attestation) => Ok(&attestation.committee_bits),
        }
    }
}
