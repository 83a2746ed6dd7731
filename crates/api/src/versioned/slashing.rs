//! Fork-tagged views of attester-slashing evidence.

use celadon_types::{
    aliases::ValidatorIndex,
    bls::BlsSignature,
    electra,
    fork::Fork,
    phase0::{self, AttestationData, IndexedAttestation},
};

/// One attester slashing out of a versioned block, tagged with the block's
/// fork. Borrows from the envelope that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionedAttesterSlashing<'a> {
    Bellatrix(&'a phase0::AttesterSlashing),
    Capella(&'a phase0::AttesterSlashing),
    Deneb(&'a phase0::AttesterSlashing),
    Electra(&'a electra::AttesterSlashing),
}

impl<'a> VersionedAttesterSlashing<'a> {
    /// The fork tag of this slashing.
    pub fn version(&self) -> Fork {
        match self {
            Self::Bellatrix(_) => Fork::Bellatrix,
            Self::Capella(_) => Fork::Capella,
            Self::Deneb(_) => Fork::Deneb,
            Self::Electra(_) => Fork::Electra,
        }
    }

    /// The first of the two conflicting attestations.
    pub fn attestation_1(&self) -> VersionedIndexedAttestation<'a> {
        match self {
            Self::Bellatrix(slashing) => {
                VersionedIndexedAttestation::Bellatrix(&slashing.attestation_1)
            }
            Self::Capella(slashing) => VersionedIndexedAttestation::Capella(&slashing.attestation_1),
            Self::Deneb(slashing) => VersionedIndexedAttestation::Deneb(&slashing.attestation_1),
            Self::Electra(slashing) => VersionedIndexedAttestation::Electra(&slashing.attestation_1),
        }
    }

    /// The second of the two conflicting attestations.
    pub fn attestation_2(&self) -> VersionedIndexedAttestation<'a> {
        match self {
            Self::Bellatrix(slashing) => {
                VersionedIndexedAttestation::Bellatrix(&slashing.attestation_2)
            }
            Self::Capella(slashing) => VersionedIndexedAttestation::Capella(&slashing.attestation_2),
            Self::Deneb(slashing) => VersionedIndexedAttestation::Deneb(&slashing.attestation_2),
            Self::Electra(slashing) => VersionedIndexedAttestation::Electra(&slashing.attestation_2),
        }
    }
}

/// A fork-tagged view of one indexed attestation inside a slashing.
///
/// The container shape is shared across the supported range; the tag still
/// travels with the reference so callers know which limits apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionedIndexedAttestation<'a> {
    Bellatrix(&'a IndexedAttestation),
    Capella(&'a IndexedAttestation),
    Deneb(&'a IndexedAttestation),
    Electra(&'a IndexedAttestation),
}

impl<'a> VersionedIndexedAttestation<'a> {
    /// The fork tag of this indexed attestation.
    pub fn version(&self) -> Fork {
        match self {
            Self::Bellatrix(_) => Fork::Bellatrix,
            Self::Capella(_) => Fork::Capella,
            Self::Deneb(_) => Fork::Deneb,
            Self::Electra(_) => Fork::Electra,
        }
    }

    /// The indices of the attesting validators.
    pub fn attesting_indices(&self) -> &'a [ValidatorIndex] {
        match self {
            Self::Bellatrix(attestation) => &attestation.attesting_indices,
            Self::Capella(attestation) => &attestation.attesting_indices,
            Self::Deneb(attestation) => &attestation.attesting_indices,
            Self::Electra(attestation) => &attestation.attesting_indices,
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

    /// The aggregated signature.
    pub fn signature(&self) -> &'a BlsSignature {
        match self {
            Self::Bellatrix(attestation) => &attestation.signature,
            Self::Capella(attestation) => &attestation.signature,
            Self::Deneb(attestation) => &attestation.signature,
            Self::Electra(attestation) => &attestation.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_carry_the_wrapping_fork() {
        let slashing = phase0::AttesterSlashing {
            attestation_1: IndexedAttestation {
                attesting_indices: vec![1, 2, 3],
                ..Default::default()
            },
            attestation_2: IndexedAttestation {
                attesting_indices: vec![4, 5],
                ..Default::default()
            },
        };

        let versioned = VersionedAttesterSlashing::Deneb(&slashing);
        assert_eq!(versioned.version(), Fork::Deneb);

        let first = versioned.attestation_1();
        assert_eq!(first.version(), Fork::Deneb);
        assert_eq!(first.attesting_indices(), &[1, 2, 3]);
        assert_eq!(versioned.attestation_2().attesting_indices(), &[4, 5]);
    }

    #[test]
    fn electra_slashing_views_work_the_same_way() {
        let slashing = electra::AttesterSlashing {
            attestation_1: IndexedAttestation {
                attesting_indices: vec![9],
                ..Default::default()
            },
            ..Default::default()
        };

        let versioned = VersionedAttesterSlashing::Electra(&slashing);
        assert_eq!(versioned.attestation_1().version(), Fork::Electra);
        assert_eq!(versioned.attestation_1().attesting_indices(), &[9]);
    }
}
