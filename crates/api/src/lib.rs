#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![allow(missing_docs)]

pub mod block_contents;
pub mod error;
pub mod versioned;

pub use block_contents::BlockContents;
pub use error::{CodecError, Error};
pub use versioned::{
    attestation::VersionedAttestation,
    block::VersionedSignedBeaconBlock,
    slashing::{VersionedAttesterSlashing, VersionedIndexedAttestation},
};
