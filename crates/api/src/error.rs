//! Error types for the versioned accessor surface and the block-contents
//! codecs.

use celadon_types::merkle::MerkleError;
use thiserror::Error;

/// Errors returned by the versioned envelope and sub-item accessors.
///
/// Every failure is deterministic for a given envelope; there is nothing to
/// retry at this level.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The envelope's fork tag is outside the supported set. Checked before
    /// any payload access.
    #[error("unsupported version")]
    UnsupportedVersion,

    /// The fork is known, but a link on the path to the requested field
    /// (payload, message, body, or a nested structure) is absent.
    #[error("data missing")]
    DataMissing,

    /// Merkleization failed while computing a root; passed through from the
    /// hashing layer untouched.
    #[error(transparent)]
    Merkle(#[from] MerkleError),
}

/// Errors from encoding or decoding block contents.
///
/// The YAML decode path runs in stages (parse, re-encode, typed decode);
/// each variant names the stage that failed.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input could not be parsed as YAML.
    #[error("failed to unmarshal YAML: {0}")]
    UnmarshalYaml(#[source] serde_yaml::Error),

    /// The intermediate value could not be re-encoded as JSON.
    #[error("failed to marshal JSON: {0}")]
    MarshalJson(#[source] serde_json::Error),

    /// The JSON encoding could not be decoded into the typed structure.
    #[error("failed to unmarshal JSON: {0}")]
    UnmarshalJson(#[source] serde_json::Error),
}
