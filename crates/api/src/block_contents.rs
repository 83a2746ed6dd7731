//! Block contents: an Electra proposal's block together with the KZG proofs
//! and blobs it commits to, encodable as JSON or YAML.
//!
//! JSON is the wire format and the single owner of the typed field mapping.
//! The YAML side is defined in terms of it: encoding reuses the JSON
//! serializer (JSON is the flow subset of YAML) and restyles the quotes;
//! decoding parses into a format-neutral value and routes it through the
//! JSON decoder. Neither direction has its own field mapping to drift.

use celadon_types::{
    electra,
    kzg::{Blob, KzgProof},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CodecError;

/// A proposal's full contents: the (unsigned) block plus the blob sidecar
/// material. The three fields are one atomic unit; a document missing any
/// of them fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContents {
    pub block: electra::BeaconBlock,
    pub kzg_proofs: Vec<KzgProof>,
    pub blobs: Vec<Blob>,
}

impl BlockContents {
    /// Encodes to the JSON wire form.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(CodecError::MarshalJson)
    }

    /// Decodes from the JSON wire form.
    pub fn from_json_bytes(input: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(input).map_err(CodecError::UnmarshalJson)
    }

    /// Encodes to flow-style YAML with single-quoted scalars.
    pub fn to_yaml_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(single_quoted(self.to_json_bytes()?))
    }

    /// Decodes from YAML, flow- or block-style.
    ///
    /// Three hops: parse the YAML into a format-neutral value, re-encode
    /// that value as JSON, and hand it to the JSON decoder.
    pub fn from_yaml_bytes(input: &[u8]) -> Result<Self, CodecError> {
        trace!(len = input.len(), "decoding block contents from YAML");

        let value: serde_json::Value = serde_yaml::from_slice(input).map_err(|err| {
            debug!(%err, "block contents YAML did not parse");
            CodecError::UnmarshalYaml(err)
        })?;
        let raw = serde_json::to_vec(&value).map_err(CodecError::MarshalJson)?;

        Self::from_json_bytes(&raw)
    }
}

/// Replaces every double-quote byte with a single quote.
///
/// Sound here because every scalar this codec emits is a hex string or an
/// integer: a `"` in the serialized output can only ever be a delimiter.
fn single_quoted(mut bytes: Vec<u8>) -> Vec<u8> {
    for byte in &mut bytes {
        if *byte == b'"' {
            *byte = b'\'';
        }
    }
    bytes
}
