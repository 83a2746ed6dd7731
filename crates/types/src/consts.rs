//! Consensus preset constants shared across Celadon crates.
//!
//! These are the mainnet SSZ list limits and fixed byte sizes. The list
//! limits fix the depth of each Merkle tree, so changing any of them changes
//! every dependent hash tree root.

/// Maximum proposer slashings per block body.
pub const MAX_PROPOSER_SLASHINGS: usize = 16;
/// Maximum attester slashings per block body (pre-Electra).
pub const MAX_ATTESTER_SLASHINGS: usize = 2;
/// Maximum attester slashings per block body from Electra onwards.
pub const MAX_ATTESTER_SLASHINGS_ELECTRA: usize = 1;
/// Maximum attestations per block body (pre-Electra).
pub const MAX_ATTESTATIONS: usize = 128;
/// Maximum attestations per block body from Electra onwards.
pub const MAX_ATTESTATIONS_ELECTRA: usize = 8;
/// Maximum deposits per block body.
pub const MAX_DEPOSITS: usize = 16;
/// Maximum voluntary exits per block body.
pub const MAX_VOLUNTARY_EXITS: usize = 16;
/// Maximum BLS-to-execution changes per block body (Capella onwards).
pub const MAX_BLS_TO_EXECUTION_CHANGES: usize = 16;

/// Maximum validators in a single committee.
pub const MAX_VALIDATORS_PER_COMMITTEE: usize = 2048;
/// Maximum committees per slot.
pub const MAX_COMMITTEES_PER_SLOT: usize = 64;
/// Aggregation-bits limit for an Electra on-chain attestation, which spans
/// every committee of the slot.
pub const MAX_VALIDATORS_PER_SLOT: usize = MAX_VALIDATORS_PER_COMMITTEE * MAX_COMMITTEES_PER_SLOT;

/// Sync committee size in bits.
pub const SYNC_COMMITTEE_SIZE: usize = 512;

/// Depth of the deposit contract Merkle tree, plus one for the mixed-in
/// leaf count.
pub const DEPOSIT_PROOF_LENGTH: usize = 33;

/// Maximum transactions in an execution payload.
pub const MAX_TRANSACTIONS_PER_PAYLOAD: usize = 1 << 20;
/// Maximum byte length of a single transaction.
pub const MAX_BYTES_PER_TRANSACTION: usize = 1 << 30;
/// Maximum byte length of an execution payload's extra data.
pub const MAX_EXTRA_DATA_BYTES: usize = 32;
/// Byte length of an execution payload's logs bloom.
pub const BYTES_PER_LOGS_BLOOM: usize = 256;
/// Maximum withdrawals in an execution payload (Capella onwards).
pub const MAX_WITHDRAWALS_PER_PAYLOAD: usize = 16;

/// SSZ list capacity for blob KZG commitments (Deneb onwards).
pub const MAX_BLOB_COMMITMENTS_PER_BLOCK: usize = 4096;

/// Maximum deposit requests in an Electra execution-requests bundle.
pub const MAX_DEPOSIT_REQUESTS_PER_PAYLOAD: usize = 8192;
/// Maximum withdrawal requests in an Electra execution-requests bundle.
pub const MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD: usize = 16;
/// Maximum consolidation requests in an Electra execution-requests bundle.
pub const MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD: usize = 2;

/// The number of bytes in a single blob.
///
/// 4096 field elements of 32 bytes each; fixed by EIP-4844.
pub const BYTES_PER_BLOB: usize = 131_072;
/// The size of a KZG commitment in bytes (compressed BLS12-381 G1 point).
pub const BYTES_PER_COMMITMENT: usize = 48;
/// The size of a KZG proof in bytes (compressed BLS12-381 G1 point).
pub const BYTES_PER_PROOF: usize = 48;

/// The size of a BLS public key in bytes.
pub const BYTES_PER_PUBLIC_KEY: usize = 48;
/// The size of a BLS signature in bytes.
pub const BYTES_PER_SIGNATURE: usize = 96;
