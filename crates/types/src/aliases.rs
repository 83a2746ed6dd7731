//! Primitive aliases shared across Celadon crates.

pub type B256 = alloy_primitives::B256;
pub type U256 = alloy_primitives::U256;
pub type Address = alloy_primitives::Address;
pub type Bloom = alloy_primitives::Bloom;
pub type Bytes = alloy_primitives::Bytes;
pub type FixedBytes<const N: usize> = alloy_primitives::FixedBytes<N>;

/// A slot number on the beacon chain.
pub type Slot = u64;
/// An epoch number (a fixed span of slots).
pub type Epoch = u64;
/// An amount in Gwei.
pub type Gwei = u64;
/// The index of a validator within the registry.
pub type ValidatorIndex = u64;
/// The index of a committee within a slot.
pub type CommitteeIndex = u64;

/// A 32-byte SSZ hash tree root.
pub type Root = B256;
/// A 32-byte execution-layer block hash.
pub type Hash32 = B256;
