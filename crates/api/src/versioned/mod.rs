//! Fork-tagged wrappers around blocks and their sub-items.
//!
//! Each wrapper is a closed enum with one variant per supported fork, so
//! adding a fork is a compile-enforced update at every accessor rather than
//! a silently skipped branch.

pub mod attestation;
pub mod block;
pub mod slashing;
