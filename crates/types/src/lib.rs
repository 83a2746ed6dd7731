#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![allow(missing_docs)]

pub mod aliases;
pub mod consts;
pub mod fork;

pub mod bls;
pub mod kzg;
pub mod merkle;

pub mod altair;
pub mod bellatrix;
pub mod capella;
pub mod deneb;
pub mod electra;
pub mod phase0;
