#![no_std]

//! riskpipe core - exposure raster and pipeline gating definitions
//!
//! This crate provides the data model, grid geometry, header format and
//! gating predicates used by a seismic risk pipeline. It performs no I/O:
//! file access lives in the `riskpipe` crate behind the traits defined here.

extern crate alloc;

pub mod asset;
pub mod error;
pub mod format;
pub mod memory;
pub mod pipe;
pub mod site;
pub mod specification;
pub mod traits;
pub mod validation;
pub mod vulnerability;

pub use asset::Asset;
pub use error::*;
pub use format::*;
pub use memory::GridValues;
pub use pipe::{ExposureAsset, MeanFunction, MeanIml, Pipe, PipeKey, PipeSlot};
pub use site::Site;
pub use specification::{
    AllOf, And, AnyOf, BoxedSpecification, IsAssetComputable, IsHazardImlInRange, Not, Or, Specification,
};
pub use traits::*;
pub use vulnerability::DiscreteVulnerabilityFunction;
