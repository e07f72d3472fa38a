//! Collaborator interfaces
//!
//! Pure interfaces with no I/O: implementations live in the `riskpipe`
//! crate or in the surrounding system.

pub mod command;
pub mod exposure;

pub use command::CommandRunner;
pub use exposure::{AssetReader, ExposureReader, GridSource};
