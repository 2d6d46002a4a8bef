//! Port interfaces for the registry
//!
//! Ports define the contract between admission logic and infrastructure
//! implementations. The core never depends on a concrete storage engine.

pub mod device_store;
pub mod errors;

pub use device_store::DeviceStorePort;
pub use errors::{BoxError, DeviceStoreError};
