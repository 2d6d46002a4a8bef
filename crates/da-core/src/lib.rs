//! # da-core
//!
//! Core domain models and store ports for the device admission registry.
//!
//! This crate contains no infrastructure dependencies. Storage engines live in
//! `da-infra` and plug in through [`ports::DeviceStorePort`].

pub mod config;
pub mod device;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, StoreConfig};
pub use device::{Device, DeviceAttributes, DeviceId, DevicePatch};
pub use ports::{DeviceStoreError, DeviceStorePort};
