//! Process bootstrap for the device registry.
//!
//! Loads configuration, installs the tracing subscriber and builds the
//! device store. Request handling layers sit on top of
//! [`wiring::build_device_store`].

pub mod config;
pub mod tracing;
pub mod wiring;
