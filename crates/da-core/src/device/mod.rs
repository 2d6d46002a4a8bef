//! Device domain models.

pub mod device;
pub mod patch;
pub mod status;
pub mod value_objects;

pub use device::{Device, DeviceAttributes};
pub use patch::DevicePatch;
pub use value_objects::DeviceId;
