use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value_objects::DeviceId;

/// Arbitrary device metadata.
pub type DeviceAttributes = BTreeMap<String, serde_json::Value>;

/// Device record as stored in the registry.
///
/// Fields missing from a stored record deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device ID
    pub id: DeviceId,

    /// Admission state, see [`super::status`]
    #[serde(default)]
    pub status: String,

    /// Authentication public key
    #[serde(default)]
    pub key: String,

    /// Opaque identity blob reported by the device
    #[serde(default)]
    pub device_identity: String,

    #[serde(default)]
    pub attributes: DeviceAttributes,
}

impl Device {
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_device_identity(mut self, identity: impl Into<String>) -> Self {
        self.device_identity = identity.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}
