use super::device::{Device, DeviceAttributes};
use super::value_objects::DeviceId;

/// Partial update for a single device.
///
/// `None` leaves the stored field untouched. `Some` overwrites it, so
/// `Some(String::new())` clears a field explicitly. `attributes` replaces the
/// stored mapping as a whole; there is no per-key merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevicePatch {
    pub id: DeviceId,
    pub status: Option<String>,
    pub key: Option<String>,
    pub device_identity: Option<String>,
    pub attributes: Option<DeviceAttributes>,
}

impl DevicePatch {
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn device_identity(mut self, identity: impl Into<String>) -> Self {
        self.device_identity = Some(identity.into());
        self
    }

    pub fn attributes(mut self, attributes: DeviceAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// True when no field besides the identity is supplied.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.key.is_none()
            && self.device_identity.is_none()
            && self.attributes.is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Full records carry no "absent" marker, so empty strings and an empty
/// attribute map are treated as not supplied.
impl From<&Device> for DevicePatch {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id.clone(),
            status: non_empty(&device.status),
            key: non_empty(&device.key),
            device_identity: non_empty(&device.device_identity),
            attributes: (!device.attributes.is_empty()).then(|| device.attributes.clone()),
        }
    }
}

impl From<Device> for DevicePatch {
    fn from(device: Device) -> Self {
        Self::from(&device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_device_drops_empty_fields() {
        let device = Device::new("dev-1").with_status("pending");

        let patch = DevicePatch::from(&device);

        assert_eq!(patch.id.as_str(), "dev-1");
        assert_eq!(patch.status.as_deref(), Some("pending"));
        assert_eq!(patch.key, None);
        assert_eq!(patch.device_identity, None);
        assert_eq!(patch.attributes, None);
    }

    #[test]
    fn from_device_keeps_non_empty_attributes() {
        let device = Device::new("dev-1").with_attribute("mac", json!("00:11:22"));

        let patch = DevicePatch::from(device);

        let attributes = patch.attributes.expect("attributes should be supplied");
        assert_eq!(attributes.get("mac"), Some(&json!("00:11:22")));
        assert!(patch.status.is_none());
    }

    #[test]
    fn explicit_clear_is_distinct_from_absent() {
        let cleared = DevicePatch::new("dev-1").key("");
        let untouched = DevicePatch::new("dev-1");

        assert_eq!(cleared.key.as_deref(), Some(""));
        assert!(!cleared.is_empty());
        assert!(untouched.is_empty());
    }
}
