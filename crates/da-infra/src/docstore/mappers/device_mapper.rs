use da_core::device::{Device, DevicePatch};
use mongodb::bson::{self, Document};

use crate::docstore::error::{StoreError, StoreErrorKind};
use crate::docstore::ports::{DocumentMapper, UpdateMapper};
use crate::docstore::query::{FIELD_ATTRIBUTES, FIELD_DEVICE_IDENTITY, FIELD_KEY, FIELD_STATUS};

pub struct DeviceDocumentMapper;

impl DocumentMapper<Device> for DeviceDocumentMapper {
    fn to_domain(&self, doc: Document) -> Result<Device, StoreError> {
        bson::from_document(doc).map_err(|e| {
            StoreError::with_source(
                StoreErrorKind::Serialization,
                format!("failed to decode device document: {e}"),
                e,
            )
        })
    }
}

impl UpdateMapper<DevicePatch> for DeviceDocumentMapper {
    fn to_fields(&self, patch: &DevicePatch) -> Result<Document, StoreError> {
        let mut fields = Document::new();
        if let Some(status) = &patch.status {
            fields.insert(FIELD_STATUS, status.as_str());
        }
        if let Some(key) = &patch.key {
            fields.insert(FIELD_KEY, key.as_str());
        }
        if let Some(identity) = &patch.device_identity {
            fields.insert(FIELD_DEVICE_IDENTITY, identity.as_str());
        }
        // Replaces the stored mapping as a whole.
        if let Some(attributes) = &patch.attributes {
            let value = bson::to_bson(attributes).map_err(|e| {
                StoreError::with_source(
                    StoreErrorKind::Serialization,
                    format!("failed to encode attributes of device {}: {e}", patch.id),
                    e,
                )
            })?;
            fields.insert(FIELD_ATTRIBUTES, value);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn decodes_stored_document_and_ignores_store_id() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "id": "dev-1",
            "status": "pending",
            "key": "pubkey",
            "attributes": { "mac": "00:11", "port": 8080_i64 },
        };

        let device = DeviceDocumentMapper.to_domain(doc).unwrap();

        assert_eq!(device.id.as_str(), "dev-1");
        assert_eq!(device.status, "pending");
        assert_eq!(device.key, "pubkey");
        assert_eq!(device.device_identity, "");
        assert_eq!(device.attributes.get("mac"), Some(&json!("00:11")));
        assert_eq!(device.attributes.get("port"), Some(&json!(8080)));
    }

    #[test]
    fn malformed_document_is_serialization_error() {
        let err = DeviceDocumentMapper
            .to_domain(doc! { "id": "dev-1", "status": 5 })
            .unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::Serialization);
    }

    #[test]
    fn only_supplied_fields_are_encoded() {
        let patch = DevicePatch::new("dev-1").status("accepted");

        let fields = DeviceDocumentMapper.to_fields(&patch).unwrap();

        assert_eq!(fields, doc! { "status": "accepted" });
    }

    #[test]
    fn explicit_clear_is_encoded_as_empty_string() {
        let patch = DevicePatch::new("dev-1").key("");

        let fields = DeviceDocumentMapper.to_fields(&patch).unwrap();

        assert_eq!(fields, doc! { "key": "" });
    }

    #[test]
    fn attributes_are_encoded_as_subdocument() {
        let device = Device::new("dev-1")
            .with_attribute("mac", json!("00:11"))
            .with_attribute("tags", json!(["a", "b"]));

        let fields = DeviceDocumentMapper
            .to_fields(&DevicePatch::from(&device))
            .unwrap();

        let attributes = fields.get_document("attributes").unwrap();
        assert_eq!(attributes.get_str("mac").unwrap(), "00:11");
        assert_eq!(attributes.get_array("tags").unwrap().len(), 2);
        assert!(!fields.contains_key("status"));
    }
}
