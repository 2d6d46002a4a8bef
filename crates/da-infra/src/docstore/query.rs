//! Filter and update documents for the devices collection.

use da_core::device::DeviceId;
use mongodb::bson::{doc, Document};

pub const FIELD_ID: &str = "id";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_KEY: &str = "key";
pub const FIELD_DEVICE_IDENTITY: &str = "device_identity";
pub const FIELD_ATTRIBUTES: &str = "attributes";

/// Empty (match everything) for an empty status, equality on `status` otherwise.
pub fn status_filter(status: &str) -> Document {
    let mut filter = Document::new();
    if !status.is_empty() {
        filter.insert(FIELD_STATUS, status);
    }
    filter
}

pub fn id_filter(id: &DeviceId) -> Document {
    let mut filter = Document::new();
    filter.insert(FIELD_ID, id.as_str());
    filter
}

/// Wrap supplied fields in `$set`.
///
/// `$set` must not be empty, so a patch without fields only guarantees the
/// record exists: `$setOnInsert` of the identity is a no-op on a match.
pub fn upsert_update(id: &DeviceId, fields: Document) -> Document {
    if fields.is_empty() {
        doc! { "$setOnInsert": id_filter(id) }
    } else {
        doc! { "$set": fields }
    }
}
