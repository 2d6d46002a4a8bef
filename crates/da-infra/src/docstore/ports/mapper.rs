use mongodb::bson::Document;

use crate::docstore::error::StoreError;

/// Decodes a stored document into a domain value.
pub trait DocumentMapper<D>: Sync + Send {
    fn to_domain(&self, doc: Document) -> Result<D, StoreError>;
}

/// Encodes the supplied fields of a domain update as a flat field document.
pub trait UpdateMapper<D>: Sync + Send {
    fn to_fields(&self, domain: &D) -> Result<Document, StoreError>;
}
