pub mod docstore;

pub use docstore::{
    init_store_pool, DeviceDocumentMapper, DocumentDeviceStore, InMemorySessionPool,
    MongoSessionPool,
};
