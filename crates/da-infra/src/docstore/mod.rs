pub mod error;
pub mod error_map;
pub mod mappers;
pub mod memory;
pub mod pool;
pub mod ports;
pub mod query;
pub mod repositories;

pub use error::{StoreError, StoreErrorKind};
pub use mappers::device_mapper::DeviceDocumentMapper;
pub use memory::InMemorySessionPool;
pub use pool::{init_store_pool, MongoSessionPool, DB_NAME, DEVICES_COLLECTION};
pub use repositories::DocumentDeviceStore;
